//! # Storage: Type-Erased Per-Type Component Maps
//!
//! Components are plain data: a `Transform`, a `Mesh`, a `Material`. The
//! [`Registry`](super::Registry) has to hold a store for *every* component
//! type a caller ever uses, without knowing those types at compile time.
//!
//! ## The Split
//!
//! Each component type `T` gets exactly one [`Storage<T>`], a plain
//! `HashMap<EntityId, T>`. The registry keeps them all in one map of
//! `Box<dyn ComponentStorage>`:
//!
//! ```text
//! HashMap<TypeId, Box<dyn ComponentStorage>>
//!   TypeId(Transform) → Storage<Transform> { e1: .., e7: .. }
//!   TypeId(Mesh)      → Storage<Mesh>      { e1: .. }
//! ```
//!
//! [`ComponentStorage`] is the non-generic half. It only exposes what the
//! registry needs when it does *not* know `T`, which is mostly "forget this
//! entity if you have it" during despawn. Typed access goes through
//! `as_any`/`as_any_mut` and a `downcast_ref::<Storage<T>>()` at the call site,
//! where `T` is known.
//!
//! ## Comparison
//!
//! - **Archetype ECS (hecs, bevy_ecs)**: stores rows of component columns per
//!   component *set*. Fast iteration, complex moves between archetypes.
//! - **Here**: one sparse map per component *type*. No iteration guarantees,
//!   but adding/removing a component never moves any other data.

use std::any::Any;
use std::collections::HashMap;

use crate::id::EntityId;

/// The non-generic view of a component store.
pub trait ComponentStorage: Any + Send {
    /// Remove `entity`'s component if present. No-op otherwise.
    fn erase(&mut self, entity: EntityId) -> bool;

    /// Number of components stored.
    fn len(&self) -> usize;

    /// Whether the store holds no components.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the component type, for logs.
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// All components of one type, keyed by entity.
pub struct Storage<T> {
    components: HashMap<EntityId, T>,
}

impl<T> Storage<T> {
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// Return the component for `entity`, default-constructing it if absent.
    pub fn get_or_default(&mut self, entity: EntityId) -> &mut T
    where
        T: Default,
    {
        self.components.entry(entity).or_default()
    }

    /// Insert a component, returning the previous value if any.
    pub fn insert(&mut self, entity: EntityId, value: T) -> Option<T> {
        self.components.insert(entity, value)
    }

    pub fn get(&self, entity: EntityId) -> Option<&T> {
        self.components.get(&entity)
    }

    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut T> {
        self.components.get_mut(&entity)
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.components.contains_key(&entity)
    }

    /// Remove and return the component for `entity`.
    pub fn remove(&mut self, entity: EntityId) -> Option<T> {
        self.components.remove(&entity)
    }
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> ComponentStorage for Storage<T> {
    fn erase(&mut self, entity: EntityId) -> bool {
        self.components.remove(&entity).is_some()
    }

    fn len(&self) -> usize {
        self.components.len()
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Health(u32);

    #[test]
    fn get_or_default_constructs_once() {
        let mut storage = Storage::<Health>::new();
        let e = EntityId::generate();

        storage.get_or_default(e).0 = 10;
        assert_eq!(storage.get_or_default(e), &mut Health(10));
        assert_eq!(ComponentStorage::len(&storage), 1);
    }

    #[test]
    fn erase_through_trait_object() {
        let e = EntityId::generate();
        let mut storage = Storage::<Health>::new();
        storage.insert(e, Health(5));

        let mut erased: Box<dyn ComponentStorage> = Box::new(storage);
        assert!(erased.erase(e));
        assert!(!erased.erase(e));
        assert!(erased.is_empty());
    }

    #[test]
    fn downcast_recovers_concrete_store() {
        let e = EntityId::generate();
        let mut erased: Box<dyn ComponentStorage> = Box::new(Storage::<Health>::new());

        erased
            .as_any_mut()
            .downcast_mut::<Storage<Health>>()
            .unwrap()
            .insert(e, Health(7));

        let typed = erased.as_any().downcast_ref::<Storage<Health>>().unwrap();
        assert_eq!(typed.get(e), Some(&Health(7)));
        assert!(erased.as_any().downcast_ref::<Storage<u32>>().is_none());
        assert!(erased.type_name().ends_with("Health"));
    }

    #[test]
    fn remove_returns_value() {
        let e = EntityId::generate();
        let mut storage = Storage::new();
        storage.insert(e, Health(3));
        assert_eq!(storage.remove(e), Some(Health(3)));
        assert_eq!(storage.remove(e), None);
        assert!(!storage.contains(e));
    }
}
