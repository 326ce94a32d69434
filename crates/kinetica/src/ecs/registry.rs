//! # Registry: The Central Container
//!
//! The [`Registry`] owns every live entity and every component. It's the single
//! source of truth for a document's scene.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ Registry                                             │
//! │                                                      │
//! │  live: HashSet<EntityId>                             │
//! │    identities created and not yet destroyed          │
//! │                                                      │
//! │  storages: HashMap<TypeId, Box<dyn ComponentStorage>>│
//! │    one Storage<T> per component type, created on the │
//! │    first write of that type                          │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Despawn
//!
//! The registry does not track which component types an entity used. When an
//! entity is destroyed, *every* store is asked to erase it. This is a linear
//! walk over the component types (a handful in practice), and it guarantees no
//! store keeps a component for a dead entity.
//!
//! ## Reads Never Allocate
//!
//! `get_component`, `has_component` and `remove_component` look the store up
//! without creating it. Only `add_component`/`insert_component` create stores,
//! so probing for a type that nobody uses leaves the registry untouched.
//!
//! ## Threading
//!
//! Not thread-safe. The registry is `Send`, so wrap it in a `Mutex` to share
//! it.

use std::any::TypeId;
use std::collections::{HashMap, HashSet};

use super::storage::{ComponentStorage, Storage};
use crate::id::EntityId;

/// Bound satisfied by every component type.
pub trait Component: Default + Send + 'static {}

impl<T: Default + Send + 'static> Component for T {}

/// Entity-component store keyed by [`EntityId`].
#[derive(Default)]
pub struct Registry {
    live: HashSet<EntityId>,
    storages: HashMap<TypeId, Box<dyn ComponentStorage>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Entity Management ────────────────────────────────────────────

    /// Create an entity with a fresh identity and no components.
    pub fn create_entity(&mut self) -> EntityId {
        let entity = EntityId::generate();
        self.live.insert(entity);
        log::trace!("created entity {entity}");
        entity
    }

    /// Destroy an entity and drop all of its components.
    ///
    /// Returns `false` (and does nothing) if the entity isn't live, which
    /// covers nil, never-created and already-destroyed identities.
    pub fn destroy_entity(&mut self, entity: EntityId) -> bool {
        if !self.live.remove(&entity) {
            return false;
        }

        for storage in self.storages.values_mut() {
            if storage.erase(entity) {
                log::trace!("dropped `{}` of {entity}", storage.type_name());
            }
        }
        log::trace!("destroyed entity {entity}");
        true
    }

    /// Destroy every live entity.
    pub fn clear(&mut self) {
        for entity in self.all_entities() {
            self.destroy_entity(entity);
        }
    }

    /// Check if an entity is live.
    pub fn is_alive(&self, entity: EntityId) -> bool {
        self.live.contains(&entity)
    }

    /// Number of live entities.
    pub fn entity_count(&self) -> usize {
        self.live.len()
    }

    /// Snapshot of the live entities. Order is unspecified.
    pub fn all_entities(&self) -> Vec<EntityId> {
        self.live.iter().copied().collect()
    }

    // ── Components ───────────────────────────────────────────────────

    /// Get the `T` component of `entity`, default-constructing it if absent.
    ///
    /// Liveness isn't enforced. A component attached to a non-live identity is
    /// stored but unreachable through the read methods.
    pub fn add_component<T: Component>(&mut self, entity: EntityId) -> &mut T {
        self.warn_if_dead::<T>(entity);
        self.storage_or_create::<T>().get_or_default(entity)
    }

    /// Set the `T` component of `entity`, returning the previous value.
    pub fn insert_component<T: Component>(&mut self, entity: EntityId, value: T) -> Option<T> {
        self.warn_if_dead::<T>(entity);
        self.storage_or_create::<T>().insert(entity, value)
    }

    /// Remove the `T` component of `entity`. Returns `false` if there was none.
    pub fn remove_component<T: Component>(&mut self, entity: EntityId) -> bool {
        self.storage_mut::<T>()
            .and_then(|s| s.remove(entity))
            .is_some()
    }

    /// Get a shared reference to the `T` component of a live entity.
    pub fn get_component<T: Component>(&self, entity: EntityId) -> Option<&T> {
        if !self.is_alive(entity) {
            return None;
        }
        self.storage::<T>()?.get(entity)
    }

    /// Get a mutable reference to the `T` component of a live entity.
    pub fn get_component_mut<T: Component>(&mut self, entity: EntityId) -> Option<&mut T> {
        if !self.is_alive(entity) {
            return None;
        }
        self.storage_mut::<T>()?.get_mut(entity)
    }

    /// Check whether a live entity has a `T` component.
    pub fn has_component<T: Component>(&self, entity: EntityId) -> bool {
        self.is_alive(entity) && self.storage::<T>().is_some_and(|s| s.contains(entity))
    }

    /// Number of stored `T` components.
    pub fn component_count<T: Component>(&self) -> usize {
        self.storage::<T>().map_or(0, |s| s.len())
    }

    /// Number of component stores created so far.
    pub fn storage_count(&self) -> usize {
        self.storages.len()
    }

    // ── Store Lookup ─────────────────────────────────────────────────

    fn storage<T: Component>(&self) -> Option<&Storage<T>> {
        self.storages
            .get(&TypeId::of::<T>())
            .and_then(|s| s.as_any().downcast_ref())
    }

    fn storage_mut<T: Component>(&mut self) -> Option<&mut Storage<T>> {
        self.storages
            .get_mut(&TypeId::of::<T>())
            .and_then(|s| s.as_any_mut().downcast_mut())
    }

    fn storage_or_create<T: Component>(&mut self) -> &mut Storage<T> {
        self.storages
            .entry(TypeId::of::<T>())
            .or_insert_with(|| {
                log::debug!("created storage for `{}`", std::any::type_name::<T>());
                let storage: Box<dyn ComponentStorage> = Box::new(Storage::<T>::new());
                storage
            })
            .as_any_mut()
            .downcast_mut()
            .unwrap_or_else(|| {
                panic!(
                    "storage type mismatch for `{}`",
                    std::any::type_name::<T>()
                )
            })
    }

    fn warn_if_dead<T: Component>(&self, entity: EntityId) {
        if !self.is_alive(entity) {
            log::warn!(
                "attaching `{}` to non-live entity {entity}",
                std::any::type_name::<T>()
            );
        }
    }
}
