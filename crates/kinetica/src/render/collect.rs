//! # Collect: Query the Registry and Build the Draw List
//!
//! Each frame the renderer takes a snapshot of the live entities and looks up
//! the three components it needs to draw one:
//!
//! - a [`Transform`] (model matrix)
//! - a [`Mesh`] (geometry)
//! - a [`Material`] (surface)
//!
//! Entities missing any of them are skipped silently. A light, a camera or a
//! half-built object is a perfectly valid entity; it just isn't drawable.
//!
//! Draw items are sorted by material name to group state changes, then by
//! entity so the order is stable between frames.

use crate::ecs::{Material, Mesh, Registry, Transform};
use crate::id::EntityId;
use crate::math::Mat4;

/// One drawable entity, borrowed from the registry for the frame.
#[derive(Debug)]
pub struct DrawItem<'a> {
    pub entity: EntityId,
    pub model: Mat4,
    pub mesh: &'a Mesh,
    pub material: &'a Material,
}

/// Collect everything drawable this frame.
pub fn collect_draw_list(registry: &Registry) -> Vec<DrawItem<'_>> {
    let mut items = Vec::new();

    for entity in registry.all_entities() {
        let (Some(transform), Some(mesh), Some(material)) = (
            registry.get_component::<Transform>(entity),
            registry.get_component::<Mesh>(entity),
            registry.get_component::<Material>(entity),
        ) else {
            continue;
        };

        items.push(DrawItem {
            entity,
            model: transform.matrix(),
            mesh,
            material,
        });
    }

    items.sort_by(|a, b| {
        a.material
            .name
            .cmp(&b.material.name)
            .then_with(|| a.entity.cmp(&b.entity))
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    fn drawable(registry: &mut Registry, material: &str) -> EntityId {
        let e = registry.create_entity();
        registry.insert_component(e, Transform::from_xyz(1.0, 0.0, 0.0));
        registry.insert_component(e, Mesh::cube());
        registry.insert_component(e, Material::named(material, Vec3::ONE));
        e
    }

    #[test]
    fn empty_registry_draws_nothing() {
        assert!(collect_draw_list(&Registry::new()).is_empty());
    }

    #[test]
    fn skips_entities_missing_components() {
        let mut registry = Registry::new();
        let full = drawable(&mut registry, "Default");

        let only_transform = registry.create_entity();
        registry.add_component::<Transform>(only_transform);

        let no_material = registry.create_entity();
        registry.add_component::<Transform>(no_material);
        registry.add_component::<Mesh>(no_material);

        let bare = registry.create_entity();

        let items = collect_draw_list(&registry);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].entity, full);
        assert!(registry.is_alive(bare));
    }

    #[test]
    fn uses_transform_matrix() {
        let mut registry = Registry::new();
        drawable(&mut registry, "Default");
        let items = collect_draw_list(&registry);
        assert_eq!(items[0].model.w_axis.truncate(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(items[0].mesh.triangle_count(), 12);
    }

    #[test]
    fn sorted_by_material() {
        let mut registry = Registry::new();
        drawable(&mut registry, "Stone");
        drawable(&mut registry, "Clay");
        drawable(&mut registry, "Metal");

        let names: Vec<_> = collect_draw_list(&registry)
            .iter()
            .map(|item| item.material.name.clone())
            .collect();
        assert_eq!(names, ["Clay", "Metal", "Stone"]);
    }

    #[test]
    fn destroyed_entities_are_not_drawn() {
        let mut registry = Registry::new();
        let e = drawable(&mut registry, "Default");
        registry.destroy_entity(e);
        assert!(collect_draw_list(&registry).is_empty());
    }
}
