//! Surface appearance of a mesh.

use crate::math::Vec3;

/// A simple metallic/roughness material.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub base_color: Vec3,
    pub metallic: f32,
    pub roughness: f32,
    /// Take color from the mesh vertices instead of `base_color`.
    pub use_vertex_color: bool,
    pub name: String,
}

impl Material {
    /// A default material with a different name and color.
    pub fn named(name: impl Into<String>, base_color: Vec3) -> Self {
        Self {
            base_color,
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: Vec3::splat(0.8),
            metallic: 0.0,
            roughness: 0.5,
            use_vertex_color: false,
            name: "Default".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let m = Material::default();
        assert_eq!(m.base_color, Vec3::splat(0.8));
        assert_eq!(m.roughness, 0.5);
        assert_eq!(m.name, "Default");
    }

    #[test]
    fn named_keeps_other_defaults() {
        let m = Material::named("Clay", Vec3::new(0.7, 0.4, 0.3));
        assert_eq!(m.name, "Clay");
        assert_eq!(m.metallic, 0.0);
        assert!(!m.use_vertex_color);
    }
}
