//! Position, rotation and scale, with a cached model matrix.

use std::cell::Cell;

use crate::math::{Mat4, Quat, Vec3};

/// A 3D transform: position, rotation, and scale.
///
/// The composed model matrix is cached next to the fields it derives from.
/// Every setter marks the cache dirty; [`Transform::matrix`] recomputes only
/// when it is.
#[derive(Debug, Clone)]
pub struct Transform {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
    cached: Cell<Option<Mat4>>,
    /// Number of times `matrix()` rebuilt the cache. Test builds only.
    #[cfg(test)]
    recomputations: Cell<u32>,
}

impl Transform {
    /// Identity transform (origin, no rotation, uniform scale of 1).
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            cached: Cell::new(None),
            #[cfg(test)]
            recomputations: Cell::new(0),
        }
    }

    /// Create a transform at the given position.
    pub fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        let mut transform = Self::identity();
        transform.position = Vec3::new(x, y, z);
        transform
    }

    /// Return a copy with the given rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.set_rotation(rotation);
        self
    }

    /// Return a copy with uniform scale applied.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.set_scale(Vec3::splat(scale));
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.invalidate();
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.invalidate();
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.invalidate();
    }

    /// Move by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        self.set_position(self.position + offset);
    }

    /// Whether the next [`matrix`](Self::matrix) call will recompute.
    pub fn is_dirty(&self) -> bool {
        self.cached.get().is_none()
    }

    /// The 4x4 model matrix (scale, then rotation, then translation).
    pub fn matrix(&self) -> Mat4 {
        if let Some(matrix) = self.cached.get() {
            return matrix;
        }
        let matrix = Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position);
        self.cached.set(Some(matrix));
        #[cfg(test)]
        self.recomputations.set(self.recomputations.get() + 1);
        matrix
    }

    fn invalidate(&mut self) {
        self.cached.set(None);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.rotation == other.rotation
            && self.scale == other.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position(), Vec3::ZERO);
        assert_eq!(t.scale(), Vec3::ONE);
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn matrix_is_cached_between_reads() {
        let t = Transform::from_xyz(1.0, 2.0, 3.0);
        assert!(t.is_dirty());

        let first = t.matrix();
        let second = t.matrix();
        assert_eq!(first, second);
        assert!(!t.is_dirty());
        assert_eq!(t.recomputations.get(), 1);
    }

    #[test]
    fn setters_invalidate_cache() {
        let mut t = Transform::identity();
        t.matrix();

        t.set_position(Vec3::new(5.0, 0.0, 0.0));
        assert!(t.is_dirty());
        let m = t.matrix();
        assert_eq!(m.w_axis.truncate(), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(t.recomputations.get(), 2);

        t.set_scale(Vec3::splat(2.0));
        t.set_rotation(Quat::from_rotation_y(1.0));
        t.matrix();
        assert_eq!(t.recomputations.get(), 3);
    }

    #[test]
    fn composes_scale_rotation_translation() {
        let t = Transform::from_xyz(0.0, 1.0, 0.0)
            .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2))
            .with_scale(2.0);
        let p = t.matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(0.0, 3.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn translate_accumulates() {
        let mut t = Transform::identity();
        t.translate(Vec3::X);
        t.translate(Vec3::X);
        assert_eq!(t.position(), Vec3::new(2.0, 0.0, 0.0));
    }
}
