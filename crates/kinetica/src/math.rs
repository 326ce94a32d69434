//! glam re-exports.
//!
//! Users don't need to depend on glam directly.

pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
