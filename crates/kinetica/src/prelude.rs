//! Common imports.

pub use crate::app::App;
pub use crate::ecs::{Component, Material, Mesh, Registry, Transform, Triangle, Vertex};
pub use crate::exit::AppExit;
pub use crate::id::EntityId;
pub use crate::math::{Mat4, Quat, Vec2, Vec3, Vec4};
pub use crate::render::ClearColor;
