//! Built-in components the renderer knows how to draw.
//!
//! An entity is drawn only when it has all three of [`Transform`], [`Mesh`]
//! and [`Material`]. Any subset is fine otherwise.

mod material;
mod mesh;
mod transform;

pub use material::Material;
pub use mesh::{Mesh, Triangle, Vertex};
pub use transform::Transform;
