//! # Kinetica: Low-poly 3D Modeling
//!
//! The core of Kinetica is a small entity-component [`Registry`](ecs::Registry)
//! keyed by random 128-bit [`EntityId`](id::EntityId)s. Everything else (the
//! window, the wgpu renderer, the command line) is thin plumbing around it.
//!
//! Start with `use kinetica::prelude::*`.

pub mod app;
pub mod cli;
pub mod ecs;
pub mod exit;
pub mod id;
pub mod logging;
pub mod math;
pub mod prelude;
pub mod render;
pub(crate) mod window;
