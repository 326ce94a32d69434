//! # Entity-Component Registry
//!
//! Entities are bare [`EntityId`](crate::id::EntityId)s. Components are any
//! `Default + Send + 'static` type, stored in one sparse map per type.
//!
//! ## Module Overview
//!
//! - [`storage`]: Per-type component maps behind a non-generic trait object
//! - [`registry`]: Live entity set plus the type-keyed collection of stores
//! - [`components`]: Built-in components used by the renderer

pub mod components;
pub mod registry;
pub mod storage;

pub use components::{Material, Mesh, Transform, Triangle, Vertex};
pub use registry::{Component, Registry};
pub use storage::{ComponentStorage, Storage};
