//! Rendering subsystem: draw list collection and wgpu plumbing.

pub mod collect;
pub mod gpu;
pub mod pass;

pub use collect::{DrawItem, collect_draw_list};
pub use gpu::GpuContext;
pub use pass::{ClearColor, render_frame};
