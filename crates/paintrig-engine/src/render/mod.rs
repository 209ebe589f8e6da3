//! Immediate-mode draw backends.
//!
//! The scene layer never talks to a device directly: every frame it calls
//! [`Backend::begin_frame`], submits one [`DrawCall`] per shape, then
//! [`Backend::end_frame`]. Implementations:
//! - [`GpuBackend`]: wgpu, presents to a window surface
//! - [`Rasterizer`]: CPU, renders into an RGBA buffer (snapshots, tests)
//! - [`RecordingBackend`]: keeps the submitted calls for inspection
//!
//! Convention: vertex positions are mapped by the call's transform straight
//! into normalized device coordinates (x right, y up, z in `[-1, 1]`).
//!
//! [`DrawCall`]: crate::scene::DrawCall

mod backend;
mod ctx;
mod gpu;
mod raster;

pub use backend::{Backend, RecordingBackend};
pub use ctx::{RenderCtx, RenderTarget};
pub use gpu::GpuBackend;
pub use raster::Rasterizer;
