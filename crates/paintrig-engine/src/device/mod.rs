//! GPU device and window surface.
//!
//! Creates the wgpu instance, adapter, device and queue; configures the
//! surface; hands out one [`GpuFrame`] per presented frame.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
