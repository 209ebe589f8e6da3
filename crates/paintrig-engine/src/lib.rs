//! Paintrig engine.
//!
//! Immediate-mode 2D/3D scene composition: a registry of user-placed shapes,
//! fixed procedural pictures and an articulated cube figure, all redrawn from
//! state every frame through a pluggable [`render::Backend`]. Also owns the
//! winit/wgpu runtime used by the interactive studio.

pub mod error;
pub mod math;
pub mod coords;
pub mod paint;
pub mod scene;
pub mod rig;
pub mod controls;
pub mod render;
pub mod status;

pub mod logging;
pub mod time;
pub mod device;
pub mod input;
pub mod window;
pub mod core;

pub use error::SceneError;
