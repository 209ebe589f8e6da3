//! Paint model shared between the scene and the backends.
//!
//! Colors are straight-alpha RGBA with every channel in [0, 1], exactly the
//! value handed to the backend's color uniform.

pub mod color;

pub use color::{Channel, Color};
