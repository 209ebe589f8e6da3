//! Coordinate types shared by the scene, the input layer and the backends.
//!
//! Canonical scene space is normalized device coordinates:
//! - origin at the canvas center
//! - +X right, +Y up
//! - the visible canvas spans [-1, 1] on both axes
//!
//! Pointer input arrives in window pixels (top-left origin, +Y down) and is
//! converted with [`Viewport::to_ndc`].

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
