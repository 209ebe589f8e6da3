//! Scene model: shapes, the shape registry, fixed pictures and the per-frame
//! renderer that turns application state into draw calls.
//!
//! Responsibilities:
//! - describe renderer-agnostic draw calls ([`DrawCall`])
//! - keep the ordered registry of user-placed shapes ([`ShapeList`])
//! - redraw the whole frame from state on every call ([`Scene::render`])

mod cmd;
mod frame;
mod list;
mod picture;

pub mod shapes;

pub use cmd::{DrawCall, Primitive};
pub use frame::{FrameReport, Scene};
pub use list::ShapeList;
pub use picture::Picture;
pub use shapes::{
    CircleShape, CubeShape, DEFAULT_SIDES, MAX_SIDES, MIN_SIDES, PointShape, Shape, ShapeKind,
    TriangleShape,
};
