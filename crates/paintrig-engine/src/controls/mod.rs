//! Application state and the commands that mutate it.
//!
//! Everything the input layer can change lives in [`GlobalState`]; the
//! registry of placed shapes lives next to it in [`SceneContext`]. Both are
//! plain owned values: the application holds one `SceneContext` and passes
//! it to the renderer each frame.

mod brush;
mod command;
mod context;
mod pose;

pub use brush::Brush;
pub use command::Command;
pub use context::{GlobalState, SceneContext, SceneMode};
pub use pose::{ANIMATION_AMPLITUDE, Pose, oscillate};
