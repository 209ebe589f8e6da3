//! Input subsystem.
//!
//! Platform events are translated into [`InputEvent`]s by
//! [`platform::translate_window_event`], folded into [`InputState`], and
//! mapped to application commands by [`Bindings`].

mod bindings;
mod frame;
mod state;
mod types;

pub mod platform;

pub use bindings::{Bindings, Intent, WheelSteps};
pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, MouseWheelDelta,
};
