use crate::coords::Viewport;
use crate::input::{InputEvent, InputFrame, InputState};

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application driven by [`Runtime`](crate::window::Runtime).
pub trait App {
    /// Called for each translated input event, *before* it is folded into
    /// `input`, so `input` still holds the previous pointer position.
    fn on_input(&mut self, event: &InputEvent, input: &InputState, viewport: Viewport) -> AppControl {
        let _ = (event, input, viewport);
        AppControl::Continue
    }

    /// Called once per event batch with the drag and wheel motion summed
    /// over it, before the redraw decision. Skipped for batches without
    /// motion.
    fn on_input_frame(&mut self, frame: &InputFrame) -> AppControl {
        let _ = frame;
        AppControl::Continue
    }

    /// Whether the window should be redrawn. Polled once per event-loop
    /// iteration; `true` redraws continuously.
    fn wants_redraw(&self) -> bool {
        true
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
