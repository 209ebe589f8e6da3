use crate::paint::Color;
use crate::scene::DrawCall;

/// Sink for one frame's draw calls.
///
/// Calls arrive in submission order; later calls draw over earlier ones at
/// equal depth.
pub trait Backend {
    /// Starts a frame: color cleared to `clear`, depth cleared to far.
    fn begin_frame(&mut self, clear: Color);

    /// Submits one draw.
    fn draw(&mut self, call: DrawCall);

    /// Ends the frame. Backends that batch may do their work here.
    fn end_frame(&mut self) {}
}

/// Backend that only records what it was given.
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    calls: Vec<DrawCall>,
    clear_color: Option<Color>,
    frames: u64,
    open: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls submitted since the last `begin_frame`.
    #[inline]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Clear color of the last frame, if any frame was started.
    #[inline]
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    /// Number of completed frames.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Backend for RecordingBackend {
    fn begin_frame(&mut self, clear: Color) {
        self.calls.clear();
        self.clear_color = Some(clear);
        self.open = true;
    }

    fn draw(&mut self, call: DrawCall) {
        self.calls.push(call);
    }

    fn end_frame(&mut self) {
        if self.open {
            self.frames += 1;
            self.open = false;
        }
    }
}
