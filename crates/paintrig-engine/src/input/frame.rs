/// Continuous input summed between two event-loop waits.
///
/// Discrete events reach the app one at a time; drag and wheel motion are
/// folded here and handed over once per batch.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct InputFrame {
    /// Pointer motion while the primary button is held, logical pixels.
    pub drag_delta: (f32, f32),
    /// Summed vertical wheel motion, in lines.
    pub wheel_lines: f32,
}

impl InputFrame {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.drag_delta == (0.0, 0.0) && self.wheel_lines == 0.0
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
