//! Status text written after each rendered frame.
//!
//! Targets are addressed by name (`numdot`, `numside`). A sink that lacks a
//! target reports [`SceneError::UnknownStatusTarget`]; [`report`] logs that
//! and carries on with the remaining targets.

mod board;

pub use board::StatusBoard;

use crate::controls::GlobalState;
use crate::error::SceneError;
use crate::scene::FrameReport;

/// Shape count and frame timing.
pub const SHAPE_COUNT_TARGET: &str = "numdot";
/// Current circle side count.
pub const SIDE_COUNT_TARGET: &str = "numside";

/// Named text outputs.
pub trait StatusSink {
    fn set_text(&mut self, target: &str, text: &str) -> Result<(), SceneError>;
}

/// `numdot {count} ms: {ms} fps: {fps}`, both numbers floored.
pub fn frame_status(report: &FrameReport) -> String {
    format!(
        "{SHAPE_COUNT_TARGET} {} ms: {} fps: {}",
        report.shapes,
        report.ms().floor() as u64,
        report.fps().floor() as u64
    )
}

/// Writes every status target for one frame.
///
/// Returns how many targets were written.
pub fn report(report: &FrameReport, state: &GlobalState, sink: &mut dyn StatusSink) -> usize {
    let sides = state.brush.sides.to_string();
    let entries = [
        (SHAPE_COUNT_TARGET, frame_status(report)),
        (SIDE_COUNT_TARGET, sides),
    ];

    let mut written = 0;
    for (target, text) in &entries {
        match sink.set_text(target, text) {
            Ok(()) => written += 1,
            Err(err) => log::warn!("{err}"),
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::controls::SceneMode;

    fn frame(shapes: usize, ms: u64) -> FrameReport {
        FrameReport {
            mode: SceneMode::Paint,
            shapes,
            draw_calls: shapes,
            duration: Duration::from_millis(ms),
        }
    }

    #[test]
    fn frame_status_floors_ms_and_fps() {
        let mut r = frame(3, 0);
        r.duration = Duration::from_micros(2_500);
        assert_eq!(frame_status(&r), "numdot 3 ms: 2 fps: 400");
    }

    #[test]
    fn zero_duration_reports_zero_fps() {
        assert_eq!(frame_status(&frame(0, 0)), "numdot 0 ms: 0 fps: 0");
    }

    #[test]
    fn report_writes_both_targets() {
        let mut board = StatusBoard::with_targets([SHAPE_COUNT_TARGET, SIDE_COUNT_TARGET]);
        let state = GlobalState::default();
        assert_eq!(report(&frame(2, 5), &state, &mut board), 2);
        assert_eq!(board.text(SIDE_COUNT_TARGET), Some("14"));
        assert_eq!(board.text(SHAPE_COUNT_TARGET), Some("numdot 2 ms: 5 fps: 200"));
    }

    #[test]
    fn missing_target_is_skipped() {
        let mut board = StatusBoard::with_targets([SIDE_COUNT_TARGET]);
        let state = GlobalState::default();
        assert_eq!(report(&frame(1, 1), &state, &mut board), 1);
        assert_eq!(board.text(SHAPE_COUNT_TARGET), None);
    }
}
