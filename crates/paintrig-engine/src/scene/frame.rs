use std::time::{Duration, Instant};

use crate::controls::{SceneContext, SceneMode};
use crate::error::SceneError;
use crate::paint::Color;
use crate::render::Backend;
use crate::rig::Rig;

/// What one call to [`Scene::render`] produced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameReport {
    pub mode: SceneMode,
    /// Shapes (or body parts) drawn.
    pub shapes: usize,
    /// Draw calls submitted to the backend.
    pub draw_calls: usize,
    /// Wall time spent building and submitting the frame.
    pub duration: Duration,
}

impl FrameReport {
    /// Frame time in milliseconds.
    #[inline]
    pub fn ms(&self) -> f64 {
        self.duration.as_nanos() as f64 / 1e6
    }

    /// Frames per second implied by [`FrameReport::ms`], or `0` for an
    /// unmeasurably short frame.
    pub fn fps(&self) -> f64 {
        let ms = self.ms();
        if ms > 0.0 { 1000.0 / ms } else { 0.0 }
    }
}

/// Stateless per-frame renderer.
///
/// Owns only what never changes between frames: the figure's part tree and
/// the clear color. Every call redraws everything from the passed context.
#[derive(Debug, Clone)]
pub struct Scene {
    rig: Rig,
    clear_color: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Rig::quadruped())
    }
}

impl Scene {
    pub fn new(rig: Rig) -> Self {
        Self {
            rig,
            clear_color: Color::BLACK,
        }
    }

    /// Replaces the clear color, clamped to [0, 1]. NaN or infinite
    /// channels are rejected.
    pub fn with_clear_color(mut self, color: Color) -> Result<Self, SceneError> {
        self.clear_color = color.validated()?;
        Ok(self)
    }

    #[inline]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    #[inline]
    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    /// Clears the backend and redraws the current mode.
    pub fn render(&self, ctx: &SceneContext, backend: &mut dyn Backend) -> FrameReport {
        let start = Instant::now();
        let mode = ctx.state.mode;

        backend.begin_frame(self.clear_color);

        let (shapes, draw_calls) = match mode {
            SceneMode::Paint => {
                let n = ctx.shapes.render_all(backend);
                (n, n)
            }
            SceneMode::Picture(picture) => {
                let shapes = picture.shapes();
                for shape in &shapes {
                    shape.render(backend);
                }
                (shapes.len(), shapes.len())
            }
            SceneMode::Figure => {
                let pose = &ctx.state.pose;
                let parts = self.rig.resolve(pose, &pose.root_transform());
                for part in &parts {
                    backend.draw(part.to_cube().draw_call());
                }
                (parts.len(), parts.len())
            }
        };

        backend.end_frame();

        let report = FrameReport {
            mode,
            shapes,
            draw_calls,
            duration: start.elapsed(),
        };
        log::trace!(
            "frame: mode={} shapes={} ms={:.3}",
            mode.label(),
            report.shapes,
            report.ms()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::Command;
    use crate::coords::Vec2;
    use crate::render::RecordingBackend;
    use crate::scene::{Picture, Primitive, ShapeKind};

    #[test]
    fn paint_mode_redraws_registry_in_order() {
        let scene = Scene::default();
        let mut ctx = SceneContext::new();
        ctx.apply(Command::SelectKind(ShapeKind::Triangle)).unwrap();
        ctx.apply(Command::Place(Vec2::new(-0.5, 0.0))).unwrap();
        ctx.apply(Command::SelectKind(ShapeKind::Circle)).unwrap();
        ctx.apply(Command::Place(Vec2::new(0.5, 0.0))).unwrap();

        let mut backend = RecordingBackend::new();
        let report = scene.render(&ctx, &mut backend);

        assert_eq!(report.draw_calls, 2);
        let prims: Vec<_> = backend.calls().iter().map(|c| c.primitive).collect();
        assert_eq!(prims, vec![Primitive::Triangles, Primitive::TriangleFan]);
        assert_eq!(backend.clear_color(), Some(Color::BLACK));
    }

    #[test]
    fn each_render_starts_from_a_clear() {
        let scene = Scene::default();
        let mut ctx = SceneContext::new();
        ctx.apply(Command::Place(Vec2::zero())).unwrap();

        let mut backend = RecordingBackend::new();
        scene.render(&ctx, &mut backend);
        scene.render(&ctx, &mut backend);
        assert_eq!(backend.calls().len(), 1);
        assert_eq!(backend.frames(), 2);
    }

    #[test]
    fn figure_mode_draws_one_cube_per_part() {
        let scene = Scene::default();
        let mut ctx = SceneContext::new();
        ctx.apply(Command::SetMode(SceneMode::Figure)).unwrap();

        let mut backend = RecordingBackend::new();
        let report = scene.render(&ctx, &mut backend);

        assert_eq!(report.shapes, scene.rig().len());
        assert!(backend.calls().iter().all(|c| c.vertices.len() == 36));
    }

    #[test]
    fn picture_mode_ignores_registry() {
        let scene = Scene::default();
        let mut ctx = SceneContext::new();
        ctx.apply(Command::Place(Vec2::zero())).unwrap();
        ctx.apply(Command::SetMode(SceneMode::Picture(Picture::Star))).unwrap();

        let mut backend = RecordingBackend::new();
        let report = scene.render(&ctx, &mut backend);
        assert_eq!(report.shapes, Picture::Star.shapes().len());
        assert!(backend.calls().iter().all(|c| c.primitive == Primitive::Triangles));
    }

    #[test]
    fn clear_color_rejects_nan() {
        assert!(Scene::default().with_clear_color(Color::rgba(0.0, f32::NAN, 0.0, 1.0)).is_err());
        let scene = Scene::default().with_clear_color(Color::rgba(0.2, 0.3, 2.0, 1.0)).unwrap();
        assert_eq!(scene.clear_color(), Color::rgba(0.2, 0.3, 1.0, 1.0));
    }

    #[test]
    fn fps_of_zero_duration_is_zero() {
        let report = FrameReport {
            mode: SceneMode::Paint,
            shapes: 0,
            draw_calls: 0,
            duration: Duration::ZERO,
        };
        assert_eq!(report.fps(), 0.0);

        let report = FrameReport { duration: Duration::from_millis(4), ..report };
        assert!((report.fps() - 250.0).abs() < 1e-9);
    }
}
