use crate::error::SceneError;
use crate::paint::Channel;
use crate::scene::{Picture, ShapeList};

use super::{Brush, Command, Pose};

/// Which scene the renderer draws.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum SceneMode {
    /// Redraw the shape registry.
    #[default]
    Paint,
    /// Redraw a fixed procedural picture.
    Picture(Picture),
    /// Redraw the articulated figure.
    Figure,
}

impl SceneMode {
    /// Next mode in the cycle paint → star → landscape → figure → paint.
    pub fn next(self) -> Self {
        match self {
            SceneMode::Paint => SceneMode::Picture(Picture::Star),
            SceneMode::Picture(Picture::Star) => SceneMode::Picture(Picture::Landscape),
            SceneMode::Picture(Picture::Landscape) => SceneMode::Figure,
            SceneMode::Figure => SceneMode::Paint,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SceneMode::Paint => "paint",
            SceneMode::Picture(Picture::Star) => "star",
            SceneMode::Picture(Picture::Landscape) => "landscape",
            SceneMode::Figure => "figure",
        }
    }
}

/// Selection, brush and pose state.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GlobalState {
    pub brush: Brush,
    pub pose: Pose,
    pub mode: SceneMode,
}

/// Everything the renderer reads: state plus the shape registry.
#[derive(Debug, Clone, Default)]
pub struct SceneContext {
    pub state: GlobalState,
    pub shapes: ShapeList,
}

impl SceneContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shapes(shapes: ShapeList) -> Self {
        Self {
            state: GlobalState::default(),
            shapes,
        }
    }

    /// Applies one command. Returns whether the frame must be redrawn.
    ///
    /// Brush edits only affect future shapes and do not request a redraw.
    pub fn apply(&mut self, command: Command) -> Result<bool, SceneError> {
        let state = &mut self.state;
        match command {
            Command::SelectKind(kind) => {
                state.brush.kind = kind;
                Ok(false)
            }
            Command::SetColor(color) => {
                state.brush.set_color(color)?;
                Ok(false)
            }
            Command::SetChannel { channel, raw } => {
                state.brush.set_channel_raw(channel, raw)?;
                Ok(false)
            }
            Command::SetAlpha(a) => {
                state.brush.set_channel(Channel::Alpha, a)?;
                Ok(false)
            }
            Command::SetSize(size) => {
                state.brush.set_size(size)?;
                Ok(false)
            }
            Command::SetSides(raw) => {
                state.brush.set_sides(raw);
                Ok(true)
            }
            Command::Clear => {
                self.shapes.clear();
                log::debug!("shape list cleared");
                Ok(true)
            }
            Command::SetMode(mode) => {
                let changed = state.mode != mode;
                if changed {
                    log::info!("scene mode: {}", mode.label());
                }
                state.mode = mode;
                Ok(changed)
            }
            Command::Place(position) => {
                if state.mode != SceneMode::Paint {
                    log::debug!("ignoring placement in {} mode", state.mode.label());
                    return Ok(false);
                }
                if !position.is_finite() {
                    return Err(SceneError::NonFinite { what: "pointer position" });
                }
                self.shapes.add(state.brush.shape_at(position));
                Ok(true)
            }
            Command::SetJointAngle { joint, degrees } => {
                state.pose.set_angle(joint, degrees)?;
                Ok(state.mode == SceneMode::Figure)
            }
            Command::ToggleAnimation(joint) => {
                let on = state.pose.toggle_animated(joint);
                log::info!("{joint:?} animation {}", if on { "on" } else { "off" });
                Ok(false)
            }
            Command::SetAnimation { joint, on } => {
                state.pose.set_animated(joint, on);
                Ok(false)
            }
            Command::SetGlobalRotation { x, y } => {
                state.pose.set_global_rotation(x, y)?;
                Ok(state.mode == SceneMode::Figure)
            }
        }
    }

    /// Advances animated joints to `elapsed_secs`. Returns whether the
    /// frame must be redrawn.
    pub fn advance(&mut self, elapsed_secs: f64) -> bool {
        self.state.pose.advance(elapsed_secs) && self.state.mode == SceneMode::Figure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::rig::Joint;
    use crate::scene::{Shape, ShapeKind};

    #[test]
    fn place_appends_snapshot_of_brush() {
        let mut ctx = SceneContext::new();
        ctx.apply(Command::SetColor(Color::RED)).unwrap();
        ctx.apply(Command::SetSize(12.0)).unwrap();
        assert!(ctx.apply(Command::Place(Vec2::new(0.0, 0.5))).unwrap());
        ctx.apply(Command::SetColor(Color::GREEN)).unwrap();

        let Some(Shape::Point(p)) = ctx.shapes.iter().next() else { panic!("expected point") };
        assert_eq!(p.color, Color::RED);
        assert_eq!(p.size, 12.0);
    }

    #[test]
    fn nan_color_is_rejected_and_never_placed() {
        let mut ctx = SceneContext::new();
        ctx.apply(Command::SetColor(Color::GREEN)).unwrap();
        assert!(ctx.apply(Command::SetColor(Color::rgba(f32::NAN, 0.0, 0.0, 1.0))).is_err());
        assert_eq!(ctx.state.brush.color, Color::GREEN);

        ctx.apply(Command::Place(Vec2::zero())).unwrap();
        assert_eq!(ctx.shapes.iter().next().map(Shape::color), Some(Color::GREEN));
    }

    #[test]
    fn clear_empties_registry_and_redraws() {
        let mut ctx = SceneContext::new();
        for _ in 0..3 {
            ctx.apply(Command::Place(Vec2::zero())).unwrap();
        }
        assert!(ctx.apply(Command::Clear).unwrap());
        assert!(ctx.shapes.is_empty());
    }

    #[test]
    fn place_is_ignored_outside_paint_mode() {
        let mut ctx = SceneContext::new();
        ctx.apply(Command::SetMode(SceneMode::Figure)).unwrap();
        assert!(!ctx.apply(Command::Place(Vec2::zero())).unwrap());
        assert!(ctx.shapes.is_empty());
    }

    #[test]
    fn non_finite_pointer_is_rejected() {
        let mut ctx = SceneContext::new();
        assert!(ctx.apply(Command::Place(Vec2::new(f32::NAN, 0.0))).is_err());
        assert!(ctx.shapes.is_empty());
    }

    #[test]
    fn select_kind_changes_next_shape() {
        let mut ctx = SceneContext::new();
        ctx.apply(Command::SelectKind(ShapeKind::Triangle)).unwrap();
        ctx.apply(Command::Place(Vec2::zero())).unwrap();
        assert_eq!(ctx.shapes.iter().next().map(Shape::kind), Some(ShapeKind::Triangle));
    }

    #[test]
    fn advance_redraws_only_animated_figure() {
        let mut ctx = SceneContext::new();
        ctx.apply(Command::ToggleAnimation(Joint::Ear)).unwrap();
        assert!(!ctx.advance(1.0));
        ctx.apply(Command::SetMode(SceneMode::Figure)).unwrap();
        assert!(ctx.advance(1.0));
        assert_eq!(ctx.state.pose.angle(Joint::Ear), (45.0 * 1.0f64.sin()) as f32);
    }

    #[test]
    fn circle_with_fourteen_sides_renders_fourteen_fan_segments() {
        let mut ctx = SceneContext::new();
        ctx.apply(Command::SelectKind(ShapeKind::Circle)).unwrap();
        ctx.apply(Command::SetSides(14)).unwrap();
        ctx.apply(Command::Place(Vec2::new(0.1, -0.1))).unwrap();

        let mut backend = crate::render::RecordingBackend::new();
        assert_eq!(ctx.shapes.render_all(&mut backend), 1);
        assert_eq!(backend.calls()[0].primitive_count(), 14);
    }

    #[test]
    fn out_of_range_sides_are_clamped() {
        let mut ctx = SceneContext::new();
        ctx.apply(Command::SetSides(-5)).unwrap();
        assert_eq!(ctx.state.brush.sides, crate::scene::MIN_SIDES);
        ctx.apply(Command::SetSides(10_000)).unwrap();
        assert_eq!(ctx.state.brush.sides, crate::scene::MAX_SIDES);
    }

    #[test]
    fn mode_cycle_returns_to_paint() {
        let mut m = SceneMode::Paint;
        for _ in 0..4 {
            m = m.next();
        }
        assert_eq!(m, SceneMode::Paint);
    }
}
