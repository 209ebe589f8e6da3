use crate::coords::Vec2;
use crate::error::{SceneError, finite};
use crate::paint::{Channel, Color};
use crate::scene::{
    CircleShape, CubeShape, DEFAULT_SIDES, MAX_SIDES, MIN_SIDES, PointShape, Shape, ShapeKind,
    TriangleShape,
};

pub const DEFAULT_SIZE: f32 = 5.0;
pub const MIN_SIZE: f32 = 1.0;
pub const MAX_SIZE: f32 = 100.0;

/// Current paint settings. Every placed shape snapshots these values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Brush {
    pub color: Color,
    pub size: f32,
    pub kind: ShapeKind,
    pub sides: u32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            size: DEFAULT_SIZE,
            kind: ShapeKind::Point,
            sides: DEFAULT_SIDES,
        }
    }
}

impl Brush {
    /// Sets one channel from a slider position in `0..=100`.
    pub fn set_channel_raw(&mut self, channel: Channel, raw: i32) -> Result<(), SceneError> {
        self.set_channel(channel, raw as f32 / 100.0)
    }

    /// Replaces the whole color. A non-finite channel leaves the brush as is.
    pub fn set_color(&mut self, color: Color) -> Result<(), SceneError> {
        self.color = color.validated()?;
        Ok(())
    }

    /// Sets one channel, clamped to [0, 1].
    pub fn set_channel(&mut self, channel: Channel, value: f32) -> Result<(), SceneError> {
        if !(0.0..=1.0).contains(&value) && value.is_finite() {
            log::warn!("{channel:?} channel {value} out of range; clamping");
        }
        self.color = self.color.with_channel(channel, value)?;
        Ok(())
    }

    /// Sets the brush size, clamped to `[MIN_SIZE, MAX_SIZE]`.
    pub fn set_size(&mut self, size: f32) -> Result<(), SceneError> {
        let size = finite(size, "brush size")?;
        let clamped = size.clamp(MIN_SIZE, MAX_SIZE);
        if clamped != size {
            log::warn!("brush size {size} out of range; clamped to {clamped}");
        }
        self.size = clamped;
        Ok(())
    }

    /// Sets the circle side count from a raw slider value, clamped to
    /// `[MIN_SIDES, MAX_SIDES]`.
    pub fn set_sides(&mut self, raw: i64) {
        let clamped = raw.clamp(MIN_SIDES as i64, MAX_SIDES as i64) as u32;
        if clamped as i64 != raw {
            log::warn!("side count {raw} out of range; clamped to {clamped}");
        }
        self.sides = clamped;
    }

    /// Builds the shape this brush places at `position`.
    pub fn shape_at(&self, position: Vec2) -> Shape {
        match self.kind {
            ShapeKind::Point => PointShape::new(position, self.color, self.size).into(),
            ShapeKind::Triangle => TriangleShape::at(position, self.color, self.size).into(),
            ShapeKind::Circle => {
                CircleShape::new(position, self.color, self.size, self.sides).into()
            }
            ShapeKind::Cube => CubeShape::at(position, self.color, self.size).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_maps_raw_over_100() {
        let mut b = Brush::default();
        b.set_channel_raw(Channel::Red, 25).unwrap();
        b.set_channel_raw(Channel::Green, 100).unwrap();
        b.set_channel_raw(Channel::Blue, 0).unwrap();
        assert_eq!(b.color, Color::rgba(0.25, 1.0, 0.0, 1.0));
    }

    #[test]
    fn slider_overflow_clamps() {
        let mut b = Brush::default();
        b.set_channel_raw(Channel::Red, 250).unwrap();
        assert_eq!(b.color.r, 1.0);
    }

    #[test]
    fn nan_channel_keeps_previous_color() {
        let mut b = Brush::default();
        assert!(b.set_channel(Channel::Alpha, f32::NAN).is_err());
        assert_eq!(b.color, Color::WHITE);
    }

    #[test]
    fn nan_color_keeps_previous_color() {
        let mut b = Brush::default();
        b.set_color(Color::RED).unwrap();
        let err = b.set_color(Color::rgba(f32::NAN, 0.0, 0.0, 1.0)).unwrap_err();
        assert_eq!(err, SceneError::NonFinite { what: "color channel" });
        assert_eq!(b.color, Color::RED);
    }

    #[test]
    fn sides_are_clamped() {
        let mut b = Brush::default();
        b.set_sides(-4);
        assert_eq!(b.sides, MIN_SIDES);
        b.set_sides(10_000);
        assert_eq!(b.sides, MAX_SIDES);
        b.set_sides(9);
        assert_eq!(b.sides, 9);
    }

    #[test]
    fn size_rejects_infinity_and_clamps_range() {
        let mut b = Brush::default();
        assert!(b.set_size(f32::INFINITY).is_err());
        assert_eq!(b.size, DEFAULT_SIZE);
        b.set_size(0.0).unwrap();
        assert_eq!(b.size, MIN_SIZE);
    }

    #[test]
    fn shape_snapshots_brush() {
        let mut b = Brush::default();
        b.kind = ShapeKind::Circle;
        b.color = Color::GREEN;
        b.set_sides(14);
        let shape = b.shape_at(Vec2::new(0.1, 0.1));
        b.color = Color::RED;

        let Shape::Circle(c) = shape else { panic!("expected circle") };
        assert_eq!(c.color, Color::GREEN);
        assert_eq!(c.sides, 14);
        assert_eq!(c.size, DEFAULT_SIZE);
    }

    #[test]
    fn placed_cube_keeps_brush_size() {
        let mut b = Brush::default();
        b.kind = ShapeKind::Cube;
        b.set_size(30.0).unwrap();
        let shape = b.shape_at(Vec2::zero());
        assert_eq!(shape.size(), 30.0);
    }
}
