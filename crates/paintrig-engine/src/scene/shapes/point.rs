use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCall, Primitive, ShapeList};

/// Single point drawn as a square sprite `size` pixels wide.
#[derive(Debug, Clone, PartialEq)]
pub struct PointShape {
    pub position: Vec2,
    pub color: Color,
    pub size: f32,
}

impl PointShape {
    #[inline]
    pub fn new(position: Vec2, color: Color, size: f32) -> Self {
        Self { position, color, size }
    }

    pub(crate) fn draw_call(&self) -> DrawCall {
        DrawCall::new(Primitive::Points, vec![self.position.extend(0.0)], self.color)
            .with_point_size(self.size)
    }
}

impl ShapeList {
    /// Appends a point.
    #[inline]
    pub fn push_point(&mut self, position: Vec2, color: Color, size: f32) {
        self.add(PointShape::new(position, color, size).into());
    }
}
