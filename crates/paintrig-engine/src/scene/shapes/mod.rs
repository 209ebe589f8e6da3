//! Shape variants and their geometry.
//!
//! Every variant turns itself into exactly one [`DrawCall`]; the registry
//! relies on that to keep draw order equal to insertion order.

pub(crate) mod circle;
pub(crate) mod cube;
pub(crate) mod point;
pub(crate) mod triangle;

use crate::paint::Color;
use crate::render::Backend;

use super::DrawCall;

pub use circle::CircleShape;
pub use cube::CubeShape;
pub use point::PointShape;
pub use triangle::TriangleShape;

/// Default side count for newly placed circles.
pub const DEFAULT_SIDES: u32 = 14;

/// Smallest and largest accepted circle side counts.
pub const MIN_SIDES: u32 = 3;
pub const MAX_SIDES: u32 = 360;

/// Converts a brush size to an NDC extent.
#[inline]
pub(crate) fn size_to_ndc(size: f32) -> f32 {
    size / 200.0
}

/// Shape selector used by the brush.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    #[default]
    Point,
    Triangle,
    Circle,
    Cube,
}

/// Closed set of drawable shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(PointShape),
    Triangle(TriangleShape),
    Circle(CircleShape),
    Cube(CubeShape),
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Cube(_) => ShapeKind::Cube,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        match self {
            Shape::Point(s) => s.color,
            Shape::Triangle(s) => s.color,
            Shape::Circle(s) => s.color,
            Shape::Cube(s) => s.color,
        }
    }

    #[inline]
    pub fn size(&self) -> f32 {
        match self {
            Shape::Point(s) => s.size,
            Shape::Triangle(s) => s.size,
            Shape::Circle(s) => s.size,
            Shape::Cube(s) => s.size,
        }
    }

    /// Builds the single submission for this shape.
    pub fn draw_call(&self) -> DrawCall {
        match self {
            Shape::Point(s) => s.draw_call(),
            Shape::Triangle(s) => s.draw_call(),
            Shape::Circle(s) => s.draw_call(),
            Shape::Cube(s) => s.draw_call(),
        }
    }

    /// Submits this shape to `backend`.
    #[inline]
    pub fn render(&self, backend: &mut dyn Backend) {
        backend.draw(self.draw_call());
    }
}

impl From<PointShape> for Shape {
    fn from(s: PointShape) -> Self {
        Shape::Point(s)
    }
}

impl From<TriangleShape> for Shape {
    fn from(s: TriangleShape) -> Self {
        Shape::Triangle(s)
    }
}

impl From<CircleShape> for Shape {
    fn from(s: CircleShape) -> Self {
        Shape::Circle(s)
    }
}

impl From<CubeShape> for Shape {
    fn from(s: CubeShape) -> Self {
        Shape::Cube(s)
    }
}
