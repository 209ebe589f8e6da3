use crate::coords::Vec2;
use crate::math::Transform;
use crate::paint::Color;
use crate::scene::{DrawCall, Primitive};

use super::size_to_ndc;

/// Unit cube spanning [0, 1] on every axis, 12 triangles.
#[rustfmt::skip]
pub const UNIT_CUBE: [[f32; 3]; 36] = [
    // front (z = 0)
    [0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0],
    [0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0],
    // back (z = 1)
    [0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0],
    [0.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0],
    // top (y = 1)
    [0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0],
    [0.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0],
    // bottom (y = 0)
    [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0],
    [0.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0],
    // left (x = 0)
    [0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0],
    [0.0, 0.0, 0.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0],
    // right (x = 1)
    [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0],
    [1.0, 0.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0],
];

/// Brush size whose NDC edge is exactly one model unit.
pub const UNIT_CUBE_SIZE: f32 = 200.0;

/// Solid cube under an arbitrary model transform.
///
/// The edge is `size / 200` units in the space `transform` maps from.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeShape {
    pub transform: Transform,
    pub color: Color,
    pub size: f32,
}

impl CubeShape {
    /// Cube whose extent comes from `transform` alone.
    #[inline]
    pub fn new(transform: Transform, color: Color) -> Self {
        Self { transform, color, size: UNIT_CUBE_SIZE }
    }

    /// Cube with its origin corner at `position` and edge `size / 200`.
    pub fn at(position: Vec2, color: Color, size: f32) -> Self {
        let mut transform = Transform::new();
        transform.translate(position.x, position.y, 0.0);
        Self { transform, color, size }
    }

    /// Model matrix including the uniform edge scale.
    pub fn model(&self) -> Transform {
        let mut m = Transform::copy_from(&self.transform);
        if self.size != UNIT_CUBE_SIZE {
            let d = size_to_ndc(self.size);
            m.scale(d, d, d);
        }
        m
    }

    pub(crate) fn draw_call(&self) -> DrawCall {
        DrawCall::new(Primitive::Triangles, UNIT_CUBE.to_vec(), self.color)
            .with_transform(self.model())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_is_twelve_triangles() {
        let call = CubeShape::new(Transform::IDENTITY, Color::WHITE).draw_call();
        assert_eq!(call.primitive, Primitive::Triangles);
        assert_eq!(call.primitive_count(), 12);
    }

    #[test]
    fn new_cube_keeps_transform_extent() {
        let mut t = Transform::new();
        t.translate(1.0, 0.0, 0.0);
        let corner = CubeShape::new(t, Color::WHITE).model().transform_point([1.0, 1.0, 1.0]);
        assert_eq!(corner, [2.0, 1.0, 1.0]);
    }

    #[test]
    fn placed_cube_edge_is_size_over_200() {
        let cube = CubeShape::at(Vec2::new(0.5, -0.5), Color::WHITE, 40.0);
        assert_eq!(cube.size, 40.0);
        let corner = cube.model().transform_point([1.0, 1.0, 1.0]);
        assert!((corner[0] - 0.7).abs() < 1e-6);
        assert!((corner[1] + 0.3).abs() < 1e-6);
        assert!((corner[2] - 0.2).abs() < 1e-6);
    }
}
