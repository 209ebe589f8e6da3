use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCall, Primitive};

use super::size_to_ndc;

/// Triangle with explicit vertices in NDC.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleShape {
    pub vertices: [Vec2; 3],
    pub color: Color,
    pub size: f32,
}

impl TriangleShape {
    #[inline]
    pub fn new(vertices: [Vec2; 3], color: Color) -> Self {
        Self { vertices, color, size: 0.0 }
    }

    /// Right triangle anchored at `position` with legs of `size / 200` along
    /// +X and +Y.
    pub fn at(position: Vec2, color: Color, size: f32) -> Self {
        let d = size_to_ndc(size);
        Self {
            vertices: [
                position,
                Vec2::new(position.x + d, position.y),
                Vec2::new(position.x, position.y + d),
            ],
            color,
            size,
        }
    }

    pub(crate) fn draw_call(&self) -> DrawCall {
        let vertices = self.vertices.iter().map(|v| v.extend(0.0)).collect();
        DrawCall::new(Primitive::Triangles, vertices, self.color)
    }
}
