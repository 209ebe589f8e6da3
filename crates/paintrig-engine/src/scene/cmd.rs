use crate::math::Transform;
use crate::paint::Color;

/// Primitive topology of a draw submission.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Primitive {
    /// One square sprite per vertex, `point_size` pixels wide.
    Points,
    /// Independent triangles, three vertices each.
    Triangles,
    /// First vertex is shared by every triangle; `n` vertices make `n - 2` triangles.
    TriangleFan,
}

impl Primitive {
    /// Number of primitives `vertex_count` vertices produce.
    #[inline]
    pub fn primitive_count(self, vertex_count: usize) -> usize {
        match self {
            Primitive::Points => vertex_count,
            Primitive::Triangles => vertex_count / 3,
            Primitive::TriangleFan => vertex_count.saturating_sub(2),
        }
    }
}

/// One backend submission: geometry plus the two per-draw uniforms.
///
/// Vertex positions are in model space; backends map them through
/// `transform` to normalized device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub primitive: Primitive,
    pub vertices: Vec<[f32; 3]>,
    pub color: Color,
    pub transform: Transform,
    /// Sprite edge length in pixels. Only read for `Primitive::Points`.
    pub point_size: f32,
}

impl DrawCall {
    #[inline]
    pub fn new(primitive: Primitive, vertices: Vec<[f32; 3]>, color: Color) -> Self {
        Self {
            primitive,
            vertices,
            color,
            transform: Transform::IDENTITY,
            point_size: 1.0,
        }
    }

    #[inline]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    #[inline]
    pub fn with_point_size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }

    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.primitive.primitive_count(self.vertices.len())
    }
}
