use crate::coords::Viewport;
use crate::paint::Color;
use crate::scene::{DrawCall, Primitive};

use super::Backend;

/// Software backend rendering into an RGBA float buffer.
///
/// Matches the GPU pipeline closely enough for snapshots and tests:
/// - depth test `LessEqual` against a buffer cleared to 1.0
/// - straight-alpha source-over blending
/// - points drawn as axis-aligned squares `point_size` pixels wide
/// - either triangle winding is filled (no culling)
#[derive(Debug, Clone)]
pub struct Rasterizer {
    width: usize,
    height: usize,
    color: Vec<[f32; 4]>,
    depth: Vec<f32>,
    draws: usize,
}

/// Vertex after transform: pixel position and window depth.
#[derive(Debug, Copy, Clone)]
struct ScreenVertex {
    x: f32,
    y: f32,
    z: f32,
}

impl Rasterizer {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1) as usize;
        let height = height.max(1) as usize;
        Self {
            width,
            height,
            color: vec![Color::BLACK.to_array(); width * height],
            depth: vec![1.0; width * height],
            draws: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height as u32
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    /// Draw calls accepted since the last `begin_frame`.
    #[inline]
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Pixel at `(x, y)`, top-left origin.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b, a] = self.color[y * self.width + x];
        Some(Color::rgba(r, g, b, a))
    }

    /// Row-major RGBA8 copy of the color buffer.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.color.len() * 4);
        for &[r, g, b, a] in &self.color {
            out.extend_from_slice(&Color::rgba(r, g, b, a).to_rgba8());
        }
        out
    }

    fn project(&self, call: &DrawCall, p: [f32; 3]) -> ScreenVertex {
        let [x, y, z] = call.transform.transform_point(p);
        ScreenVertex {
            x: (x + 1.0) * 0.5 * self.width as f32,
            y: (1.0 - y) * 0.5 * self.height as f32,
            z: z * 0.5 + 0.5,
        }
    }

    fn plot(&mut self, x: usize, y: usize, z: f32, src: [f32; 4]) {
        if !(0.0..=1.0).contains(&z) {
            return;
        }
        let offset = y * self.width + x;
        if z > self.depth[offset] {
            return;
        }
        self.depth[offset] = z;

        let a = src[3];
        let dst = self.color[offset];
        self.color[offset] = [
            src[0] * a + dst[0] * (1.0 - a),
            src[1] * a + dst[1] * (1.0 - a),
            src[2] * a + dst[2] * (1.0 - a),
            a + dst[3] * (1.0 - a),
        ];
    }

    fn fill_triangle(&mut self, v0: ScreenVertex, v1: ScreenVertex, v2: ScreenVertex, src: [f32; 4]) {
        let area = edge_function(v0, v1, v2.x, v2.y);
        if area == 0.0 || !area.is_finite() {
            return;
        }

        let min_x = v0.x.min(v1.x).min(v2.x).floor().max(0.0) as usize;
        let max_x = v0.x.max(v1.x).max(v2.x).ceil().min(self.width as f32 - 1.0);
        let min_y = v0.y.min(v1.y).min(v2.y).floor().max(0.0) as usize;
        let max_y = v0.y.max(v1.y).max(v2.y).ceil().min(self.height as f32 - 1.0);
        if max_x < 0.0 || max_y < 0.0 {
            return;
        }
        let (max_x, max_y) = (max_x as usize, max_y as usize);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                // Normalizing by the signed area makes both windings positive inside.
                let w0 = edge_function(v1, v2, px, py) / area;
                let w1 = edge_function(v2, v0, px, py) / area;
                let w2 = edge_function(v0, v1, px, py) / area;

                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    let z = v0.z * w0 + v1.z * w1 + v2.z * w2;
                    self.plot(x, y, z, src);
                }
            }
        }
    }

    fn fill_square(&mut self, c: ScreenVertex, size: f32, src: [f32; 4]) {
        let half = size.max(1.0) * 0.5;
        let min_x = (c.x - half).round().max(0.0) as usize;
        let min_y = (c.y - half).round().max(0.0) as usize;
        let max_x = (c.x + half).round().min(self.width as f32);
        let max_y = (c.y + half).round().min(self.height as f32);
        if max_x <= 0.0 || max_y <= 0.0 {
            return;
        }

        for y in min_y..max_y as usize {
            for x in min_x..max_x as usize {
                self.plot(x, y, c.z, src);
            }
        }
    }
}

impl Backend for Rasterizer {
    fn begin_frame(&mut self, clear: Color) {
        self.color.fill(clear.clamped().to_array());
        self.depth.fill(1.0);
        self.draws = 0;
    }

    fn draw(&mut self, call: DrawCall) {
        let src = call.color.clamped().to_array();
        let verts: Vec<ScreenVertex> = call.vertices.iter().map(|&p| self.project(&call, p)).collect();

        match call.primitive {
            Primitive::Points => {
                for &v in &verts {
                    self.fill_square(v, call.point_size, src);
                }
            }
            Primitive::Triangles => {
                for tri in verts.chunks_exact(3) {
                    self.fill_triangle(tri[0], tri[1], tri[2], src);
                }
            }
            Primitive::TriangleFan => {
                if let Some((&hub, rim)) = verts.split_first() {
                    for pair in rim.windows(2) {
                        self.fill_triangle(hub, pair[0], pair[1], src);
                    }
                }
            }
        }

        self.draws += 1;
    }
}

/// Twice the signed area of `(a, b, p)`.
#[inline]
fn edge_function(a: ScreenVertex, b: ScreenVertex, px: f32, py: f32) -> f32 {
    (px - a.x) * (b.y - a.y) - (py - a.y) * (b.x - a.x)
}
