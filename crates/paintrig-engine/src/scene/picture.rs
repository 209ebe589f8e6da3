use std::f32::consts::PI;

use crate::coords::Vec2;
use crate::paint::Color;

use super::{Shape, TriangleShape};

const STAR_POINTS: usize = 20;
const STAR_RADIUS: f32 = 0.5;
const STAR_INNER: f32 = 0.25;

const SUN_SEGMENTS: usize = 8;
const SUN_CENTER: Vec2 = Vec2::new(0.0, 0.6);
const SUN_RADIUS: f32 = 0.1;

const MOUNTAIN_GRAYS: [Color; 2] = [Color::rgb(0.5, 0.5, 0.5), Color::rgb(0.6, 0.6, 0.6)];
const SUN_COLOR: Color = Color::rgb(1.0, 0.9, 0.0);
const WATER_COLOR: Color = Color::rgb(0.0, 0.2, 0.8);

/// Fixed procedural pictures made only of triangles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Picture {
    /// Twenty red spikes around the origin.
    Star,
    /// Mountains, a sun and water.
    Landscape,
}

impl Picture {
    /// Generates the picture's triangles in draw order.
    pub fn shapes(self) -> Vec<Shape> {
        match self {
            Picture::Star => star(),
            Picture::Landscape => landscape(),
        }
    }
}

fn tri(a: Vec2, b: Vec2, c: Vec2, color: Color) -> Shape {
    TriangleShape::new([a, b, c], color).into()
}

/// Angles are measured clockwise from +Y, so `(sin, cos)` gives the offset.
fn polar(radius: f32, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(radius * s, radius * c)
}

fn star() -> Vec<Shape> {
    let n = STAR_POINTS as f32;
    (0..STAR_POINTS)
        .map(|i| {
            let angle = 2.0 * PI * i as f32 / n;
            let next = 2.0 * PI * (i + 1) as f32 / n;
            tri(
                polar(STAR_RADIUS, angle),
                polar(STAR_RADIUS, next),
                polar(STAR_INNER, angle + PI / n),
                Color::RED,
            )
        })
        .collect()
}

fn landscape() -> Vec<Shape> {
    let mut out = Vec::with_capacity(21);

    for i in -2i32..=2 {
        let base = i as f32 * 0.2;
        let peak = 0.1 + i.abs() as f32 * 0.1;
        let first = MOUNTAIN_GRAYS[i.rem_euclid(2) as usize];
        let second = MOUNTAIN_GRAYS[(i + 1).rem_euclid(2) as usize];
        out.push(tri(
            Vec2::new(base, -0.3),
            Vec2::new(base + 0.1, peak),
            Vec2::new(base + 0.2, -0.3),
            first,
        ));
        out.push(tri(
            Vec2::new(base + 0.1, -0.3),
            Vec2::new(base + 0.2, peak),
            Vec2::new(base + 0.3, -0.3),
            second,
        ));
    }

    let step = PI / 4.0;
    for i in 0..SUN_SEGMENTS {
        let a = step * i as f32;
        let b = step * (i + 1) as f32;
        out.push(tri(
            SUN_CENTER,
            SUN_CENTER + Vec2::new(a.cos(), a.sin()) * SUN_RADIUS,
            SUN_CENTER + Vec2::new(b.cos(), b.sin()) * SUN_RADIUS,
            SUN_COLOR,
        ));
    }

    for i in -1i32..=1 {
        let base = i as f32 * 0.3;
        out.push(tri(
            Vec2::new(base, -0.8),
            Vec2::new(base + 0.3, -0.5),
            Vec2::new(base + 0.6, -0.8),
            WATER_COLOR,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_has_twenty_red_triangles() {
        let shapes = Picture::Star.shapes();
        assert_eq!(shapes.len(), 20);
        assert!(shapes.iter().all(|s| s.color() == Color::RED));
    }

    #[test]
    fn star_tips_reach_outer_radius() {
        let Shape::Triangle(t) = &Picture::Star.shapes()[0] else { panic!("not a triangle") };
        assert!((t.vertices[0].y - STAR_RADIUS).abs() < 1e-6);
        let inner = t.vertices[2];
        assert!(((inner.x * inner.x + inner.y * inner.y).sqrt() - STAR_INNER).abs() < 1e-6);
    }

    #[test]
    fn landscape_counts() {
        let shapes = Picture::Landscape.shapes();
        assert_eq!(shapes.len(), 21);
        let suns = shapes.iter().filter(|s| s.color() == SUN_COLOR).count();
        let water = shapes.iter().filter(|s| s.color() == WATER_COLOR).count();
        assert_eq!(suns, 8);
        assert_eq!(water, 3);
    }

    #[test]
    fn mountains_alternate_grays() {
        let shapes = Picture::Landscape.shapes();
        for pair in shapes[..10].chunks(2) {
            assert_ne!(pair[0].color(), pair[1].color());
        }
    }
}
