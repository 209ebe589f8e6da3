use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCall, Primitive, ShapeList};

use super::{DEFAULT_SIDES, MAX_SIDES, MIN_SIDES, size_to_ndc};

/// Regular polygon approximating a circle, drawn as a triangle fan.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub center: Vec2,
    pub color: Color,
    pub size: f32,
    pub sides: u32,
}

impl CircleShape {
    /// `sides` is clamped to `[MIN_SIDES, MAX_SIDES]`.
    pub fn new(center: Vec2, color: Color, size: f32, sides: u32) -> Self {
        let clamped = sides.clamp(MIN_SIDES, MAX_SIDES);
        if clamped != sides {
            log::warn!("circle side count {sides} out of range; clamped to {clamped}");
        }
        Self { center, color, size, sides: clamped }
    }

    #[inline]
    pub fn with_default_sides(center: Vec2, color: Color, size: f32) -> Self {
        Self::new(center, color, size, DEFAULT_SIDES)
    }

    /// Fan vertices: the center, then `sides + 1` rim points so the last
    /// segment closes on the first. `sides` is clamped again here since the
    /// field is public.
    pub fn fan_vertices(&self) -> Vec<[f32; 3]> {
        let radius = size_to_ndc(self.size);
        let sides = self.sides.clamp(MIN_SIDES, MAX_SIDES);
        let step = 360.0 / sides as f32;

        let mut out = Vec::with_capacity(sides as usize + 2);
        out.push(self.center.extend(0.0));
        for k in 0..=sides {
            let rim = self.center + Vec2::from_angle_deg(k as f32 * step) * radius;
            out.push(rim.extend(0.0));
        }
        out
    }

    pub(crate) fn draw_call(&self) -> DrawCall {
        DrawCall::new(Primitive::TriangleFan, self.fan_vertices(), self.color)
    }
}

impl ShapeList {
    /// Appends a circle.
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, color: Color, size: f32, sides: u32) {
        self.add(CircleShape::new(center, color, size, sides).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_has_one_segment_per_side() {
        let c = CircleShape::with_default_sides(Vec2::zero(), Color::WHITE, 10.0);
        let call = c.draw_call();
        assert_eq!(call.vertices.len(), 16);
        assert_eq!(call.primitive_count(), 14);
    }

    #[test]
    fn side_count_is_clamped_at_both_ends() {
        let mut list = ShapeList::new();
        list.push_circle(Vec2::zero(), Color::WHITE, 10.0, 0);
        list.push_circle(Vec2::zero(), Color::WHITE, 10.0, u32::MAX);

        let mut backend = crate::render::RecordingBackend::new();
        assert_eq!(list.render_all(&mut backend), 2);
        assert_eq!(backend.calls()[0].primitive_count(), MIN_SIDES as usize);
        assert_eq!(backend.calls()[1].primitive_count(), MAX_SIDES as usize);

        let mut c = CircleShape::with_default_sides(Vec2::zero(), Color::WHITE, 10.0);
        c.sides = 1;
        assert_eq!(c.draw_call().primitive_count(), MIN_SIDES as usize);
    }

    #[test]
    fn rim_sits_at_size_over_200() {
        let c = CircleShape::new(Vec2::new(0.1, 0.2), Color::WHITE, 40.0, 4);
        let v = c.fan_vertices();
        assert_eq!(v[0], [0.1, 0.2, 0.0]);
        for rim in &v[1..] {
            let dx = rim[0] - 0.1;
            let dy = rim[1] - 0.2;
            assert!(((dx * dx + dy * dy).sqrt() - 0.2).abs() < 1e-5);
        }
        // Closing vertex repeats the first rim vertex.
        assert!((v[1][0] - v[5][0]).abs() < 1e-5);
        assert!((v[1][1] - v[5][1]).abs() < 1e-5);
    }
}
