use super::Vec2;

/// Canvas size in pixels.
///
/// Owns the pixel → NDC mapping used by pointer input.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Converts a pixel position (top-left origin, +Y down) to NDC.
    ///
    /// `x = (px - w/2) / (w/2)`, `y = (h/2 - py) / (h/2)`.
    #[inline]
    pub fn to_ndc(self, px: f32, py: f32) -> Vec2 {
        let half_w = self.width * 0.5;
        let half_h = self.height * 0.5;
        Vec2::new((px - half_w) / half_w, (half_h - py) / half_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        let vp = Viewport::new(400.0, 400.0);
        assert_eq!(vp.to_ndc(200.0, 200.0), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn corners_map_to_unit_square() {
        let vp = Viewport::new(400.0, 200.0);
        assert_eq!(vp.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(400.0, 200.0), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn zero_viewport_is_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}
