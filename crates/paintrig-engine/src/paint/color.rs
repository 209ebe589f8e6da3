use crate::error::{SceneError, finite};

/// Straight-alpha RGBA color, channels in [0, 1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Selects one channel of a [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::rgba(0.0, 1.0, 0.0, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Clamps every channel to [0, 1].
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Clamps every channel to [0, 1], rejecting NaN or infinite channels.
    pub fn validated(self) -> Result<Self, SceneError> {
        finite(self.r, "color channel")?;
        finite(self.g, "color channel")?;
        finite(self.b, "color channel")?;
        finite(self.a, "color channel")?;
        Ok(self.clamped())
    }

    #[inline]
    pub fn channel(self, channel: Channel) -> f32 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Alpha => self.a,
        }
    }

    /// Returns a copy with `channel` replaced by `value` clamped to [0, 1].
    ///
    /// Non-finite values are rejected and leave the color untouched.
    pub fn with_channel(self, channel: Channel, value: f32) -> Result<Self, SceneError> {
        let v = finite(value, "color channel")?.clamp(0.0, 1.0);
        let mut out = self;
        match channel {
            Channel::Red => out.r = v,
            Channel::Green => out.g = v,
            Channel::Blue => out.b = v,
            Channel::Alpha => out.a = v,
        }
        Ok(out)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantizes to `0`–`255` bytes (rounding to nearest).
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = self.clamped();
        let q = |v: f32| (v * 255.0).round() as u8;
        [q(c.r), q(c.g), q(c.b), q(c.a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_channel_clamps_out_of_range() {
        let c = Color::BLACK.with_channel(Channel::Red, 1.7).unwrap();
        assert_eq!(c.r, 1.0);
        let c = c.with_channel(Channel::Green, -0.5).unwrap();
        assert_eq!(c.g, 0.0);
    }

    #[test]
    fn with_channel_rejects_nan() {
        let err = Color::WHITE.with_channel(Channel::Blue, f32::NAN).unwrap_err();
        assert_eq!(err, SceneError::NonFinite { what: "color channel" });
    }

    #[test]
    fn validated_clamps_and_rejects_nan() {
        let c = Color::rgba(1.5, -0.2, 0.5, 1.0).validated().unwrap();
        assert_eq!(c, Color::rgba(1.0, 0.0, 0.5, 1.0));
        let err = Color::rgba(0.0, 0.0, f32::NAN, 1.0).validated().unwrap_err();
        assert_eq!(err, SceneError::NonFinite { what: "color channel" });
        assert!(Color::rgba(f32::INFINITY, 0.0, 0.0, 1.0).validated().is_err());
    }

    #[test]
    fn rgba8_rounds() {
        assert_eq!(Color::rgba(1.0, 0.5, 0.0, 1.0).to_rgba8(), [255, 128, 0, 255]);
    }
}
