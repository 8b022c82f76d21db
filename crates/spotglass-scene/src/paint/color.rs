/// Straight (non-premultiplied) sRGB color.
///
/// Invariant:
/// - channels are expected in `[0, 1]`; [`clamped`](Self::clamped) enforces
///   it for user-provided inputs.
///
/// Opacity is deliberately absent: gradient stops carry opacity as a
/// separate attribute, matching the SVG stop model this color feeds into.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0 }
    }

    /// Creates a color from sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Clamps all channels to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// CSS-style `rgb(r, g, b)` string with byte-rounded channels, as
    /// expected by SVG `stop-color` and `fill` attributes.
    pub fn to_css(self) -> String {
        let c = self.clamped();
        format!(
            "rgb({}, {}, {})",
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_css_rounds_to_bytes() {
        assert_eq!(Color::new(1.0, 0.0, 0.5).to_css(), "rgb(255, 0, 128)");
    }

    #[test]
    fn to_css_clamps_out_of_range() {
        assert_eq!(Color::new(2.0, -1.0, 0.0).to_css(), "rgb(255, 0, 0)");
    }

    #[test]
    fn from_srgb_u8_round_trips_endpoints() {
        assert_eq!(Color::from_srgb_u8(255, 0, 255).to_css(), "rgb(255, 0, 255)");
    }
}
