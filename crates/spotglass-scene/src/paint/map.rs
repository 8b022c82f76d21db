use super::Color;

/// Contract consumed from the color-map catalog.
///
/// `value` is expected pre-normalized to `[0, 1]` by the caller; range
/// mapping (min/max, log scale) is the catalog's responsibility, not the
/// scene's. Implementations write into `out` rather than allocating, so a
/// recolor pass over thousands of spots reuses one color object.
pub trait ColorMap {
    /// Writes the color for `value` into `out`.
    fn map(&self, out: &mut Color, value: f32);
}
