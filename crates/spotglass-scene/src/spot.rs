use crate::coords::Vec2;

/// One annotated sample: a positioned, radius-sized, named, intensity-valued
/// overlay annotation.
///
/// `intensity` is a pre-normalized scalar. `None` — and `Some(NaN)` — mean
/// "no data"; such spots render fully transparent rather than in a default
/// color.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    /// Center in image pixel space.
    pub pos: Vec2,
    /// Display radius in image pixel space.
    pub r: f32,
    /// Label text, rendered just right of the spot.
    pub name: String,
    pub intensity: Option<f32>,
}

impl Spot {
    pub fn new(pos: Vec2, r: f32, name: impl Into<String>) -> Self {
        Self { pos, r, name: name.into(), intensity: None }
    }

    pub fn with_intensity(mut self, value: f32) -> Self {
        self.intensity = Some(value);
        self
    }

    /// Returns the intensity only when it is present and an actual number.
    #[inline]
    pub fn valid_intensity(&self) -> Option<f32> {
        self.intensity.filter(|v| !v.is_nan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_intensity_filters_nan() {
        let spot = Spot::new(Vec2::zero(), 1.0, "a").with_intensity(f32::NAN);
        assert_eq!(spot.valid_intensity(), None);
    }

    #[test]
    fn valid_intensity_passes_numbers() {
        let spot = Spot::new(Vec2::zero(), 1.0, "a").with_intensity(0.25);
        assert_eq!(spot.valid_intensity(), Some(0.25));
    }

    #[test]
    fn missing_intensity_is_no_data() {
        assert_eq!(Spot::new(Vec2::zero(), 1.0, "a").valid_intensity(), None);
    }
}
