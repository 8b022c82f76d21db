/// Decoded pixels: straight-alpha RGBA8, row-major, no padding.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Wraps raw RGBA8 bytes.
    ///
    /// Returns `None` when `pixels` is not exactly `width * height * 4`
    /// bytes long.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self { width, height, pixels })
    }

    /// A fully transparent bitmap.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA of the pixel at `(x, y)`. Panics out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba8_rejects_wrong_length() {
        assert!(Bitmap::from_rgba8(2, 2, vec![0; 15]).is_none());
        assert!(Bitmap::from_rgba8(2, 2, vec![0; 16]).is_some());
    }

    #[test]
    fn pixel_indexing_is_row_major() {
        let mut pixels = vec![0; 2 * 2 * 4];
        pixels[4..8].copy_from_slice(&[1, 2, 3, 4]); // (1, 0)
        let bitmap = Bitmap::from_rgba8(2, 2, pixels).unwrap();
        assert_eq!(bitmap.pixel(1, 0), [1, 2, 3, 4]);
        assert_eq!(bitmap.pixel(0, 1), [0, 0, 0, 0]);
    }
}
