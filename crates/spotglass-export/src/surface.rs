use crate::bitmap::Bitmap;

/// Caller-provided drawing target for flattened exports.
pub trait DrawSurface {
    /// Draws `bitmap` with its top-left corner at `(x, y)`, clipped to the
    /// surface bounds. A later draw overwrites earlier pixels, which is what
    /// gives concurrent exports their last-completion-wins behavior.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, x: u32, y: u32);
}

/// In-memory RGBA8 surface.
#[derive(Debug, Clone)]
pub struct PixmapSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixmapSurface {
    /// A fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
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

impl DrawSurface for PixmapSurface {
    fn draw_bitmap(&mut self, bitmap: &Bitmap, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let cols = bitmap.width().min(self.width - x) as usize;
        let rows = bitmap.height().min(self.height - y) as usize;
        let src_stride = bitmap.width() as usize * 4;
        let dst_stride = self.width as usize * 4;

        for row in 0..rows {
            let src = row * src_stride;
            let dst = (y as usize + row) * dst_stride + x as usize * 4;
            self.pixels[dst..dst + cols * 4]
                .copy_from_slice(&bitmap.pixels()[src..src + cols * 4]);
        }
    }
}
