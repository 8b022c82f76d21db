//! Injected decode capability.
//!
//! Decoding is the only suspension point in the export pipeline. Keeping it
//! behind a trait lets tests drive the pipeline with a synchronous fake and
//! keeps the gating/compositing/cleanup logic independent of any particular
//! codec.

use std::future::Future;

use resvg::{tiny_skia, usvg};

use crate::bitmap::Bitmap;
use crate::error::DecodeError;

/// What to decode and at which target size.
#[derive(Debug, Clone)]
pub enum DecodeSource<'a> {
    /// Encoded raster bytes (PNG, JPEG, …), decoded at native size.
    Raster { bytes: &'a [u8] },
    /// A self-contained SVG document, rasterized at `width` × `height`.
    Vector { svg: &'a str, width: u32, height: u32 },
}

/// Decode capability consumed by the export entry points.
pub trait Decode {
    fn decode(
        &self,
        source: DecodeSource<'_>,
    ) -> impl Future<Output = Result<Bitmap, DecodeError>>;
}

/// Production decoder: `image` for raster bytes, `resvg` for vector
/// documents.
///
/// Both codecs are CPU-bound, so the returned futures are ready as soon as
/// they are polled; they still cross the async seam so callers treat real
/// and substituted decoders uniformly.
#[derive(Debug, Default)]
pub struct StdDecoder;

impl Decode for StdDecoder {
    async fn decode(&self, source: DecodeSource<'_>) -> Result<Bitmap, DecodeError> {
        match source {
            DecodeSource::Raster { bytes } => decode_raster(bytes),
            DecodeSource::Vector { svg, width, height } => decode_vector(svg, width, height),
        }
    }
}

fn decode_raster(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| DecodeError::Malformed(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Bitmap::from_rgba8(width, height, rgba.into_raw())
        .ok_or(DecodeError::BadDimensions { width, height })
}

fn decode_vector(svg: &str, width: u32, height: u32) -> Result<Bitmap, DecodeError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &options)
        .map_err(|e| DecodeError::Malformed(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(DecodeError::BadDimensions { width, height })?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    // Pixmap stores premultiplied RGBA; exports carry straight alpha.
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        pixels.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    Bitmap::from_rgba8(width, height, pixels).ok_or(DecodeError::BadDimensions { width, height })
}
