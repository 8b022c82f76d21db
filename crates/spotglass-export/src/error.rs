use thiserror::Error;

/// Failure decoding an image resource into pixels.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not a decodable image (or SVG document).
    #[error("malformed image data: {0}")]
    Malformed(String),
    /// The decode target could not be allocated at the requested size.
    #[error("cannot allocate {width}x{height} decode target")]
    BadDimensions { width: u32, height: u32 },
}

/// Failure of one export operation.
///
/// Precondition failures reject before any decode work starts; a failed
/// export never leaves a partial side effect, and prior scene state (spots,
/// image, bound views) is untouched either way.
#[derive(Debug, Error)]
pub enum ExportError {
    /// `export_image` was called on a scene with no image set.
    #[error("no image is set")]
    NoImage,
    /// `export_spots` was called on a scene with zero width or height.
    #[error("scene has no dimensions")]
    NoDimensions,
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
