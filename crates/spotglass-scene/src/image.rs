use std::sync::Arc;

/// Encoded base-image resource (PNG, JPEG, …) plus its pixel dimensions.
///
/// Ownership:
/// - the scene holds at most one resource at a time; adopting a new one
///   drops the previous handle
/// - view layer trees hold cheap clones of the same bytes; the underlying
///   buffer is released exactly once, when the last clone is dropped
#[derive(Debug, Clone)]
pub struct ImageResource {
    bytes: Arc<Vec<u8>>,
    width: u32,
    height: u32,
}

impl ImageResource {
    pub fn new(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self::from_shared(Arc::new(bytes), width, height)
    }

    /// Wraps an already-shared buffer, e.g. bytes also held by a file cache.
    pub fn from_shared(bytes: Arc<Vec<u8>>, width: u32, height: u32) -> Self {
        Self { bytes, width, height }
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}
