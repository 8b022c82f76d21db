//! Spotglass export crate.
//!
//! Flattens a live scene into raster output: the base image alone
//! ([`export_image`]), or the vector overlay rasterized through an injected
//! decode capability ([`export_spots`]). Decoding is the only suspension
//! point; everything else runs synchronously against a snapshot of the
//! scene, so in-flight exports never race with further mutation.

pub mod bitmap;
pub mod decode;
pub mod error;
pub mod export;
pub mod surface;
pub mod svg;

pub use bitmap::Bitmap;
pub use decode::{Decode, DecodeSource, StdDecoder};
pub use error::{DecodeError, ExportError};
pub use export::{export_image, export_spots};
pub use surface::{DrawSurface, PixmapSurface};
pub use svg::SvgDocument;
