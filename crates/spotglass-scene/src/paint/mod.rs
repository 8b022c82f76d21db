//! Paint model shared between the scene graph and exporters.
//!
//! Scope:
//! - color representation (straight sRGB, CSS-style output)
//! - the color-map contract consumed from the map catalog
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod map;

pub use color::Color;
pub use map::ColorMap;
