//! Spotglass scene crate.
//!
//! This crate owns the overlay data model and the per-view layer trees used
//! by display surfaces and exporters: spots (positioned, radius-sized,
//! named, intensity-valued samples), the base-image reference, display
//! parameters, and the machinery that keeps any number of bound views
//! consistent with one mutable data set.

pub mod coords;
pub mod image;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod spot;
pub mod view;
