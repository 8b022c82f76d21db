//! Layered overlay scene.
//!
//! Responsibilities:
//! - retained layer tree per view binding (`layers`)
//! - pure rebuild-vs-recolor planning (`patch`)
//! - structural build and recolor passes (`build`)
//! - the mutable facade external code drives (`SpotScene`)

pub mod build;
mod layers;
mod patch;
mod spot_scene;

pub use layers::{GradientDef, GradientStop, ImageLayer, Label, LabelLayer, LayerTree, SpotShape};
pub use patch::{Patch, SceneStamp, diff};
pub use spot_scene::SpotScene;
