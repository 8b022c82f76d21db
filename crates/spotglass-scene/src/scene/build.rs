//! Structural build and recolor passes.
//!
//! The structural pass creates layer nodes from scratch; the recolor pass
//! only touches stop attributes of definitions that already exist. Keeping
//! the two separate is what makes intensity updates cheap: recoloring is
//! linear in spot count and allocates no display nodes.

use std::time::Instant;

use crate::coords::Vec2;
use crate::image::ImageResource;
use crate::paint::{Color, ColorMap};
use crate::scene::layers::{GradientDef, ImageLayer, Label, LabelLayer, LayerTree, SpotShape};
use crate::spot::Spot;

/// Horizontal offset of a label from its spot center, in image pixels.
const LABEL_OFFSET_X: f32 = 5.0;

/// Display parameters the build and recolor passes read.
#[derive(Clone, Copy)]
pub struct BuildParams<'a> {
    /// Fraction of the gradient radius kept at full opacity; stop 1's
    /// opacity.
    pub spot_border: f32,
    pub font_size: f32,
    pub font_color: &'a str,
    /// `None` renders every spot as no-data (transparent).
    pub color_map: Option<&'a dyn ColorMap>,
}

/// Builds a complete layer tree from scratch: image layer, empty
/// definitions, spots and labels layers in fixed order, then — when a spot
/// sequence is configured — the full spot build.
pub fn build_content(
    image: Option<&ImageResource>,
    spots: Option<&[Spot]>,
    params: &BuildParams<'_>,
) -> LayerTree {
    let mut tree = LayerTree {
        image: ImageLayer { image: image.cloned() },
        defs: Vec::new(),
        spots: Vec::new(),
        labels: LabelLayer {
            font_size: params.font_size,
            font_color: params.font_color.to_owned(),
            visible: params.font_size != 0.0,
            labels: Vec::new(),
        },
    };

    if let Some(spots) = spots {
        build_spots(&mut tree, spots, params);
    }

    tree
}

/// Regenerates definitions, spots and labels in positional order, then
/// recolors so the new definitions immediately reflect current intensities.
pub fn build_spots(tree: &mut LayerTree, spots: &[Spot], params: &BuildParams<'_>) {
    tree.defs.clear();
    tree.spots.clear();
    tree.labels.labels.clear();

    for (i, spot) in spots.iter().enumerate() {
        tree.defs.push(GradientDef::unlit());
        tree.spots.push(SpotShape { center: spot.pos, radius: spot.r, fill: i });
        tree.labels.labels.push(Label {
            pos: Vec2::new(spot.pos.x + LABEL_OFFSET_X, spot.pos.y),
            text: spot.name.clone(),
        });
    }

    recolor(tree, spots, params);
}

/// Restyles the gradient stops of every definition already in the tree.
///
/// A spot with a valid intensity gets both stops set to the mapped color,
/// stop 0 at opacity 1.0 and stop 1 at the border fraction; a missing spot,
/// a no-data intensity, or an absent color map clears both stops to fully
/// transparent. Iteration is bounded by the definitions actually present, so
/// a tree that temporarily disagrees with the store in length never panics —
/// the surplus definitions simply go transparent.
pub fn recolor(tree: &mut LayerTree, spots: &[Spot], params: &BuildParams<'_>) {
    let start = Instant::now();

    let mut mapped = Color::black();
    for (i, def) in tree.defs.iter_mut().enumerate() {
        let lit = spots
            .get(i)
            .and_then(Spot::valid_intensity)
            .and_then(|value| {
                params.color_map.map(|map| {
                    map.map(&mut mapped, value);
                    mapped
                })
            });

        match lit {
            Some(color) => {
                def.stops[0].color = Some(color);
                def.stops[1].color = Some(color);
                def.stops[0].opacity = 1.0;
                def.stops[1].opacity = params.spot_border;
            }
            None => {
                def.stops[0].color = None;
                def.stops[1].color = None;
                def.stops[0].opacity = 0.0;
                def.stops[1].opacity = 0.0;
            }
        }
    }

    log::debug!(
        "recolored {} spot gradients in {:?}",
        tree.defs.len(),
        start.elapsed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RedRamp;

    impl ColorMap for RedRamp {
        fn map(&self, out: &mut Color, value: f32) {
            *out = Color::new(value, 0.0, 0.0);
        }
    }

    fn spot(x: f32, y: f32, name: &str, intensity: Option<f32>) -> Spot {
        Spot { pos: Vec2::new(x, y), r: 4.0, name: name.into(), intensity }
    }

    fn params(map: &dyn ColorMap) -> BuildParams<'_> {
        BuildParams { spot_border: 0.25, font_size: 10.0, font_color: "#000000", color_map: Some(map) }
    }

    #[test]
    fn build_places_labels_right_of_spots() {
        let map = RedRamp;
        let spots = [spot(10.0, 20.0, "A", Some(0.5))];
        let tree = build_content(None, Some(&spots), &params(&map));

        assert_eq!(tree.spots.len(), 1);
        assert_eq!(tree.spots[0].fill, 0);
        assert_eq!(tree.labels.labels[0].pos, Vec2::new(15.0, 20.0));
        assert_eq!(tree.labels.labels[0].text, "A");
    }

    #[test]
    fn build_recolors_new_definitions_immediately() {
        let map = RedRamp;
        let spots = [spot(0.0, 0.0, "A", Some(1.0))];
        let tree = build_content(None, Some(&spots), &params(&map));

        assert_eq!(tree.defs[0].stops[0].color, Some(Color::new(1.0, 0.0, 0.0)));
        assert_eq!(tree.defs[0].stops[0].opacity, 1.0);
        assert_eq!(tree.defs[0].stops[1].opacity, 0.25);
    }

    #[test]
    fn unset_spots_build_no_overlay() {
        let map = RedRamp;
        let tree = build_content(None, None, &params(&map));
        assert!(tree.defs.is_empty());
        assert!(tree.spots.is_empty());
        assert!(tree.labels.labels.is_empty());
    }

    #[test]
    fn recolor_survives_length_mismatch() {
        let map = RedRamp;
        let spots = [spot(0.0, 0.0, "A", Some(0.5))];
        let mut tree = build_content(None, Some(&spots), &params(&map));

        // Simulate a stale tree with more definitions than the store.
        tree.defs.push(GradientDef::unlit());
        tree.defs.push(GradientDef::unlit());
        recolor(&mut tree, &spots, &params(&map));

        assert!(tree.defs[0].stops[0].color.is_some());
        for def in &tree.defs[1..] {
            assert_eq!(def.stops[0].opacity, 0.0);
            assert_eq!(def.stops[1].opacity, 0.0);
            assert_eq!(def.stops[0].color, None);
        }
    }

    #[test]
    fn missing_color_map_renders_transparent() {
        let spots = [spot(0.0, 0.0, "A", Some(0.5))];
        let no_map = BuildParams { spot_border: 0.5, font_size: 0.0, font_color: "#000000", color_map: None };
        let tree = build_content(None, Some(&spots), &no_map);

        assert_eq!(tree.defs[0].stops[0].opacity, 0.0);
        assert_eq!(tree.defs[0].stops[1].opacity, 0.0);
    }

    #[test]
    fn zero_font_size_hides_the_label_layer() {
        let map = RedRamp;
        let hidden = BuildParams { font_size: 0.0, ..params(&map) };
        let tree = build_content(None, None, &hidden);
        assert!(!tree.labels.visible);
    }
}
