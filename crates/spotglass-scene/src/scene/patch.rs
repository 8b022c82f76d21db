/// Cheap fingerprint of everything a view's layer tree is derived from.
///
/// Epoch counters stand in for the owned data: the scene bumps an epoch
/// whenever the corresponding data is replaced (image resource, spot
/// sequence, anything that only affects stop styling), so two stamps compare
/// equal exactly when the derived trees would be identical.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStamp {
    /// Advances when the base image is replaced or cleared.
    pub image_epoch: u64,
    /// Advances when the spot sequence is replaced.
    pub spots_epoch: u64,
    /// Advances when stop styling inputs change without the spot set
    /// changing: intensity updates and color-map replacement.
    pub tint_epoch: u64,
    pub spot_border: f32,
    pub font_size: f32,
    pub font_color: String,
}

impl SceneStamp {
    pub fn new(spot_border: f32, font_size: f32, font_color: impl Into<String>) -> Self {
        Self {
            image_epoch: 0,
            spots_epoch: 0,
            tint_epoch: 0,
            spot_border,
            font_size,
            font_color: font_color.into(),
        }
    }
}

/// What must be applied to a view's layer tree to catch up to a newer stamp.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Patch {
    /// Re-source the image layer and let the view re-fit itself.
    UpdateImage,
    /// Clear and regenerate definitions, spots and labels. Ends with a
    /// recolor, so it subsumes [`Patch::Recolor`].
    RebuildSpots,
    /// Restyle existing gradient stops in place; no node is created,
    /// removed or reordered.
    Recolor,
    /// Re-apply group-level label styling (font size, color, visibility).
    RestyleLabels,
}

/// Plans the update from `old` to `new`.
///
/// Keeping the plan separate from its application makes the
/// rebuild-vs-recolor decision a pure function: a spot-set replacement
/// always costs a full rebuild (gradient identifiers are positional, so a
/// partial patch could leave stale references behind), while border or tint
/// changes only restyle stops that already exist.
pub fn diff(old: &SceneStamp, new: &SceneStamp) -> Vec<Patch> {
    let mut patches = Vec::new();

    if new.image_epoch != old.image_epoch {
        patches.push(Patch::UpdateImage);
    }

    if new.spots_epoch != old.spots_epoch {
        patches.push(Patch::RebuildSpots);
    } else if new.tint_epoch != old.tint_epoch || new.spot_border != old.spot_border {
        patches.push(Patch::Recolor);
    }

    if new.font_size != old.font_size || new.font_color != old.font_color {
        patches.push(Patch::RestyleLabels);
    }

    patches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp() -> SceneStamp {
        SceneStamp::new(0.05, 0.0, "#000000")
    }

    #[test]
    fn identical_stamps_need_nothing() {
        assert!(diff(&stamp(), &stamp()).is_empty());
    }

    #[test]
    fn spot_replacement_costs_a_rebuild_not_a_recolor() {
        let old = stamp();
        let mut new = stamp();
        new.spots_epoch += 1;
        new.tint_epoch += 1;
        assert_eq!(diff(&old, &new), vec![Patch::RebuildSpots]);
    }

    #[test]
    fn border_change_alone_is_a_recolor() {
        let old = stamp();
        let mut new = stamp();
        new.spot_border = 0.5;
        assert_eq!(diff(&old, &new), vec![Patch::Recolor]);
    }

    #[test]
    fn tint_change_alone_is_a_recolor() {
        let old = stamp();
        let mut new = stamp();
        new.tint_epoch += 1;
        assert_eq!(diff(&old, &new), vec![Patch::Recolor]);
    }

    #[test]
    fn font_change_restyles_labels() {
        let old = stamp();
        let mut new = stamp();
        new.font_size = 12.0;
        assert_eq!(diff(&old, &new), vec![Patch::RestyleLabels]);
    }

    #[test]
    fn image_and_spots_combine_in_order() {
        let old = stamp();
        let mut new = stamp();
        new.image_epoch += 1;
        new.spots_epoch += 1;
        assert_eq!(diff(&old, &new), vec![Patch::UpdateImage, Patch::RebuildSpots]);
    }
}
