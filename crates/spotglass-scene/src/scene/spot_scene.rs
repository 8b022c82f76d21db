use crate::image::ImageResource;
use crate::paint::ColorMap;
use crate::scene::build::{self, BuildParams};
use crate::scene::layers::LayerTree;
use crate::scene::patch::{Patch, SceneStamp, diff};
use crate::spot::Spot;
use crate::view::{ViewBinding, ViewHost};

/// Spot border fraction the scene starts with.
const DEFAULT_SPOT_BORDER: f32 = 0.05;
/// Labels start hidden (font size 0) in black.
const DEFAULT_FONT_SIZE: f32 = 0.0;
const DEFAULT_FONT_COLOR: &str = "#000000";

/// The overlay scene: one spot store (or none), one base image (or none),
/// display parameters, and any number of simultaneously bound views kept in
/// sync with the same data.
///
/// Mutations run synchronously to completion — nothing suspends mid-change,
/// so a `set_spots` immediately followed by `update_intensities` is
/// guaranteed to apply to the just-set spots. Every mutation advances the
/// scene's [`SceneStamp`] and fans the resulting patches out to each
/// binding, which is what separates cheap in-place recolors from full
/// structural rebuilds.
pub struct SpotScene {
    spot_border: f32,
    font_size: f32,
    font_color: String,
    views: Vec<ViewBinding>,
    image: Option<ImageResource>,
    /// `None` = no spots configured; `Some(vec![])` = configured, zero.
    spots: Option<Vec<Spot>>,
    color_map: Option<Box<dyn ColorMap>>,
    stamp: SceneStamp,
}

impl SpotScene {
    pub fn new() -> Self {
        Self {
            spot_border: DEFAULT_SPOT_BORDER,
            font_size: DEFAULT_FONT_SIZE,
            font_color: DEFAULT_FONT_COLOR.to_owned(),
            views: Vec::new(),
            image: None,
            spots: None,
            color_map: None,
            stamp: SceneStamp::new(DEFAULT_SPOT_BORDER, DEFAULT_FONT_SIZE, DEFAULT_FONT_COLOR),
        }
    }

    // ── views ─────────────────────────────────────────────────────────────

    /// Replaces the bound view list with the single given host and performs
    /// a full content build from current state.
    pub fn set_view(&mut self, host: Box<dyn ViewHost>) {
        self.views.clear();
        self.add_view(host);
    }

    /// Binds an additional view; used by side paths that need one more
    /// surface showing the same data.
    pub fn add_view(&mut self, host: Box<dyn ViewHost>) {
        let content = self.snapshot_tree();
        self.views.push(ViewBinding::new(host, content));
    }

    /// Currently bound views, in binding order.
    pub fn views(&self) -> &[ViewBinding] {
        &self.views
    }

    /// Builds a standalone layer tree from current state, independent of
    /// any bound view. Export pipelines snapshot the scene through this.
    pub fn snapshot_tree(&self) -> LayerTree {
        build::build_content(self.image.as_ref(), self.spots.as_deref(), &self.params())
    }

    // ── image ─────────────────────────────────────────────────────────────

    /// Adopts `image` as the scene's base image, dropping any previously
    /// owned resource, re-sources every bound view's image layer and lets
    /// each view re-fit itself. `None` clears the image (width and height
    /// read 0 afterwards). Spots are not rebuilt by this operation.
    pub fn set_image(&mut self, image: Option<ImageResource>) {
        let old = self.stamp.clone();
        self.image = image; // prior handle dropped here
        self.stamp.image_epoch += 1;
        self.sync(&old);
    }

    /// Clears the base image.
    pub fn reset_image(&mut self) {
        self.set_image(None);
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&ImageResource> {
        self.image.as_ref()
    }

    /// Image width in pixels; 0 exactly when no image is set.
    pub fn width(&self) -> u32 {
        self.image.as_ref().map_or(0, ImageResource::width)
    }

    /// Image height in pixels; 0 exactly when no image is set.
    pub fn height(&self) -> u32 {
        self.image.as_ref().map_or(0, ImageResource::height)
    }

    // ── spots ─────────────────────────────────────────────────────────────

    /// Replaces the spot store.
    ///
    /// `Some` copies the sequence field by field — later mutation of the
    /// caller's data never affects the scene — and rebuilds every bound view
    /// from scratch: gradient identifiers are positional, so any structural
    /// change regenerates all definitions to keep indices aligned. `None`
    /// clears the store without touching existing views; future structural
    /// builds render no overlay.
    pub fn set_spots(&mut self, spots: Option<&[Spot]>) {
        let old = self.stamp.clone();
        self.spots = spots.map(<[Spot]>::to_vec);
        self.stamp.spots_epoch += 1;
        if self.spots.is_some() {
            self.sync(&old);
        }
    }

    /// The current spot store; `None` when no spots are configured, which
    /// is distinct from an empty sequence.
    pub fn spots(&self) -> Option<&[Spot]> {
        self.spots.as_deref()
    }

    /// Overwrites stored intensities positionally, then recolors every view.
    ///
    /// `values[i]` replaces the intensity of spot `i`; an absent index means
    /// "no data". Does nothing when no spot store is configured.
    pub fn update_intensities(&mut self, values: &[Option<f32>]) {
        let Some(spots) = self.spots.as_mut() else {
            return;
        };
        for (i, spot) in spots.iter_mut().enumerate() {
            spot.intensity = values.get(i).copied().flatten();
        }
        let old = self.stamp.clone();
        self.stamp.tint_epoch += 1;
        self.sync(&old);
    }

    // ── display parameters ────────────────────────────────────────────────

    pub fn spot_border(&self) -> f32 {
        self.spot_border
    }

    /// Sets the border fraction, silently clamped to `[0, 1]`. A no-op when
    /// the clamped value equals the current one; recolors bound views when
    /// spots exist.
    pub fn set_spot_border(&mut self, value: f32) {
        let value = value.clamp(0.0, 1.0);
        if value == self.spot_border {
            return;
        }
        let old = self.stamp.clone();
        self.spot_border = value;
        self.stamp.spot_border = value;
        if self.spots.is_some() {
            self.sync(&old);
        }
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Sets the label font size; 0 hides the label layer. Restyles labels
    /// in every bound view.
    pub fn set_font_size(&mut self, value: f32) {
        let old = self.stamp.clone();
        self.font_size = value;
        self.stamp.font_size = value;
        self.sync(&old);
    }

    pub fn font_color(&self) -> &str {
        &self.font_color
    }

    /// Sets the label fill color (CSS-style string). Restyles labels in
    /// every bound view.
    pub fn set_font_color(&mut self, value: impl Into<String>) {
        let old = self.stamp.clone();
        self.font_color = value.into();
        self.stamp.font_color = self.font_color.clone();
        self.sync(&old);
    }

    /// Installs the color map used by recolor passes; recolors bound views
    /// when spots exist.
    pub fn set_color_map(&mut self, map: Box<dyn ColorMap>) {
        let old = self.stamp.clone();
        self.color_map = Some(map);
        self.stamp.tint_epoch += 1;
        if self.spots.is_some() {
            self.sync(&old);
        }
    }

    /// Recolors every bound view from current intensities and parameters.
    ///
    /// Mutation operations trigger this internally; it is exposed for
    /// callers whose color map changed state out of band. Idempotent.
    pub fn recolor(&mut self) {
        self.apply(Patch::Recolor);
    }

    // ── patch application ─────────────────────────────────────────────────

    fn params(&self) -> BuildParams<'_> {
        BuildParams {
            spot_border: self.spot_border,
            font_size: self.font_size,
            font_color: &self.font_color,
            color_map: self.color_map.as_deref(),
        }
    }

    fn sync(&mut self, old: &SceneStamp) {
        for patch in diff(old, &self.stamp) {
            self.apply(patch);
        }
    }

    fn apply(&mut self, patch: Patch) {
        let Self { views, spots, image, spot_border, font_size, font_color, color_map, .. } = self;
        let params = BuildParams {
            spot_border: *spot_border,
            font_size: *font_size,
            font_color: font_color.as_str(),
            color_map: color_map.as_deref(),
        };
        let spot_slice = spots.as_deref().unwrap_or_default();

        match patch {
            Patch::UpdateImage => {
                let (width, height) =
                    image.as_ref().map_or((0, 0), |i| (i.width(), i.height()));
                for view in views.iter_mut() {
                    view.content_mut().image.image = image.clone();
                    view.host_mut().adjust_offset(width, height);
                }
            }
            Patch::RebuildSpots => {
                for view in views.iter_mut() {
                    build::build_spots(view.content_mut(), spot_slice, &params);
                }
            }
            Patch::Recolor => {
                for view in views.iter_mut() {
                    build::recolor(view.content_mut(), spot_slice, &params);
                }
            }
            Patch::RestyleLabels => {
                for view in views.iter_mut() {
                    let labels = &mut view.content_mut().labels;
                    labels.font_size = *font_size;
                    labels.font_color.clone_from(font_color);
                    labels.visible = *font_size != 0.0;
                }
            }
        }
    }
}

impl Default for SpotScene {
    fn default() -> Self {
        Self::new()
    }
}
