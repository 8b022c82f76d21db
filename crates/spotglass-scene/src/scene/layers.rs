use crate::coords::Vec2;
use crate::image::ImageResource;
use crate::paint::Color;

/// Base-image layer, the bottom-most layer of every view's tree.
#[derive(Debug, Clone, Default)]
pub struct ImageLayer {
    /// `None` renders no image; the layer node itself always exists.
    pub image: Option<ImageResource>,
}

impl ImageLayer {
    /// Pixel width of the sourced image, 0 when no image is set.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.as_ref().map_or(0, ImageResource::width)
    }

    /// Pixel height of the sourced image, 0 when no image is set.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.as_ref().map_or(0, ImageResource::height)
    }
}

/// One stop of a spot's radial gradient.
///
/// `color == None` together with `opacity == 0.0` is the "no data"
/// rendering: the spot stays in the tree but draws nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Offset along the gradient radius: 0.0 = center, 1.0 = edge.
    pub offset: f32,
    pub color: Option<Color>,
    pub opacity: f32,
}

impl GradientStop {
    #[inline]
    pub const fn transparent(offset: f32) -> Self {
        Self { offset, color: None, opacity: 0.0 }
    }
}

/// Radial gradient definition for one spot.
///
/// Definitions are positionally indexed: the definition at index `i` is
/// referenced as `spot<i>` by the shape built from the spot at index `i`.
/// Geometry is fixed — centered (cx = cy = fx = fy = 50%) and sized to the
/// shape (r = 50%) — so only the two stops ever change after a structural
/// build.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDef {
    pub stops: [GradientStop; 2],
}

impl GradientDef {
    /// Fresh definition with both stops transparent; the recolor pass that
    /// follows every structural build fills them in.
    pub const fn unlit() -> Self {
        Self {
            stops: [GradientStop::transparent(0.0), GradientStop::transparent(1.0)],
        }
    }

    /// Identifier the shape at `index` fills itself by (`url(#spot<index>)`).
    pub fn reference(index: usize) -> String {
        format!("spot{index}")
    }
}

/// Filled ellipse displaying one spot.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotShape {
    pub center: Vec2,
    pub radius: f32,
    /// Index of the gradient definition this shape is filled by.
    pub fill: usize,
}

/// One text label.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub pos: Vec2,
    pub text: String,
}

/// Label layer: group-level text styling plus the labels themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayer {
    pub font_size: f32,
    /// CSS-style fill color applied to the whole group.
    pub font_color: String,
    /// Labels collapse as a group when the font size is zero.
    pub visible: bool,
    pub labels: Vec<Label>,
}

/// Retained scene graph for one view binding.
///
/// Layer order is fixed — image, definitions, spots, labels — so spots sit
/// visually above the image and labels above spots.
#[derive(Debug, Clone)]
pub struct LayerTree {
    pub image: ImageLayer,
    pub defs: Vec<GradientDef>,
    pub spots: Vec<SpotShape>,
    pub labels: LabelLayer,
}
