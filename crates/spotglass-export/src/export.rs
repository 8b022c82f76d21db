//! Export entry points.
//!
//! Both operations snapshot the scene synchronously, suspend only for the
//! decode step, then composite onto the caller's surface. No cancellation
//! is provided: a caller that stops caring discards the future's result,
//! and concurrent calls against one surface resolve last-completion-wins.

use spotglass_scene::scene::SpotScene;

use crate::decode::{Decode, DecodeSource};
use crate::error::ExportError;
use crate::surface::DrawSurface;
use crate::svg::SvgDocument;

/// Decodes the scene's base image at native size and draws it onto
/// `surface` at the origin.
///
/// Rejects with [`ExportError::NoImage`] before any decode work when no
/// image is set. Decode failures are logged for operator visibility and
/// returned as [`ExportError::Decode`].
pub async fn export_image<D: Decode>(
    scene: &SpotScene,
    surface: &mut dyn DrawSurface,
    decoder: &D,
) -> Result<(), ExportError> {
    let Some(image) = scene.image() else {
        return Err(ExportError::NoImage);
    };

    let bitmap = decoder
        .decode(DecodeSource::Raster { bytes: image.bytes() })
        .await
        .map_err(|e| {
            log::warn!("image export decode failed: {e}");
            e
        })?;

    surface.draw_bitmap(&bitmap, 0, 0);
    Ok(())
}

/// Rasterizes the overlay alone — no image layer — at the scene's
/// dimensions and draws it onto `surface` at the origin.
///
/// Rejects with [`ExportError::NoDimensions`] before building anything when
/// either dimension is zero: the overlay needs a canvas size even though it
/// needs no image content. The temporary SVG document is released on the
/// success and failure paths alike.
pub async fn export_spots<D: Decode>(
    scene: &SpotScene,
    surface: &mut dyn DrawSurface,
    decoder: &D,
) -> Result<(), ExportError> {
    let (width, height) = (scene.width(), scene.height());
    if width == 0 || height == 0 {
        return Err(ExportError::NoDimensions);
    }

    let document = SvgDocument::from_tree(&scene.snapshot_tree(), width, height);
    let decoded = decoder
        .decode(DecodeSource::Vector { svg: document.source(), width, height })
        .await;
    drop(document);

    let bitmap = decoded.map_err(|e| {
        log::warn!("overlay export decode failed: {e}");
        ExportError::from(e)
    })?;

    surface.draw_bitmap(&bitmap, 0, 0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use spotglass_scene::coords::Vec2;
    use spotglass_scene::image::ImageResource;
    use spotglass_scene::paint::{Color, ColorMap};
    use spotglass_scene::spot::Spot;

    use super::*;
    use crate::bitmap::Bitmap;
    use crate::error::DecodeError;
    use crate::surface::PixmapSurface;

    struct RedRamp;

    impl ColorMap for RedRamp {
        fn map(&self, out: &mut Color, value: f32) {
            *out = Color::new(value, 0.0, 0.0);
        }
    }

    /// Synchronous stand-in for the platform decoder: records what it was
    /// asked to decode and returns a canned result.
    struct FakeDecoder {
        calls: Cell<usize>,
        last_vector: RefCell<Option<String>>,
        fail: bool,
    }

    impl FakeDecoder {
        fn ok() -> Self {
            Self { calls: Cell::new(0), last_vector: RefCell::new(None), fail: false }
        }

        fn failing() -> Self {
            Self { fail: true, ..Self::ok() }
        }
    }

    impl Decode for FakeDecoder {
        async fn decode(&self, source: DecodeSource<'_>) -> Result<Bitmap, DecodeError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(DecodeError::Malformed("fake".into()));
            }
            match source {
                DecodeSource::Raster { .. } => {
                    let mut pixels = vec![0; 2 * 2 * 4];
                    pixels[..4].copy_from_slice(&[255, 0, 0, 255]);
                    Ok(Bitmap::from_rgba8(2, 2, pixels).unwrap())
                }
                DecodeSource::Vector { svg, width, height } => {
                    *self.last_vector.borrow_mut() = Some(svg.to_owned());
                    Ok(Bitmap::blank(width, height))
                }
            }
        }
    }

    fn scene_with_image() -> SpotScene {
        let mut scene = SpotScene::new();
        scene.set_image(Some(ImageResource::new(vec![1, 2, 3], 2, 2)));
        scene
    }

    // ── gating ────────────────────────────────────────────────────────────

    #[test]
    fn image_export_without_an_image_rejects_before_decode() {
        let scene = SpotScene::new();
        let mut surface = PixmapSurface::new(2, 2);
        let decoder = FakeDecoder::ok();

        let result = pollster::block_on(export_image(&scene, &mut surface, &decoder));
        assert!(matches!(result, Err(ExportError::NoImage)));
        assert_eq!(decoder.calls.get(), 0);
    }

    #[test]
    fn spots_export_without_dimensions_rejects_before_decode() {
        let scene = SpotScene::new();
        let mut surface = PixmapSurface::new(2, 2);
        let decoder = FakeDecoder::ok();

        let result = pollster::block_on(export_spots(&scene, &mut surface, &decoder));
        assert!(matches!(result, Err(ExportError::NoDimensions)));
        assert_eq!(decoder.calls.get(), 0);
    }

    // ── success paths ─────────────────────────────────────────────────────

    #[test]
    fn image_export_draws_the_decoded_bitmap_at_the_origin() {
        let scene = scene_with_image();
        let mut surface = PixmapSurface::new(4, 4);
        let decoder = FakeDecoder::ok();

        pollster::block_on(export_image(&scene, &mut surface, &decoder)).unwrap();
        assert_eq!(decoder.calls.get(), 1);
        assert_eq!(surface.pixel(0, 0), [255, 0, 0, 255]);
    }

    #[test]
    fn spots_export_serializes_the_overlay_without_the_image() {
        let mut scene = scene_with_image();
        scene.set_color_map(Box::new(RedRamp));
        scene.set_spots(Some(&[Spot {
            pos: Vec2::new(1.0, 1.0),
            r: 1.0,
            name: "A".into(),
            intensity: Some(1.0),
        }]));
        let mut surface = PixmapSurface::new(2, 2);
        let decoder = FakeDecoder::ok();

        pollster::block_on(export_spots(&scene, &mut surface, &decoder)).unwrap();

        let svg = decoder.last_vector.borrow().clone().unwrap();
        assert!(svg.contains(r#"id="spot0""#));
        assert!(!svg.contains("<image"));
    }

    // ── failure propagation ───────────────────────────────────────────────

    #[test]
    fn decode_failures_reject_without_touching_the_surface() {
        let scene = scene_with_image();
        let mut surface = PixmapSurface::new(2, 2);
        let decoder = FakeDecoder::failing();

        let image_result = pollster::block_on(export_image(&scene, &mut surface, &decoder));
        assert!(matches!(image_result, Err(ExportError::Decode(_))));

        let spots_result = pollster::block_on(export_spots(&scene, &mut surface, &decoder));
        assert!(matches!(spots_result, Err(ExportError::Decode(_))));

        assert!(surface.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn export_leaves_scene_state_unchanged() {
        let mut scene = scene_with_image();
        scene.set_color_map(Box::new(RedRamp));
        scene.set_spots(Some(&[Spot {
            pos: Vec2::new(0.0, 0.0),
            r: 1.0,
            name: "A".into(),
            intensity: Some(0.5),
        }]));
        let mut surface = PixmapSurface::new(2, 2);
        let decoder = FakeDecoder::ok();

        pollster::block_on(export_spots(&scene, &mut surface, &decoder)).unwrap();

        assert_eq!(scene.spots().unwrap().len(), 1);
        assert!(scene.has_image());
        assert_eq!((scene.width(), scene.height()), (2, 2));
    }
}
