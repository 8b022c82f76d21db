//! SVG serialization of a layer tree.
//!
//! The overlay-only export goes through SVG because compositing label text
//! and radial gradients straight onto pixels would mean reimplementing text
//! layout and gradient rasterization here; serializing the tree and letting
//! the vector decoder rasterize it reuses that machinery at the cost of one
//! asynchronous round trip.

use std::fmt::Write;

use spotglass_scene::scene::{GradientDef, LayerTree};

/// A self-contained SVG document built from a layer tree.
///
/// The image layer is never serialized: raster export draws the stored
/// bytes directly, and overlay export wants the vector content alone.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    source: String,
}

impl SvgDocument {
    /// Serializes `tree` into an SVG document of the given pixel size.
    pub fn from_tree(tree: &LayerTree, width: u32, height: u32) -> Self {
        let mut s = String::new();
        let _ = write!(
            s,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
        );

        s.push_str("<defs>");
        for (i, def) in tree.defs.iter().enumerate() {
            write_def(&mut s, i, def);
        }
        s.push_str("</defs>");

        s.push_str(r#"<g id="spots">"#);
        for shape in &tree.spots {
            let _ = write!(
                s,
                r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="url(#{})"/>"#,
                shape.center.x,
                shape.center.y,
                shape.radius,
                shape.radius,
                GradientDef::reference(shape.fill),
            );
        }
        s.push_str("</g>");

        let labels = &tree.labels;
        let _ = write!(
            s,
            r#"<g id="labels" font-size="{}" fill="{}" visibility="{}">"#,
            labels.font_size,
            escape_xml(&labels.font_color),
            if labels.visible { "visible" } else { "collapsed" },
        );
        for label in &labels.labels {
            let _ = write!(
                s,
                r#"<text x="{}" y="{}">{}</text>"#,
                label.pos.x,
                label.pos.y,
                escape_xml(&label.text),
            );
        }
        s.push_str("</g>");

        s.push_str("</svg>");
        Self { source: s }
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }
}

fn write_def(out: &mut String, index: usize, def: &GradientDef) {
    let _ = write!(
        out,
        r#"<radialGradient id="{}" cx="50%" cy="50%" r="50%" fx="50%" fy="50%">"#,
        GradientDef::reference(index),
    );
    for stop in &def.stops {
        let offset = stop.offset * 100.0;
        match stop.color {
            Some(color) => {
                let _ = write!(
                    out,
                    r#"<stop offset="{offset}%" stop-color="{}" stop-opacity="{}"/>"#,
                    color.to_css(),
                    stop.opacity,
                );
            }
            // No data: no stop-color at all, just fully transparent.
            None => {
                let _ = write!(out, r#"<stop offset="{offset}%" stop-opacity="0"/>"#);
            }
        }
    }
    out.push_str("</radialGradient>");
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
