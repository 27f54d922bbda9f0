use std::collections::BTreeMap;
use std::io::Cursor;

use crate::{
    foundation::core::{NodeId, Rect, Rgba8},
    foundation::error::{FrameshowError, FrameshowResult},
    host::memory::MemoryHost,
    raster::ImageExporter,
    scene::model::{Fill, Region},
};

#[derive(Clone, Debug)]
struct PaintNode {
    bounds: Rect,
    clips_content: bool,
    colors: Vec<Rgba8>,
    children: Vec<NodeId>,
}

/// Flat-color CPU exporter over a snapshot of a [`MemoryHost`].
///
/// Paints each node's solid fills as axis-aligned rectangles, descendants over ancestors. The
/// exported region always clips; nested containers clip their subtree when `clips_content` is
/// set. Image fills are not painted.
#[derive(Clone, Debug)]
pub struct MemoryExporter {
    nodes: BTreeMap<NodeId, PaintNode>,
    scale: f64,
}

impl MemoryExporter {
    /// Snapshot `host` for export at `scale` pixels per canvas unit.
    pub fn new(host: &MemoryHost, scale: f64) -> FrameshowResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(FrameshowError::validation(
                "export scale must be finite and > 0",
            ));
        }
        let nodes = host
            .nodes()
            .map(|n| {
                let colors = n
                    .fills
                    .iter()
                    .filter_map(|f| match f {
                        Fill::Solid { color } => Some(*color),
                        Fill::Image { .. } => None,
                    })
                    .collect();
                (
                    n.id,
                    PaintNode {
                        bounds: n.bounds(),
                        clips_content: n.clips_content,
                        colors,
                        children: n.children.clone(),
                    },
                )
            })
            .collect();
        Ok(Self { nodes, scale })
    }

    fn render(&self, region: &Region) -> FrameshowResult<image::RgbaImage> {
        let node = self.nodes.get(&region.id).ok_or_else(|| {
            FrameshowError::rasterization(format!("unknown node {}", region.id))
        })?;
        let w = (node.bounds.width() * self.scale).ceil();
        let h = (node.bounds.height() * self.scale).ceil();
        if !(w >= 1.0 && h >= 1.0) {
            return Err(FrameshowError::rasterization(format!(
                "node {} has empty bounds",
                region.id
            )));
        }

        let mut img = image::RgbaImage::new(w as u32, h as u32);
        let local = Rect::from_origin_size((0.0, 0.0), node.bounds.size());
        let clip = Rect::new(0.0, 0.0, f64::from(img.width()), f64::from(img.height()));
        self.paint(&mut img, node, local, clip);
        Ok(img)
    }

    /// Paint `node` placed at `at` (canvas units, region-local), limited to `clip` (pixels).
    fn paint(&self, img: &mut image::RgbaImage, node: &PaintNode, at: Rect, clip: Rect) {
        let px = Rect::new(
            (at.x0 * self.scale).round(),
            (at.y0 * self.scale).round(),
            (at.x1 * self.scale).round(),
            (at.y1 * self.scale).round(),
        )
        .intersect(clip);
        let visible = px.x0 < px.x1 && px.y0 < px.y1;
        for color in &node.colors {
            if !visible {
                break;
            }
            for y in px.y0 as u32..px.y1 as u32 {
                for x in px.x0 as u32..px.x1 as u32 {
                    let p = img.get_pixel_mut(x, y);
                    p.0 = color.over(p.0);
                }
            }
        }

        if node.clips_content && !visible {
            return;
        }
        let child_clip = if node.clips_content { px } else { clip };
        for child in &node.children {
            let Some(c) = self.nodes.get(child) else {
                continue;
            };
            let placed = c.bounds + at.origin().to_vec2();
            self.paint(img, c, placed, child_clip);
        }
    }
}

impl ImageExporter for MemoryExporter {
    async fn export_png(&mut self, region: &Region) -> FrameshowResult<Vec<u8>> {
        let img = self.render(region)?;
        let mut out = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .map_err(|e| FrameshowError::rasterization(format!("encode png: {e}")))?;
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/cpu.rs"]
mod tests;
