//! Frame rasterization boundary.
//!
//! A [`Rasterizer`] turns one frame into a [`Slide`]. The stock [`ChannelRasterizer`] asks an
//! [`ImageExporter`] for raw image bytes, posts them through a [`MessagePort`], and resolves on
//! the first reply.

use std::future::Future;
use std::sync::Arc;

use crate::{
    foundation::core::{NodeId, Rect, Size},
    foundation::error::{FrameshowError, FrameshowResult},
    scene::model::Region,
};

/// Message-channel ports.
pub mod channel;
/// CPU exporter for [`crate::host::memory::MemoryHost`] documents.
pub mod cpu;

/// Rasterized frame: source geometry plus encoded image bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    /// Frame the slide was made from.
    pub source: NodeId,
    /// Source x position.
    pub x: f64,
    /// Source y position.
    pub y: f64,
    /// Source width.
    pub width: f64,
    /// Source height.
    pub height: f64,
    /// Encoded image (PNG).
    pub bytes: Arc<Vec<u8>>,
}

impl Slide {
    /// Source bounds.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size((self.x, self.y), (self.width, self.height))
    }

    /// Source size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Converts one frame into a [`Slide`].
pub trait Rasterizer {
    /// Rasterize `frame`. Failures are reported as [`FrameshowError::Rasterization`].
    fn convert(&mut self, frame: &Region) -> impl Future<Output = FrameshowResult<Slide>>;
}

/// Host primitive that exports a region as encoded image bytes.
pub trait ImageExporter {
    /// Export `region` as PNG bytes.
    fn export_png(&mut self, region: &Region) -> impl Future<Output = FrameshowResult<Vec<u8>>>;
}

/// Two-way message channel to an external peer.
pub trait MessagePort {
    /// Send `bytes` to the peer.
    fn post(&mut self, bytes: Vec<u8>) -> FrameshowResult<()>;

    /// Wait for the peer's first reply to the last post.
    fn recv(&mut self) -> impl Future<Output = FrameshowResult<Vec<u8>>>;
}

/// [`Rasterizer`] that round-trips exported bytes through a [`MessagePort`].
#[derive(Debug)]
pub struct ChannelRasterizer<E, P> {
    exporter: E,
    port: P,
}

impl<E, P> ChannelRasterizer<E, P> {
    /// Pair an exporter with a port.
    pub fn new(exporter: E, port: P) -> Self {
        Self { exporter, port }
    }

    /// Split back into parts.
    pub fn into_parts(self) -> (E, P) {
        (self.exporter, self.port)
    }
}

impl<E: ImageExporter, P: MessagePort> Rasterizer for ChannelRasterizer<E, P> {
    async fn convert(&mut self, frame: &Region) -> FrameshowResult<Slide> {
        let raw = self
            .exporter
            .export_png(frame)
            .await
            .map_err(|e| as_rasterization(frame, "export", e))?;

        self.port
            .post(raw)
            .map_err(|e| as_rasterization(frame, "post", e))?;
        let bytes = self
            .port
            .recv()
            .await
            .map_err(|e| as_rasterization(frame, "receive", e))?;
        if bytes.is_empty() {
            return Err(FrameshowError::rasterization(format!(
                "frame '{}' ({}): peer replied with no image bytes",
                frame.name, frame.id
            )));
        }

        Ok(Slide {
            source: frame.id,
            x: frame.x(),
            y: frame.y(),
            width: frame.width(),
            height: frame.height(),
            bytes: Arc::new(bytes),
        })
    }
}

fn as_rasterization(frame: &Region, step: &str, err: FrameshowError) -> FrameshowError {
    match err {
        FrameshowError::Rasterization(msg) => FrameshowError::rasterization(format!(
            "frame '{}' ({}): {step}: {msg}",
            frame.name, frame.id
        )),
        other => FrameshowError::rasterization(format!(
            "frame '{}' ({}): {step}: {other}",
            frame.name, frame.id
        )),
    }
}

/// Rasterize `frames` one at a time, in order. The first failure aborts and discards
/// everything collected so far.
#[tracing::instrument(skip_all, fields(count = frames.len()))]
pub async fn rasterize_all<R: Rasterizer>(
    rasterizer: &mut R,
    frames: &[Region],
) -> FrameshowResult<Vec<Slide>> {
    let mut slides = Vec::with_capacity(frames.len());
    for frame in frames {
        let slide = rasterizer.convert(frame).await?;
        tracing::debug!(
            frame = %frame.id,
            name = %frame.name,
            bytes = slide.bytes.len(),
            "rasterized frame"
        );
        slides.push(slide);
    }
    Ok(slides)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/adapter.rs"]
mod tests;
