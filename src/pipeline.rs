use crate::{
    compose::{ComposedSlide, compose},
    config::SlideshowOpts,
    foundation::core::NodeId,
    foundation::error::FrameshowResult,
    host::{CloseStatus, Host},
    navigation::{NavigationGraph, link},
    raster::{Rasterizer, rasterize_all},
    select::select_frames,
};

/// Result of a slideshow build.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideshowReport {
    /// Page holding the composed slides.
    pub page: NodeId,
    /// Composed slides in order.
    pub slides: Vec<ComposedSlide>,
    /// Navigation chain over `slides`.
    pub graph: NavigationGraph,
}

/// Select, rasterize, compose and link the frames of the host's current page.
///
/// Frames are rasterized one at a time. Nothing is written to the host until every frame has
/// rasterized; the first failure returns with the document untouched.
#[tracing::instrument(skip_all)]
pub async fn build_slideshow<H, R>(
    host: &mut H,
    rasterizer: &mut R,
    opts: &SlideshowOpts,
) -> FrameshowResult<SlideshowReport>
where
    H: Host + ?Sized,
    R: Rasterizer,
{
    opts.validate()?;

    let source_page = host.current_page();
    let regions = host.page_regions(source_page)?;
    let frames = select_frames(&regions, opts.order);
    if frames.is_empty() {
        tracing::warn!(page = %source_page, "no top-level frames to convert");
    } else {
        tracing::info!(
            page = %source_page,
            frames = frames.len(),
            skipped = regions.len() - frames.len(),
            "selected frames"
        );
    }

    let slides = rasterize_all(rasterizer, &frames).await?;

    let page = host.create_page()?;
    if let Some(name) = &opts.page_name {
        host.set_name(page, name)?;
    }
    host.set_current_page(page)?;

    let composed = compose(host, page, &slides, &opts.squeeze)?;
    let nodes: Vec<NodeId> = composed.iter().map(|c| c.node).collect();
    let graph = link(host, page, &nodes, opts)?;

    tracing::info!(
        page = %page,
        slides = composed.len(),
        edges = graph.edges.len(),
        "slideshow built"
    );

    Ok(SlideshowReport {
        page,
        slides: composed,
        graph,
    })
}

/// [`build_slideshow`], then signal completion to the host either way.
pub async fn run<H, R>(
    host: &mut H,
    rasterizer: &mut R,
    opts: &SlideshowOpts,
) -> FrameshowResult<SlideshowReport>
where
    H: Host + ?Sized,
    R: Rasterizer,
{
    let result = build_slideshow(host, rasterizer, opts).await;
    match &result {
        Ok(_) => host.close(CloseStatus::Done),
        Err(e) => {
            tracing::error!(error = %e, "slideshow build failed");
            host.close(CloseStatus::Failed(e.to_string()));
        }
    }
    result
}
