//! Slide composition: one clipped container per slide holding next/current/previous previews.

use crate::{
    config::SqueezeOpts,
    foundation::core::{NodeId, Point},
    foundation::error::FrameshowResult,
    host::{Host, ScaleMode},
    raster::Slide,
    scene::model::Fill,
};

/// Pure preview layout rules.
pub mod layout;

pub use layout::{PREVIEW_RULES, PreviewPlan, PreviewRole, SlidePlan, plan_all, plan_slide};

/// A composed slide container on the target page.
#[derive(Clone, Debug, PartialEq)]
pub struct ComposedSlide {
    /// Container node.
    pub node: NodeId,
    /// Position in the slide sequence.
    pub index: usize,
    /// Preview elements in append order.
    pub previews: Vec<(PreviewRole, NodeId)>,
}

/// Build one container per slide on `page`, in input order.
#[tracing::instrument(skip(host, slides, squeeze), fields(count = slides.len()))]
pub fn compose<H: Host + ?Sized>(
    host: &mut H,
    page: NodeId,
    slides: &[Slide],
    squeeze: &SqueezeOpts,
) -> FrameshowResult<Vec<ComposedSlide>> {
    squeeze.validate()?;

    let mut out = Vec::with_capacity(slides.len());
    for plan in plan_all(slides, squeeze) {
        let composed = apply_plan(host, page, slides, &plan)?;
        tracing::debug!(
            slide = plan.index,
            node = %composed.node,
            previews = composed.previews.len(),
            "composed slide"
        );
        out.push(composed);
    }
    Ok(out)
}

fn apply_plan<H: Host + ?Sized>(
    host: &mut H,
    page: NodeId,
    slides: &[Slide],
    plan: &SlidePlan,
) -> FrameshowResult<ComposedSlide> {
    let frame = host.create_frame()?;
    host.set_name(frame, &plan.name)?;
    host.set_clips_content(frame, plan.clips_content)?;
    host.set_position(frame, plan.bounds.origin())?;
    host.resize(frame, plan.bounds.size())?;
    host.append_child(page, frame)?;

    let mut previews = Vec::with_capacity(plan.previews.len());
    for preview in &plan.previews {
        let source = &slides[preview.source_index];
        let image = new_image(host, preview, source)?;
        host.append_child(frame, image)?;
        previews.push((preview.role, image));
    }

    Ok(ComposedSlide {
        node: frame,
        index: plan.index,
        previews,
    })
}

fn new_image<H: Host + ?Sized>(
    host: &mut H,
    preview: &PreviewPlan,
    source: &Slide,
) -> FrameshowResult<NodeId> {
    let rect = host.create_rectangle()?;
    host.set_name(rect, &preview.name)?;
    host.set_position(rect, Point::new(preview.bounds.x0, preview.bounds.y0))?;
    host.resize(rect, preview.bounds.size())?;
    let image_hash = host.register_image(&source.bytes)?;
    host.set_fills(
        rect,
        vec![Fill::Image {
            image_hash,
            scale_mode: ScaleMode::Crop,
        }],
    )?;
    Ok(rect)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compose.rs"]
mod tests;
