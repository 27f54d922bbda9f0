use crate::{
    config::SqueezeOpts,
    foundation::core::{Point, Rect, Size},
    raster::Slide,
};

/// Which neighbour a preview shows, relative to the slide being composed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewRole {
    /// Following slide.
    Next,
    /// The slide itself.
    Current,
    /// Preceding slide.
    Previous,
}

/// Size transform applied to the source slide's dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeRule {
    /// Keep width and height.
    Full,
    /// Divide width by the squeeze divisor, keep height.
    Squeezed,
}

/// Position rule for the preview inside the slide container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionRule {
    /// Top-left corner of the container.
    Origin,
    /// Just off the left edge: `x = -(width + gap)`, `y = 0`.
    OffLeft,
}

/// One row of the preview table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewRule {
    /// Source index offset (`j = i + offset`).
    pub offset: isize,
    /// Role of the preview.
    pub role: PreviewRole,
    /// Size transform.
    pub size: SizeRule,
    /// Position transform.
    pub position: PositionRule,
}

/// Preview rules in append order; later rows paint over earlier ones.
///
/// `Current` and `Next` share the full-size rectangle at the origin, so one of them is always
/// hidden; the append order here is the one existing slideshows were built with.
pub const PREVIEW_RULES: [PreviewRule; 3] = [
    PreviewRule {
        offset: 1,
        role: PreviewRole::Next,
        size: SizeRule::Full,
        position: PositionRule::Origin,
    },
    PreviewRule {
        offset: 0,
        role: PreviewRole::Current,
        size: SizeRule::Full,
        position: PositionRule::Origin,
    },
    PreviewRule {
        offset: -1,
        role: PreviewRole::Previous,
        size: SizeRule::Squeezed,
        position: PositionRule::OffLeft,
    },
];

/// One image element to place inside a composed slide.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewPlan {
    /// Element name, `"rect {source_index}"`.
    pub name: String,
    /// Index of the slide whose image is shown.
    pub source_index: usize,
    /// Role of the element.
    pub role: PreviewRole,
    /// Bounds relative to the slide container.
    pub bounds: Rect,
}

/// Container and children for slide `index`, before any host call.
#[derive(Clone, Debug, PartialEq)]
pub struct SlidePlan {
    /// Container name, `"frame {index}"`.
    pub name: String,
    /// Index in the ordered slide sequence.
    pub index: usize,
    /// Container bounds in page space (same as the source frame).
    pub bounds: Rect,
    /// Always `true`: previews outside the container are hidden.
    pub clips_content: bool,
    /// Children in append order.
    pub previews: Vec<PreviewPlan>,
}

impl PreviewRule {
    /// Place slide `source` according to this rule.
    pub fn place(&self, source: &Slide, squeeze: &SqueezeOpts) -> Rect {
        let size = match self.size {
            SizeRule::Full => source.size(),
            SizeRule::Squeezed => {
                Size::new(source.width / squeeze.width_divisor, source.height)
            }
        };
        let origin = match self.position {
            PositionRule::Origin => Point::ZERO,
            PositionRule::OffLeft => Point::new(-(size.width + squeeze.gap), 0.0),
        };
        Rect::from_origin_size(origin, size)
    }
}

/// Plan slide `index` of `slides`. Rules whose source index falls outside the sequence are
/// skipped, so the first slide has no previous preview and the last has no next preview.
pub fn plan_slide(index: usize, slides: &[Slide], squeeze: &SqueezeOpts) -> Option<SlidePlan> {
    let slide = slides.get(index)?;
    let previews = PREVIEW_RULES
        .iter()
        .filter_map(|rule| {
            let j = index.checked_add_signed(rule.offset)?;
            let source = slides.get(j)?;
            Some(PreviewPlan {
                name: format!("rect {j}"),
                source_index: j,
                role: rule.role,
                bounds: rule.place(source, squeeze),
            })
        })
        .collect();

    Some(SlidePlan {
        name: format!("frame {index}"),
        index,
        bounds: slide.bounds(),
        clips_content: true,
        previews,
    })
}

/// Plan every slide, in input order.
pub fn plan_all(slides: &[Slide], squeeze: &SqueezeOpts) -> Vec<SlidePlan> {
    (0..slides.len())
        .filter_map(|i| plan_slide(i, slides, squeeze))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layout.rs"]
mod tests;
