//! Frameshow turns the top-level frames of a canvas page into a click-through slideshow.
//!
//! The pipeline runs in four strictly sequential stages:
//!
//! - [`select`]: keep frame regions and order them (Y-priority by default)
//! - [`raster`]: rasterize each frame, one at a time, into a [`Slide`]
//! - [`compose`]: build one clipped container per slide with next/current/previous previews,
//!   the previous one squeezed to a sliver off the left edge
//! - [`navigation`]: chain the containers with click reactions and one entry point
//!
//! All canvas access goes through the [`Host`] trait; [`MemoryHost`] is the in-process host.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Slide composition.
pub mod compose;
/// Build options.
pub mod config;
/// Host platform boundary.
pub mod host;
/// Navigation linking.
pub mod navigation;
/// End-to-end pipeline.
pub mod pipeline;
/// Frame rasterization.
pub mod raster;
/// Document model.
pub mod scene;
/// Frame selection and ordering.
pub mod select;

pub use crate::foundation::core::{NodeId, Point, Rect, Rgba8, Size, Vec2};
pub use crate::foundation::error::{FrameshowError, FrameshowResult};

pub use crate::compose::{ComposedSlide, PreviewRole, SlidePlan, compose, plan_slide};
pub use crate::config::{SlideshowOpts, SqueezeOpts, TransitionSpec};
pub use crate::host::memory::MemoryHost;
pub use crate::host::{CloseStatus, Host, ImageHash, ScaleMode};
pub use crate::navigation::model::{
    Action, Direction, Easing, FlowStartingPoint, Navigation, Reaction, Transition,
    TransitionKind, Trigger,
};
pub use crate::navigation::{NavigationEdge, NavigationGraph, link, plan_links};
pub use crate::pipeline::{SlideshowReport, build_slideshow, run};
pub use crate::raster::channel::{LoopbackPort, Reply};
pub use crate::raster::cpu::MemoryExporter;
pub use crate::raster::{ChannelRasterizer, ImageExporter, MessagePort, Rasterizer, Slide};
pub use crate::scene::model::{Document, Fill, NodeDef, NodeKind, PageDef, Region};
pub use crate::select::{SortPriority, compare_priority_x, compare_priority_y, select_frames};
