//! Host platform boundary.
//!
//! The slideshow pipeline never touches canvas state directly; every read and write goes through
//! [`Host`], addressed by [`NodeId`] handles. [`memory::MemoryHost`] is the in-process
//! implementation used by the CLI and tests.

use crate::{
    foundation::core::{NodeId, Point, Size},
    foundation::error::FrameshowResult,
    navigation::model::{FlowStartingPoint, Reaction},
    scene::model::{Fill, Region},
};

/// In-memory document host.
pub mod memory;

/// Handle of a registered image asset (lower-case hex SHA-256 of its bytes).
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ImageHash(pub String);

impl std::fmt::Display for ImageHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How an image fill maps onto its node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleMode {
    /// Cover the node, cropping overflow.
    Fill,
    /// Letterbox inside the node.
    Fit,
    /// Stretch to the node bounds (crop rectangle = full image).
    Crop,
    /// Repeat at native size.
    Tile,
}

/// Completion signal sent back to the host once the run ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CloseStatus {
    /// Run finished successfully.
    Done,
    /// Run aborted; message describes the first failure.
    Failed(String),
}

/// Canvas primitives the slideshow pipeline depends on.
///
/// Created nodes start detached; they become visible once appended to a page or container.
pub trait Host {
    /// Page the run was started on.
    fn current_page(&self) -> NodeId;

    /// Make `page` the context navigation targets resolve against.
    fn set_current_page(&mut self, page: NodeId) -> FrameshowResult<()>;

    /// Direct children of `page`, in child order.
    fn page_regions(&self, page: NodeId) -> FrameshowResult<Vec<Region>>;

    /// Create an empty page appended to the document.
    fn create_page(&mut self) -> FrameshowResult<NodeId>;

    /// Create a detached frame container.
    fn create_frame(&mut self) -> FrameshowResult<NodeId>;

    /// Create a detached rectangle.
    fn create_rectangle(&mut self) -> FrameshowResult<NodeId>;

    /// Register encoded image bytes for use in an image fill.
    fn register_image(&mut self, bytes: &[u8]) -> FrameshowResult<ImageHash>;

    /// Rename a node.
    fn set_name(&mut self, node: NodeId, name: &str) -> FrameshowResult<()>;

    /// Move a node, relative to its parent.
    fn set_position(&mut self, node: NodeId, pos: Point) -> FrameshowResult<()>;

    /// Resize a node.
    fn resize(&mut self, node: NodeId, size: Size) -> FrameshowResult<()>;

    /// Toggle child clipping on a container.
    fn set_clips_content(&mut self, node: NodeId, clips: bool) -> FrameshowResult<()>;

    /// Replace a node's paints.
    fn set_fills(&mut self, node: NodeId, fills: Vec<Fill>) -> FrameshowResult<()>;

    /// Append `child` as the topmost child of `parent`, detaching it from any previous parent.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> FrameshowResult<()>;

    /// Replace the named entry points of `page`.
    fn set_flow_starting_points(
        &mut self,
        page: NodeId,
        points: Vec<FlowStartingPoint>,
    ) -> FrameshowResult<()>;

    /// Replace the outgoing interactions of `node`.
    fn set_reactions(&mut self, node: NodeId, reactions: Vec<Reaction>) -> FrameshowResult<()>;

    /// Signal that the run is over.
    fn close(&mut self, status: CloseStatus);
}
