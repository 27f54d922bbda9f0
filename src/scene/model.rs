use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{NodeId, Rect, Rgba8};
use crate::foundation::error::{FrameshowError, FrameshowResult};
use crate::host::{ImageHash, ScaleMode};
use crate::navigation::model::{FlowStartingPoint, Reaction};

/// Canvas element kind, serialized in the host's upper-case spelling (`"FRAME"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    /// Page container; never appears as a child.
    Page,
    /// Frame-like container, the only kind eligible for slides.
    Frame,
    /// Group of nodes.
    Group,
    /// Section container.
    Section,
    /// Plain rectangle.
    Rectangle,
    /// Ellipse.
    Ellipse,
    /// Text run.
    Text,
    /// Vector path.
    Vector,
    /// Component definition.
    Component,
    /// Component instance.
    Instance,
}

impl NodeKind {
    /// Kinds that may hold child nodes.
    pub fn accepts_children(self) -> bool {
        matches!(
            self,
            Self::Page | Self::Frame | Self::Group | Self::Section | Self::Component | Self::Instance
        )
    }
}

/// Paint applied to a node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Fill {
    /// Solid color.
    Solid {
        /// Fill color (straight alpha).
        color: Rgba8,
    },
    /// Registered image asset.
    Image {
        /// Hash returned by image registration.
        image_hash: ImageHash,
        /// How the image maps onto the node bounds.
        scale_mode: ScaleMode,
    },
}

/// Whole canvas document: ordered pages plus the index of the active one.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Document {
    /// Pages in document order.
    pub pages: Vec<PageDef>,
    /// Index into `pages` of the page plugins act on.
    #[serde(default)]
    pub current_page: usize,
}

/// One page and its top-level nodes.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PageDef {
    /// Optional explicit id; assigned on import when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,
    /// Page name.
    #[serde(default)]
    pub name: String,
    /// Top-level nodes in paint order.
    #[serde(default)]
    pub children: Vec<NodeDef>,
    /// Named prototype entry points.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flow_starting_points: Vec<FlowStartingPoint>,
}

/// One canvas node with geometry relative to its parent.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct NodeDef {
    /// Optional explicit id; assigned on import when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,
    /// Element kind.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// X position.
    #[serde(default)]
    pub x: f64,
    /// Y position.
    #[serde(default)]
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Hide children outside the node bounds.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub clips_content: bool,
    /// Paints, bottom first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Fill>,
    /// Children in paint order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDef>,
    /// Outgoing prototype interactions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reactions: Vec<Reaction>,
}

/// Read-only view of a top-level canvas region, as consumed by frame selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    /// Host node id.
    pub id: NodeId,
    /// Element kind.
    pub kind: NodeKind,
    /// Display name.
    pub name: String,
    /// Position and size in page space.
    pub bounds: Rect,
}

impl Region {
    /// Left edge.
    pub fn x(&self) -> f64 {
        self.bounds.x0
    }

    /// Top edge.
    pub fn y(&self) -> f64 {
        self.bounds.y0
    }

    /// Width.
    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    /// Height.
    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    /// Return `true` for frame-like regions.
    pub fn is_frame(&self) -> bool {
        self.kind == NodeKind::Frame
    }
}

impl Document {
    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FrameshowResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FrameshowError::serde(format!("parse document JSON: {e}")))
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FrameshowResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FrameshowError::validation(format!("open document JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> FrameshowResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FrameshowError::serde(format!("encode document JSON: {e}")))
    }

    /// Check structural and geometric sanity.
    pub fn validate(&self) -> FrameshowResult<()> {
        if self.pages.is_empty() {
            return Err(FrameshowError::validation("document must have at least one page"));
        }
        if self.current_page >= self.pages.len() {
            return Err(FrameshowError::validation(format!(
                "current_page {} out of range ({} pages)",
                self.current_page,
                self.pages.len()
            )));
        }

        let mut seen = BTreeSet::new();
        for page in &self.pages {
            if let Some(id) = page.id
                && !seen.insert(id)
            {
                return Err(FrameshowError::validation(format!("duplicate node id {id}")));
            }
            for node in &page.children {
                node.validate(&mut seen)?;
            }
        }
        Ok(())
    }
}

impl NodeDef {
    fn validate(&self, seen: &mut BTreeSet<NodeId>) -> FrameshowResult<()> {
        if let Some(id) = self.id
            && !seen.insert(id)
        {
            return Err(FrameshowError::validation(format!("duplicate node id {id}")));
        }
        if self.kind == NodeKind::Page {
            return Err(FrameshowError::validation(format!(
                "node '{}' has kind PAGE but is nested inside a page",
                self.name
            )));
        }
        for v in [self.x, self.y, self.width, self.height] {
            if !v.is_finite() {
                return Err(FrameshowError::validation(format!(
                    "node '{}' geometry must be finite",
                    self.name
                )));
            }
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(FrameshowError::validation(format!(
                "node '{}' must have non-negative size",
                self.name
            )));
        }
        if !self.children.is_empty() && !self.kind.accepts_children() {
            return Err(FrameshowError::validation(format!(
                "node '{}' of kind {:?} cannot have children",
                self.name, self.kind
            )));
        }
        for child in &self.children {
            child.validate(seen)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
