use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use sha2::Digest as _;

use crate::{
    foundation::core::{NodeId, Point, Rect, Rgba8, Size},
    foundation::error::{FrameshowError, FrameshowResult},
    host::{CloseStatus, Host, ImageHash},
    navigation::model::{FlowStartingPoint, Reaction},
    scene::model::{Document, Fill, NodeDef, NodeKind, PageDef, Region},
};

const DEFAULT_NODE_SIZE: f64 = 100.0;

/// One node stored by [`MemoryHost`].
#[derive(Clone, Debug)]
pub struct MemoryNode {
    /// Node id.
    pub id: NodeId,
    /// Element kind.
    pub kind: NodeKind,
    /// Display name.
    pub name: String,
    /// Position relative to the parent.
    pub x: f64,
    /// Position relative to the parent.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Child clipping flag.
    pub clips_content: bool,
    /// Paints, bottom first.
    pub fills: Vec<Fill>,
    /// Children in paint order.
    pub children: Vec<NodeId>,
    /// Owning page or container; `None` while detached (and for pages).
    pub parent: Option<NodeId>,
    /// Outgoing interactions.
    pub reactions: Vec<Reaction>,
    /// Entry points (pages only).
    pub flow_starting_points: Vec<FlowStartingPoint>,
}

impl MemoryNode {
    fn new(id: NodeId, kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            x: 0.0,
            y: 0.0,
            width: DEFAULT_NODE_SIZE,
            height: DEFAULT_NODE_SIZE,
            clips_content: false,
            fills: Vec::new(),
            children: Vec::new(),
            parent: None,
            reactions: Vec::new(),
            flow_starting_points: Vec::new(),
        }
    }

    /// Bounds relative to the parent.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size((self.x, self.y), (self.width, self.height))
    }

}

/// In-process canvas document implementing [`Host`].
///
/// Nodes live in an id-keyed arena; images are deduplicated by content hash.
#[derive(Debug)]
pub struct MemoryHost {
    nodes: BTreeMap<NodeId, MemoryNode>,
    pages: Vec<NodeId>,
    current: NodeId,
    images: BTreeMap<ImageHash, Arc<Vec<u8>>>,
    next_id: u64,
    closed: Option<CloseStatus>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    /// Document with one empty page.
    pub fn new() -> Self {
        let first = NodeId(0);
        let mut nodes = BTreeMap::new();
        nodes.insert(first, MemoryNode::new(first, NodeKind::Page, "Page 1"));
        Self {
            nodes,
            pages: vec![first],
            current: first,
            images: BTreeMap::new(),
            next_id: 1,
            closed: None,
        }
    }

    /// Import a validated document. Explicit ids are kept; missing ids are assigned after the
    /// largest explicit one.
    pub fn from_document(doc: &Document) -> FrameshowResult<Self> {
        doc.validate()?;

        let mut max_id = None::<u64>;
        for page in &doc.pages {
            if let Some(id) = page.id {
                max_id = max_id.max(Some(id.0));
            }
            for node in &page.children {
                max_explicit_id(node, &mut max_id);
            }
        }

        let mut host = Self {
            nodes: BTreeMap::new(),
            pages: Vec::new(),
            current: NodeId(0),
            images: BTreeMap::new(),
            next_id: max_id.map_or(0, |m| m + 1),
            closed: None,
        };

        for page in &doc.pages {
            let id = page.id.unwrap_or_else(|| host.alloc_id());
            let mut rec = MemoryNode::new(id, NodeKind::Page, page.name.clone());
            rec.flow_starting_points = page.flow_starting_points.clone();
            host.nodes.insert(id, rec);
            host.pages.push(id);
            for child in &page.children {
                host.import_node(child, id);
            }
        }
        host.current = host.pages[doc.current_page];
        Ok(host)
    }

    /// Export the whole document, including pages created during the run.
    pub fn to_document(&self) -> Document {
        let pages = self
            .pages
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .map(|page| PageDef {
                id: Some(page.id),
                name: page.name.clone(),
                children: page
                    .children
                    .iter()
                    .filter_map(|c| self.export_node(*c))
                    .collect(),
                flow_starting_points: page.flow_starting_points.clone(),
            })
            .collect();
        let current_page = self
            .pages
            .iter()
            .position(|p| *p == self.current)
            .unwrap_or(0);
        Document {
            pages,
            current_page,
        }
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&MemoryNode> {
        self.nodes.get(&id)
    }

    /// All stored nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &MemoryNode> {
        self.nodes.values()
    }

    /// Children of `id` in paint order (empty for unknown ids).
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Pages in document order.
    pub fn pages(&self) -> &[NodeId] {
        &self.pages
    }

    /// Number of stored nodes, detached ones included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Registered image bytes by hash.
    pub fn image(&self, hash: &ImageHash) -> Option<&Arc<Vec<u8>>> {
        self.images.get(hash)
    }

    /// Number of distinct registered images.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Status passed to [`Host::close`], if the run has ended.
    pub fn close_status(&self) -> Option<&CloseStatus> {
        self.closed.as_ref()
    }

    /// Page that (transitively) owns `id`.
    pub fn page_of(&self, id: NodeId) -> Option<NodeId> {
        let mut cur = self.nodes.get(&id)?;
        loop {
            if cur.kind == NodeKind::Page {
                return Some(cur.id);
            }
            cur = self.nodes.get(&cur.parent?)?;
        }
    }

    /// Write every registered image to `dir` as `<hash>.png`.
    pub fn write_images(&self, dir: &Path) -> FrameshowResult<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create image dir '{}'", dir.display()))?;
        let mut out = Vec::with_capacity(self.images.len());
        for (hash, bytes) in &self.images {
            let path = dir.join(format!("{hash}.png"));
            std::fs::write(&path, bytes.as_slice())
                .with_context(|| format!("write image '{}'", path.display()))?;
            out.push(path);
        }
        Ok(out)
    }

    fn alloc_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    fn import_node(&mut self, def: &NodeDef, parent: NodeId) {
        let id = def.id.unwrap_or_else(|| self.alloc_id());
        let mut rec = MemoryNode::new(id, def.kind, def.name.clone());
        rec.x = def.x;
        rec.y = def.y;
        rec.width = def.width;
        rec.height = def.height;
        rec.clips_content = def.clips_content;
        rec.fills = def.fills.clone();
        rec.reactions = def.reactions.clone();
        rec.parent = Some(parent);
        self.nodes.insert(id, rec);
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.push(id);
        }
        for child in &def.children {
            self.import_node(child, id);
        }
    }

    fn export_node(&self, id: NodeId) -> Option<NodeDef> {
        let n = self.nodes.get(&id)?;
        Some(NodeDef {
            id: Some(n.id),
            kind: n.kind,
            name: n.name.clone(),
            x: n.x,
            y: n.y,
            width: n.width,
            height: n.height,
            clips_content: n.clips_content,
            fills: n.fills.clone(),
            children: n
                .children
                .iter()
                .filter_map(|c| self.export_node(*c))
                .collect(),
            reactions: n.reactions.clone(),
        })
    }

    fn get(&self, id: NodeId) -> FrameshowResult<&MemoryNode> {
        self.nodes
            .get(&id)
            .ok_or_else(|| FrameshowError::host(format!("unknown node {id}")))
    }

    fn get_mut(&mut self, id: NodeId) -> FrameshowResult<&mut MemoryNode> {
        self.nodes
            .get_mut(&id)
            .ok_or_else(|| FrameshowError::host(format!("unknown node {id}")))
    }

    fn page(&self, id: NodeId) -> FrameshowResult<&MemoryNode> {
        let node = self.get(id)?;
        if node.kind != NodeKind::Page {
            return Err(FrameshowError::host(format!("node {id} is not a page")));
        }
        Ok(node)
    }

    fn is_ancestor(&self, ancestor: NodeId, of: NodeId) -> bool {
        let mut cur = self.nodes.get(&of).and_then(|n| n.parent);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.nodes.get(&id).and_then(|n| n.parent);
        }
        false
    }

    fn create_node(&mut self, kind: NodeKind, name: &str, fill: Rgba8) -> NodeId {
        let id = self.alloc_id();
        let mut rec = MemoryNode::new(id, kind, name);
        rec.fills = vec![Fill::Solid { color: fill }];
        self.nodes.insert(id, rec);
        id
    }
}

fn max_explicit_id(def: &NodeDef, max_id: &mut Option<u64>) {
    if let Some(id) = def.id {
        *max_id = (*max_id).max(Some(id.0));
    }
    for child in &def.children {
        max_explicit_id(child, max_id);
    }
}

impl Host for MemoryHost {
    fn current_page(&self) -> NodeId {
        self.current
    }

    fn set_current_page(&mut self, page: NodeId) -> FrameshowResult<()> {
        self.page(page)?;
        self.current = page;
        Ok(())
    }

    fn page_regions(&self, page: NodeId) -> FrameshowResult<Vec<Region>> {
        let page = self.page(page)?;
        page.children
            .iter()
            .map(|c| {
                let n = self.get(*c)?;
                Ok(Region {
                    id: n.id,
                    kind: n.kind,
                    name: n.name.clone(),
                    bounds: n.bounds(),
                })
            })
            .collect()
    }

    fn create_page(&mut self) -> FrameshowResult<NodeId> {
        let id = self.alloc_id();
        let name = format!("Page {}", self.pages.len() + 1);
        self.nodes
            .insert(id, MemoryNode::new(id, NodeKind::Page, name));
        self.pages.push(id);
        Ok(id)
    }

    fn create_frame(&mut self) -> FrameshowResult<NodeId> {
        Ok(self.create_node(NodeKind::Frame, "Frame", Rgba8::white()))
    }

    fn create_rectangle(&mut self) -> FrameshowResult<NodeId> {
        Ok(self.create_node(
            NodeKind::Rectangle,
            "Rectangle",
            Rgba8::new(217, 217, 217, 255),
        ))
    }

    fn register_image(&mut self, bytes: &[u8]) -> FrameshowResult<ImageHash> {
        if bytes.is_empty() {
            return Err(FrameshowError::host("cannot register empty image bytes"));
        }
        let digest = sha2::Sha256::digest(bytes);
        let mut hex = String::with_capacity(digest.len() * 2);
        for b in digest {
            hex.push_str(&format!("{b:02x}"));
        }
        let hash = ImageHash(hex);
        self.images
            .entry(hash.clone())
            .or_insert_with(|| Arc::new(bytes.to_vec()));
        Ok(hash)
    }

    fn set_name(&mut self, node: NodeId, name: &str) -> FrameshowResult<()> {
        self.get_mut(node)?.name = name.to_string();
        Ok(())
    }

    fn set_position(&mut self, node: NodeId, pos: Point) -> FrameshowResult<()> {
        if !pos.x.is_finite() || !pos.y.is_finite() {
            return Err(FrameshowError::host(format!(
                "position of {node} must be finite"
            )));
        }
        let n = self.get_mut(node)?;
        n.x = pos.x;
        n.y = pos.y;
        Ok(())
    }

    fn resize(&mut self, node: NodeId, size: Size) -> FrameshowResult<()> {
        if !size.width.is_finite() || !size.height.is_finite() {
            return Err(FrameshowError::host(format!("size of {node} must be finite")));
        }
        if size.width < 0.0 || size.height < 0.0 {
            return Err(FrameshowError::host(format!(
                "size of {node} must be non-negative"
            )));
        }
        let n = self.get_mut(node)?;
        n.width = size.width;
        n.height = size.height;
        Ok(())
    }

    fn set_clips_content(&mut self, node: NodeId, clips: bool) -> FrameshowResult<()> {
        self.get_mut(node)?.clips_content = clips;
        Ok(())
    }

    fn set_fills(&mut self, node: NodeId, fills: Vec<Fill>) -> FrameshowResult<()> {
        for fill in &fills {
            if let Fill::Image { image_hash, .. } = fill
                && !self.images.contains_key(image_hash)
            {
                return Err(FrameshowError::host(format!(
                    "image {image_hash} is not registered"
                )));
            }
        }
        self.get_mut(node)?.fills = fills;
        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> FrameshowResult<()> {
        if parent == child || self.is_ancestor(child, parent) {
            return Err(FrameshowError::host(format!(
                "appending {child} to {parent} would create a cycle"
            )));
        }
        if !self.get(parent)?.kind.accepts_children() {
            return Err(FrameshowError::host(format!(
                "node {parent} cannot have children"
            )));
        }
        let old_parent = {
            let c = self.get(child)?;
            if c.kind == NodeKind::Page {
                return Err(FrameshowError::host(format!(
                    "page {child} cannot be appended"
                )));
            }
            c.parent
        };
        if let Some(old) = old_parent
            && let Some(p) = self.nodes.get_mut(&old)
        {
            p.children.retain(|c| *c != child);
        }
        self.get_mut(parent)?.children.push(child);
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn set_flow_starting_points(
        &mut self,
        page: NodeId,
        points: Vec<FlowStartingPoint>,
    ) -> FrameshowResult<()> {
        let rec = self.page(page)?;
        for p in &points {
            if !rec.children.contains(&p.node_id) {
                return Err(FrameshowError::link_resolution(format!(
                    "flow start {} is not a top-level node of page {page}",
                    p.node_id
                )));
            }
        }
        self.get_mut(page)?.flow_starting_points = points;
        Ok(())
    }

    fn set_reactions(&mut self, node: NodeId, reactions: Vec<Reaction>) -> FrameshowResult<()> {
        self.get(node)?;
        for r in &reactions {
            let dest = r.destination();
            if self.page_of(dest) != Some(self.current) {
                return Err(FrameshowError::link_resolution(format!(
                    "destination {dest} is not on the current page {}",
                    self.current
                )));
            }
        }
        self.get_mut(node)?.reactions = reactions;
        Ok(())
    }

    fn close(&mut self, status: CloseStatus) {
        self.closed = Some(status);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/memory.rs"]
mod tests;
