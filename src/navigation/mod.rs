//! Forward navigation chain between composed slides.
//!
//! Slide `i` gets a single click reaction to slide `i + 1`; the last slide has none. The first
//! slide is registered as the page's only flow starting point.

use crate::{
    config::SlideshowOpts,
    foundation::core::NodeId,
    foundation::error::FrameshowResult,
    host::Host,
};

/// Reaction, trigger, action and transition types.
pub mod model;
/// Transition spec parsing.
pub mod transitions;

use model::{FlowStartingPoint, Reaction};
use transitions::parse_transition;

/// One forward edge.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationEdge {
    /// Source slide.
    pub from: NodeId,
    /// Destination slide.
    pub to: NodeId,
    /// Reaction attached to `from`.
    pub reaction: Reaction,
}

/// Singly linked chain of slides with one entry point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationGraph {
    /// Slides in chain order.
    pub nodes: Vec<NodeId>,
    /// Entry point at the first slide; `None` for an empty chain.
    pub entry: Option<FlowStartingPoint>,
    /// Edges `i -> i + 1`.
    pub edges: Vec<NavigationEdge>,
}

impl NavigationGraph {
    /// Node reached by clicking `node`, if any.
    pub fn successor(&self, node: NodeId) -> Option<NodeId> {
        self.edges.iter().find(|e| e.from == node).map(|e| e.to)
    }

    /// Nodes in visit order, starting from the entry point.
    pub fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut cur = self.entry.as_ref().map(|e| e.node_id);
        while let Some(node) = cur {
            if out.len() > self.nodes.len() {
                break;
            }
            out.push(node);
            cur = self.successor(node);
        }
        out
    }

    /// `true` when the chain has no slides.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build the chain for `nodes` without touching the host.
pub fn plan_links(nodes: &[NodeId], opts: &SlideshowOpts) -> FrameshowResult<NavigationGraph> {
    let transition = parse_transition(&opts.transition)?;

    let entry = nodes.first().map(|first| FlowStartingPoint {
        node_id: *first,
        name: opts.entry_label.clone(),
    });
    let edges = nodes
        .windows(2)
        .map(|pair| NavigationEdge {
            from: pair[0],
            to: pair[1],
            reaction: Reaction::navigate_on_click(pair[1], transition.clone()),
        })
        .collect();

    Ok(NavigationGraph {
        nodes: nodes.to_vec(),
        entry,
        edges,
    })
}

/// Link `nodes` on `page`: register the entry point and attach each forward reaction.
///
/// `page` must already be the host's current page so reaction destinations resolve.
#[tracing::instrument(skip(host, nodes, opts), fields(count = nodes.len()))]
pub fn link<H: Host + ?Sized>(
    host: &mut H,
    page: NodeId,
    nodes: &[NodeId],
    opts: &SlideshowOpts,
) -> FrameshowResult<NavigationGraph> {
    let graph = plan_links(nodes, opts)?;

    if let Some(entry) = &graph.entry {
        host.set_flow_starting_points(page, vec![entry.clone()])?;
    }
    for edge in &graph.edges {
        host.set_reactions(edge.from, vec![edge.reaction.clone()])?;
        tracing::debug!(from = %edge.from, to = %edge.to, "linked slide");
    }
    Ok(graph)
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/link.rs"]
mod tests;
