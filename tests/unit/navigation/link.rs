use super::*;
use crate::host::memory::MemoryHost;
use crate::navigation::model::{Action, Easing, Navigation, TransitionKind, Trigger};

fn ids(n: u64) -> Vec<NodeId> {
    (0..n).map(|i| NodeId(50 + i)).collect()
}

#[test]
fn chain_has_n_minus_one_edges_and_one_entry() {
    let opts = SlideshowOpts::default();
    for n in 0..6 {
        let nodes = ids(n);
        let g = plan_links(&nodes, &opts).unwrap();
        assert_eq!(g.edges.len(), nodes.len().saturating_sub(1));
        assert_eq!(g.entry.is_some(), n >= 1);
        assert_eq!(g.walk(), nodes);
    }
}

#[test]
fn entry_is_first_slide_with_label() {
    let g = plan_links(&ids(3), &SlideshowOpts::default()).unwrap();
    let entry = g.entry.unwrap();
    assert_eq!(entry.node_id, NodeId(50));
    assert_eq!(entry.name, "Start Slideshow");
}

#[test]
fn edges_are_click_navigate_smart_animate() {
    let g = plan_links(&ids(2), &SlideshowOpts::default()).unwrap();
    let edge = &g.edges[0];
    assert_eq!((edge.from, edge.to), (NodeId(50), NodeId(51)));
    assert_eq!(edge.reaction.trigger, Trigger::OnClick);
    let Action::Node {
        destination_id,
        navigation,
        preserve_scroll_position,
        transition,
    } = &edge.reaction.action;
    assert_eq!(*destination_id, NodeId(51));
    assert_eq!(*navigation, Navigation::Navigate);
    assert!(!preserve_scroll_position);
    let t = transition.as_ref().unwrap();
    assert_eq!(t.kind, TransitionKind::SmartAnimate);
    assert_eq!(t.easing, Easing::EaseOut);
    assert_eq!(t.duration, 1.0);
}

#[test]
fn last_slide_is_terminal() {
    let nodes = ids(3);
    let g = plan_links(&nodes, &SlideshowOpts::default()).unwrap();
    assert_eq!(g.successor(nodes[0]), Some(nodes[1]));
    assert_eq!(g.successor(nodes[1]), Some(nodes[2]));
    assert_eq!(g.successor(nodes[2]), None);
}

#[test]
fn link_writes_reactions_and_entry_on_current_page() {
    let mut host = MemoryHost::new();
    let page = host.create_page().unwrap();
    host.set_current_page(page).unwrap();
    let mut nodes = Vec::new();
    for _ in 0..3 {
        let f = host.create_frame().unwrap();
        host.append_child(page, f).unwrap();
        nodes.push(f);
    }

    let g = link(&mut host, page, &nodes, &SlideshowOpts::default()).unwrap();
    assert_eq!(g.edges.len(), 2);
    assert_eq!(host.node(nodes[0]).unwrap().reactions.len(), 1);
    assert_eq!(host.node(nodes[1]).unwrap().reactions.len(), 1);
    assert!(host.node(nodes[2]).unwrap().reactions.is_empty());
    let starts = &host.node(page).unwrap().flow_starting_points;
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].node_id, nodes[0]);
}

#[test]
fn link_fails_when_page_is_not_current() {
    let mut host = MemoryHost::new();
    let page = host.create_page().unwrap();
    let a = host.create_frame().unwrap();
    let b = host.create_frame().unwrap();
    host.append_child(page, a).unwrap();
    host.append_child(page, b).unwrap();

    let err = link(&mut host, page, &[a, b], &SlideshowOpts::default()).unwrap_err();
    assert!(matches!(err, crate::FrameshowError::LinkResolution(_)));
}

#[test]
fn instant_transition_links_without_animation() {
    let mut opts = SlideshowOpts::default();
    opts.transition.kind = "instant".to_string();
    let g = plan_links(&ids(2), &opts).unwrap();
    let Action::Node { transition, .. } = &g.edges[0].reaction.action;
    assert!(transition.is_none());
}
