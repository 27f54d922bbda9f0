use super::*;

#[test]
fn reaction_json_uses_host_spelling() {
    let r = Reaction::navigate_on_click(
        NodeId(9),
        Some(Transition {
            kind: TransitionKind::SmartAnimate,
            easing: Easing::EaseOut,
            duration: 1.0,
        }),
    );
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["trigger"]["type"], "ON_CLICK");
    assert_eq!(v["action"]["type"], "NODE");
    assert_eq!(v["action"]["destination_id"], 9);
    assert_eq!(v["action"]["navigation"], "NAVIGATE");
    assert_eq!(v["action"]["preserve_scroll_position"], false);
    assert_eq!(v["action"]["transition"]["kind"]["type"], "SMART_ANIMATE");
    assert_eq!(v["action"]["transition"]["easing"], "EASE_OUT");
    assert_eq!(v["action"]["transition"]["duration"], 1.0);

    let back: Reaction = serde_json::from_value(v).unwrap();
    assert_eq!(back, r);
    assert_eq!(back.destination(), NodeId(9));
}

#[test]
fn directional_kind_carries_direction() {
    let k = TransitionKind::Push {
        direction: Direction::Right,
    };
    let v = serde_json::to_value(k).unwrap();
    assert_eq!(v["type"], "PUSH");
    assert_eq!(v["direction"], "RIGHT");
}
