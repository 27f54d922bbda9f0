use super::*;

#[test]
fn defaults_match_slideshow_constants() {
    let o = SlideshowOpts::default();
    assert_eq!(o.order, SortPriority::Y);
    assert_eq!(o.squeeze.width_divisor, 12.0);
    assert_eq!(o.squeeze.gap, 20.0);
    assert_eq!(o.entry_label, "Start Slideshow");
    assert_eq!(o.transition.kind, "smart_animate");
    assert_eq!(o.transition.easing, Easing::EaseOut);
    assert_eq!(o.transition.duration, 1.0);
    o.validate().unwrap();
}

#[test]
fn empty_json_is_default() {
    let o = SlideshowOpts::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(o, SlideshowOpts::default());
}

#[test]
fn partial_json_overrides_fields() {
    let o = SlideshowOpts::from_reader(
        r#"{"order": "x", "squeeze": {"gap": 8}, "transition": {"kind": "push", "easing": "LINEAR", "params": {"direction": "right"}}}"#
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(o.order, SortPriority::X);
    assert_eq!(o.squeeze.gap, 8.0);
    assert_eq!(o.squeeze.width_divisor, 12.0);
    assert_eq!(o.transition.easing, Easing::Linear);
    assert_eq!(o.transition.duration, 1.0);
    o.validate().unwrap();
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(SlideshowOpts::from_reader(r#"{"speed": 3}"#.as_bytes()).is_err());
}

#[test]
fn validate_rejects_degenerate_values() {
    let mut o = SlideshowOpts::default();
    o.squeeze.width_divisor = 0.0;
    assert!(o.validate().is_err());

    let mut o = SlideshowOpts::default();
    o.entry_label = " ".to_string();
    assert!(o.validate().is_err());

    let mut o = SlideshowOpts::default();
    o.page_name = Some(String::new());
    assert!(o.validate().is_err());

    let mut o = SlideshowOpts::default();
    o.transition.kind = "wobble".to_string();
    assert!(o.validate().is_err());
}
