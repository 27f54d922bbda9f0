use std::sync::Arc;

use super::*;
use crate::foundation::core::NodeId;

fn slides(n: usize) -> Vec<Slide> {
    (0..n)
        .map(|i| Slide {
            source: NodeId(i as u64),
            x: 0.0,
            y: 100.0 * i as f64,
            width: 100.0,
            height: 50.0,
            bytes: Arc::new(vec![i as u8]),
        })
        .collect()
}

fn roles(plan: &SlidePlan) -> Vec<PreviewRole> {
    plan.previews.iter().map(|p| p.role).collect()
}

#[test]
fn rule_table_order_is_next_current_previous() {
    let offsets: Vec<isize> = PREVIEW_RULES.iter().map(|r| r.offset).collect();
    assert_eq!(offsets, vec![1, 0, -1]);
}

#[test]
fn interior_slide_has_three_previews() {
    let s = slides(3);
    let plan = plan_slide(1, &s, &SqueezeOpts::default()).unwrap();
    assert_eq!(plan.name, "frame 1");
    assert!(plan.clips_content);
    assert_eq!(plan.bounds, Rect::new(0.0, 100.0, 100.0, 150.0));
    assert_eq!(
        roles(&plan),
        vec![PreviewRole::Next, PreviewRole::Current, PreviewRole::Previous]
    );
    let names: Vec<&str> = plan.previews.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["rect 2", "rect 1", "rect 0"]);
}

#[test]
fn previous_preview_is_squeezed_off_the_left_edge() {
    let s = slides(3);
    let plan = plan_slide(1, &s, &SqueezeOpts::default()).unwrap();
    let prev = &plan.previews[2];
    let w = 100.0 / 12.0;
    assert!((prev.bounds.width() - w).abs() < 1e-9);
    assert!((prev.bounds.x0 - -(w + 20.0)).abs() < 1e-9);
    assert!((prev.bounds.x0 - -28.333_333_333).abs() < 1e-6);
    assert_eq!(prev.bounds.y0, 0.0);
    assert_eq!(prev.bounds.height(), 50.0);
}

#[test]
fn next_and_current_fill_the_slide_at_origin() {
    let s = slides(3);
    let plan = plan_slide(1, &s, &SqueezeOpts::default()).unwrap();
    for p in &plan.previews[..2] {
        assert_eq!(p.bounds, Rect::new(0.0, 0.0, 100.0, 50.0));
    }
}

#[test]
fn first_has_no_previous_and_last_has_no_next() {
    let s = slides(3);
    let squeeze = SqueezeOpts::default();
    let first = plan_slide(0, &s, &squeeze).unwrap();
    let last = plan_slide(2, &s, &squeeze).unwrap();
    assert_eq!(roles(&first), vec![PreviewRole::Next, PreviewRole::Current]);
    assert_eq!(roles(&last), vec![PreviewRole::Current, PreviewRole::Previous]);
}

#[test]
fn single_slide_has_only_current() {
    let s = slides(1);
    let plan = plan_slide(0, &s, &SqueezeOpts::default()).unwrap();
    assert_eq!(roles(&plan), vec![PreviewRole::Current]);
    assert_eq!(plan.previews[0].source_index, 0);
}

#[test]
fn previews_use_the_neighbour_size() {
    let mut s = slides(2);
    s[1].width = 240.0;
    s[1].height = 120.0;
    let squeeze = SqueezeOpts {
        width_divisor: 4.0,
        gap: 5.0,
    };
    let first = plan_slide(0, &s, &squeeze).unwrap();
    assert_eq!(first.previews[0].bounds, Rect::new(0.0, 0.0, 240.0, 120.0));
    let second = plan_slide(1, &s, &squeeze).unwrap();
    assert_eq!(second.previews[1].bounds, Rect::new(-30.0, 0.0, -5.0, 50.0));
}

#[test]
fn plan_all_keeps_input_order() {
    let s = slides(4);
    let plans = plan_all(&s, &SqueezeOpts::default());
    let idx: Vec<usize> = plans.iter().map(|p| p.index).collect();
    assert_eq!(idx, vec![0, 1, 2, 3]);
    assert!(plan_slide(4, &s, &SqueezeOpts::default()).is_none());
    assert!(plan_all(&[], &SqueezeOpts::default()).is_empty());
}
