use std::time::{Duration, Instant};

use futures::executor::block_on;
use tabledom::animation::Canceled;
use tabledom::{
    Animator, Document, Easing, Edges, Element, NodeId, PropertyTarget, TransitionConfig,
};

fn setup() -> (Document, NodeId) {
    let mut doc = Document::new();
    let node = doc.append(doc.root(), Element::block().height(0).border(Edges::all(1)));
    (doc, node)
}

fn linear(ms: u64) -> TransitionConfig {
    TransitionConfig::new(Duration::from_millis(ms), Easing::Linear)
}

// =============================================================================
// Easing
// =============================================================================

#[test]
fn test_easing_boundaries() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Swing,
    ] {
        assert!(easing.apply(0.0).abs() < 0.0001, "{:?} at 0", easing);
        assert!((easing.apply(1.0) - 1.0).abs() < 0.0001, "{:?} at 1", easing);
    }
}

#[test]
fn test_swing_is_symmetric_around_midpoint() {
    assert!((Easing::Swing.apply(0.5) - 0.5).abs() < 0.0001);
    assert!(Easing::Swing.apply(0.25) < 0.25);
}

// =============================================================================
// Interpolation
// =============================================================================

#[test]
fn test_values_interpolate_over_time() {
    let (mut doc, node) = setup();
    let mut animator = Animator::new();
    let t0 = Instant::now();

    let mut done = animator.animate(
        &mut doc,
        &[PropertyTarget::height(node, 10)],
        linear(100),
        t0,
    );
    assert!(animator.has_active_transitions());

    animator.update(&mut doc, t0 + Duration::from_millis(50));
    assert_eq!(doc.style(node).height, Some(5));
    assert!(!done.is_complete());

    animator.update(&mut doc, t0 + Duration::from_millis(100));
    assert_eq!(doc.style(node).height, Some(10));
    assert!(done.is_complete());
    assert!(!animator.has_active_transitions());
}

#[test]
fn test_border_bottom_transition() {
    let (mut doc, node) = setup();
    let mut animator = Animator::new();
    let t0 = Instant::now();

    animator.animate(
        &mut doc,
        &[PropertyTarget::border_bottom(node, 9)],
        linear(80),
        t0,
    );
    animator.update(&mut doc, t0 + Duration::from_millis(40));
    assert_eq!(doc.style(node).border.bottom, 5);
    animator.update(&mut doc, t0 + Duration::from_millis(200));
    assert_eq!(doc.style(node).border.bottom, 9);
}

#[test]
fn test_group_resolves_only_when_every_property_is_done() {
    let mut doc = Document::new();
    let a = doc.append(doc.root(), Element::block().height(0));
    let b = doc.append(doc.root(), Element::block());
    let mut animator = Animator::new();
    let t0 = Instant::now();

    let mut done = animator.animate(
        &mut doc,
        &[PropertyTarget::height(a, 4), PropertyTarget::border_bottom(b, 4)],
        linear(100),
        t0,
    );
    animator.update(&mut doc, t0 + Duration::from_millis(99));
    assert!(!done.is_complete());
    animator.update(&mut doc, t0 + Duration::from_millis(100));
    assert!(done.is_complete());
}

#[test]
fn test_retarget_continues_from_current_value() {
    let (mut doc, node) = setup();
    let mut animator = Animator::new();
    let t0 = Instant::now();

    animator.animate(&mut doc, &[PropertyTarget::height(node, 10)], linear(100), t0);
    let mid = t0 + Duration::from_millis(50);
    animator.animate(&mut doc, &[PropertyTarget::height(node, 0)], linear(100), mid);

    animator.update(&mut doc, mid);
    assert_eq!(doc.style(node).height, Some(5));
    animator.update(&mut doc, mid + Duration::from_millis(80));
    assert_eq!(doc.style(node).height, Some(1));
}

// =============================================================================
// Completion handles
// =============================================================================

#[test]
fn test_reduced_motion_completes_immediately() {
    let (mut doc, node) = setup();
    let mut animator = Animator::new();
    animator.set_reduced_motion(true);

    let mut done = animator.animate(
        &mut doc,
        &[PropertyTarget::height(node, 7)],
        linear(400),
        Instant::now(),
    );
    assert_eq!(doc.style(node).height, Some(7));
    assert!(done.is_complete());
    assert!(!animator.has_active_transitions());
}

#[test]
fn test_completion_is_a_future() {
    let (mut doc, node) = setup();
    let mut animator = Animator::new();
    let t0 = Instant::now();

    let done = animator.animate(&mut doc, &[PropertyTarget::height(node, 3)], linear(10), t0);
    animator.update(&mut doc, t0 + Duration::from_millis(10));
    assert_eq!(block_on(done), Ok(()));
}

#[test]
fn test_dropped_animator_never_completes() {
    let (mut doc, node) = setup();
    let mut animator = Animator::new();

    let mut done = animator.animate(
        &mut doc,
        &[PropertyTarget::height(node, 3)],
        linear(10),
        Instant::now(),
    );
    drop(animator);
    assert!(!done.is_complete());
    assert_eq!(block_on(done), Err(Canceled));
}

#[test]
fn test_empty_group_resolves_at_once() {
    let (mut doc, _) = setup();
    let mut animator = Animator::new();
    let mut done = animator.animate(&mut doc, &[], linear(100), Instant::now());
    assert!(done.is_complete());
}
