//! End-to-end walks through a page.

mod common;

use std::time::{Duration, Instant};

use compat_table::{CompatTable, IdCounter, LogSink, PanelState, WidgetConfig};
use common::{Page, compat_table};
use futures::executor::block_on;
use tabledom::{Animator, Document, Event, Key, PropertyTarget, TransitionConfig};

#[test]
fn test_click_switch_escape_and_plain_cell() {
    let mut page = Page::new();
    let (c1, c2) = (page.index("c1"), page.index("c2"));

    // Click C1: only C1 opens.
    page.click("c1");
    page.settle();
    assert_eq!(page.widget.state(), PanelState::Open(c1));
    assert!(page.is_active("c1"));
    assert!(!page.is_active("c2"));
    assert!(!page.doc.has_class(page.node("c3"), "active"));

    // Click C2: C1 closes first, then C2 opens.
    page.click("c2");
    assert_eq!(
        page.widget.state(),
        PanelState::Closing {
            cell: c1,
            pending: Some(c2)
        }
    );
    page.advance(400);
    assert_eq!(page.widget.state(), PanelState::Open(c2));
    assert!(page.widget.is_animating());
    assert!(!page.is_active("c1"));
    page.advance(400);
    assert!(!page.widget.is_animating());

    // Escape on C2: back to idle.
    page.press("c2", Key::Escape);
    page.settle();
    assert_eq!(page.widget.state(), PanelState::Idle);
    assert_eq!(page.active_count(), 0);

    // C3 has no history: nothing happens.
    let flags = page.click("c3");
    assert!(!flags.is_handled());
    assert_eq!(page.widget.state(), PanelState::Idle);
    assert!(!page.widget.is_animating());
}

#[test]
fn test_keyboard_only_round_trip() {
    let mut page = Page::new();
    let c4 = page.node("c4");
    page.doc.focus(c4);

    page.press("c4", Key::Enter);
    page.settle();
    assert_eq!(page.doc.attr(c4, "aria-expanded"), Some("true"));

    // Tab into the panel, then dismiss from the close control.
    let close = page.close_control("c4");
    page.doc.focus(close);
    page.send(Event::key(close, Key::SPACE));
    page.settle();

    assert_eq!(page.doc.attr(c4, "aria-expanded"), Some("false"));
    assert_eq!(page.doc.focused(), Some(c4));
}

#[test]
fn test_two_tables_are_independent() {
    let mut doc = Document::new();
    let first = doc.append(doc.root(), compat_table("first"));
    let second = doc.append(doc.root(), compat_table("second"));
    let ids = IdCounter::new();
    let mut animator = Animator::new();
    let now = Instant::now();

    let mut a = CompatTable::activate_with(
        &mut doc,
        first,
        WidgetConfig::default(),
        &ids,
        Box::new(LogSink),
    )
    .unwrap();
    let mut b = CompatTable::activate_with(
        &mut doc,
        second,
        WidgetConfig::default(),
        &ids,
        Box::new(LogSink),
    )
    .unwrap();

    let a_cell = a.cells()[0].node;
    let b_cell = b.cells()[0].node;
    a.handle_event(&mut doc, &mut animator, &Event::Click { target: a_cell }, now);
    b.handle_event(&mut doc, &mut animator, &Event::Click { target: b_cell }, now);

    let later = now + Duration::from_secs(1);
    a.tick(&mut doc, &mut animator, later);
    b.tick(&mut doc, &mut animator, later);

    // One open panel per table, not per page.
    assert!(a.open_cell().is_some());
    assert!(b.open_cell().is_some());
    assert_ne!(a.cells()[0].accessible_id, b.cells()[0].accessible_id);

    // Events from the other table are not routed.
    let flags = a.handle_event(&mut doc, &mut animator, &Event::Click { target: b_cell }, later);
    assert!(!flags.is_handled());
}

#[test]
fn test_stuck_animation_keeps_the_lock() {
    let mut page = Page::new();
    page.click("c1");
    // The animation clock never advances: every later request is dropped.
    page.advance(0);
    page.click("c1");
    page.click("c2");
    assert!(page.widget.is_animating());
    assert_eq!(page.widget.state(), PanelState::Open(page.index("c1")));
}

#[test]
fn test_completion_can_be_awaited() {
    let mut doc = Document::new();
    let table = doc.append(doc.root(), compat_table("t"));
    CompatTable::activate_with(&mut doc, table, WidgetConfig::default(), &IdCounter::new(), Box::new(LogSink))
        .unwrap();
    let cell = doc.find_by_dom_id("c1").unwrap();

    let mut animator = Animator::new();
    let t0 = Instant::now();
    let done = animator.animate(
        &mut doc,
        &[PropertyTarget::border_bottom(cell, 5)],
        TransitionConfig::new(Duration::from_millis(100), tabledom::Easing::Linear),
        t0,
    );
    animator.update(&mut doc, t0 + Duration::from_millis(100));
    assert_eq!(block_on(done), Ok(()));
    assert_eq!(doc.style(cell).border.bottom, 5);
}
