//! Tests for mouse click handling

use std::time::Instant;

use crate::layout::Region;
use crate::test_utils::test_helpers::{BLUR_DELAY, test_app};

use super::handle_click;

#[test]
fn test_click_suggestion_selects_person() {
    let mut app = test_app();

    handle_click(&mut app, Some(Region::Suggestion(2)), Instant::now());

    assert_eq!(app.picker.selected().map(|p| p.name), Some("Malika"));
    assert!(!app.picker.is_dropdown_visible());
}

#[test]
fn test_click_stale_suggestion_index_does_nothing() {
    let mut app = test_app();

    handle_click(&mut app, Some(Region::Suggestion(99)), Instant::now());

    assert!(app.picker.selected().is_none());
}

#[test]
fn test_click_outside_blurs() {
    let mut app = test_app();
    let now = Instant::now();

    handle_click(&mut app, None, now);

    assert!(!app.picker.is_focused());
    assert!(app.picker.is_dropdown_visible());
    app.picker.tick(now + BLUR_DELAY);
    assert!(!app.picker.is_dropdown_visible());
}

#[test]
fn test_click_title_blurs() {
    let mut app = test_app();

    handle_click(&mut app, Some(Region::Title), Instant::now());

    assert!(!app.picker.is_focused());
}

#[test]
fn test_click_input_focuses() {
    let mut app = test_app();
    let now = Instant::now();
    handle_click(&mut app, None, now);
    app.picker.tick(now + BLUR_DELAY);

    handle_click(&mut app, Some(Region::Input), now + BLUR_DELAY);

    assert!(app.picker.is_focused());
    assert!(app.picker.is_dropdown_visible());
}

#[test]
fn test_click_dropdown_chrome_keeps_focus() {
    let mut app = test_app();

    handle_click(&mut app, Some(Region::Dropdown), Instant::now());

    assert!(app.picker.is_focused());
    assert!(app.picker.is_dropdown_visible());
}
