//! Mouse click handling
//!
//! Clicking a suggestion selects it, clicking the input focuses it, and
//! clicking anywhere else blurs the input.

use std::time::Instant;

use super::app_state::App;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, now: Instant) {
    match region {
        Some(Region::Suggestion(index)) => {
            app.picker.select_index(index);
        }
        Some(Region::Input) => {
            if !app.picker.is_focused() {
                app.picker.handle_focus(now);
            }
        }
        // Clicks on dropdown chrome keep the dropdown open
        Some(Region::Dropdown) => {}
        Some(Region::Title) | None => {
            if app.picker.is_focused() {
                app.picker.handle_blur(now);
            }
        }
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
