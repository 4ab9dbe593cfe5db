use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly under `anchor`, as wide as the anchor, without
/// running past `bottom` (exclusive)
pub fn popup_below_anchor(anchor: Rect, height: u16, bottom: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let available = bottom.saturating_sub(popup_y);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: anchor.width,
        height: height.min(available),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
