//! Tests for widgets/popup

use super::*;

#[test]
fn test_popup_below_anchor_basic() {
    let anchor = Rect {
        x: 2,
        y: 3,
        width: 40,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, 10, 30);

    assert_eq!(popup.x, 2);
    assert_eq!(popup.y, 6);
    assert_eq!(popup.width, 40);
    assert_eq!(popup.height, 10);
}

#[test]
fn test_popup_below_anchor_clamped_to_bottom() {
    let anchor = Rect {
        x: 0,
        y: 3,
        width: 40,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, 10, 12);

    assert_eq!(popup.y, 6);
    assert_eq!(popup.height, 6);
}

#[test]
fn test_popup_below_anchor_no_room() {
    let anchor = Rect {
        x: 0,
        y: 3,
        width: 40,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, 10, 5);

    assert_eq!(popup.height, 0);
}
