//! Tests for region hit testing

use ratatui::layout::Rect;

use super::{LayoutRegions, Region, region_at};

fn sample_regions() -> LayoutRegions {
    LayoutRegions {
        title: Some(Rect::new(0, 0, 40, 3)),
        input: Some(Rect::new(0, 3, 40, 3)),
        dropdown: Some(Rect::new(0, 6, 40, 6)),
        suggestion_rows: Some(Rect::new(1, 7, 38, 4)),
        scroll_offset: 0,
        suggestion_count: 3,
    }
}

#[test]
fn test_empty_regions_hit_nothing() {
    let regions = LayoutRegions::new();
    assert_eq!(region_at(&regions, 5, 5), None);
}

#[test]
fn test_title_and_input() {
    let regions = sample_regions();
    assert_eq!(region_at(&regions, 5, 1), Some(Region::Title));
    assert_eq!(region_at(&regions, 5, 4), Some(Region::Input));
}

#[test]
fn test_suggestion_rows_map_to_indices() {
    let regions = sample_regions();
    assert_eq!(region_at(&regions, 5, 7), Some(Region::Suggestion(0)));
    assert_eq!(region_at(&regions, 5, 9), Some(Region::Suggestion(2)));
}

#[test]
fn test_row_past_last_suggestion_is_dropdown() {
    let regions = sample_regions();
    assert_eq!(region_at(&regions, 5, 10), Some(Region::Dropdown));
}

#[test]
fn test_dropdown_border_is_dropdown() {
    let regions = sample_regions();
    assert_eq!(region_at(&regions, 0, 8), Some(Region::Dropdown));
    assert_eq!(region_at(&regions, 5, 11), Some(Region::Dropdown));
}

#[test]
fn test_scroll_offset_is_added() {
    let mut regions = sample_regions();
    regions.scroll_offset = 5;
    regions.suggestion_count = 10;
    assert_eq!(region_at(&regions, 5, 8), Some(Region::Suggestion(6)));
}

#[test]
fn test_outside_everything() {
    let regions = sample_regions();
    assert_eq!(region_at(&regions, 5, 20), None);
    assert_eq!(region_at(&regions, 45, 1), None);
}

#[test]
fn test_clear_resets_regions() {
    let mut regions = sample_regions();
    regions.clear();
    assert_eq!(regions, LayoutRegions::default());
}
