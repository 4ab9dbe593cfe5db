use ratatui::layout::{Position, Rect};

use super::{LayoutRegions, Region};

fn contains(rect: Option<Rect>, position: Position) -> bool {
    rect.is_some_and(|r| r.contains(position))
}

/// Which region, if any, is under the given cell
pub fn region_at(regions: &LayoutRegions, x: u16, y: u16) -> Option<Region> {
    let position = Position::new(x, y);

    // Dropdown overlaps everything below the input, check it first
    if let Some(rows) = regions.suggestion_rows {
        if rows.contains(position) {
            let index = regions.scroll_offset + (y - rows.y) as usize;
            if index < regions.suggestion_count {
                return Some(Region::Suggestion(index));
            }
            return Some(Region::Dropdown);
        }
    }

    if contains(regions.dropdown, position) {
        return Some(Region::Dropdown);
    }

    if contains(regions.input, position) {
        return Some(Region::Input);
    }

    if contains(regions.title, position) {
        return Some(Region::Title);
    }

    None
}
