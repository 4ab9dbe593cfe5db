use ratatui::layout::Rect;

/// A clickable part of the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Title,
    Input,
    /// Dropdown chrome: border, title, or the no-suggestions message
    Dropdown,
    /// A suggestion row, by index into the current suggestions
    Suggestion(usize),
}

/// Screen areas from the last render. `None` means not drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub title: Option<Rect>,
    pub input: Option<Rect>,
    pub dropdown: Option<Rect>,
    /// Inner area holding the suggestion rows
    pub suggestion_rows: Option<Rect>,
    /// Index of the suggestion drawn on the first row
    pub scroll_offset: usize,
    pub suggestion_count: usize,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
