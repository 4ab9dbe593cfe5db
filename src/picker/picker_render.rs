//! Picker rendering
//!
//! Draws the title, the input box and the suggestions dropdown, recording
//! where each landed for mouse hit-testing.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::{DropdownContent, NO_SUGGESTIONS_MESSAGE, PickerState};
use crate::layout::LayoutRegions;
use crate::widgets::popup;

pub const TITLE_HEIGHT: u16 = 3;
pub const INPUT_HEIGHT: u16 = 3;
const DROPDOWN_BORDER_HEIGHT: u16 = 2;
const SELECTED_PREFIX: &str = "► ";
const NORMAL_PREFIX: &str = "  ";

/// First row to draw so that `highlighted` stays within `max_visible` rows
pub fn scroll_offset(highlighted: usize, max_visible: usize) -> usize {
    if max_visible == 0 {
        return highlighted;
    }
    (highlighted + 1).saturating_sub(max_visible)
}

/// Render the selected-person heading
pub fn render_title(picker: &PickerState, frame: &mut Frame, area: Rect) {
    let style = if picker.selected().is_some() {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let title = Paragraph::new(Line::from(Span::styled(picker.title(), style))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(title, area);
}

/// Render the input box with focus-aware border
pub fn render_input(picker: &mut PickerState, frame: &mut Frame, area: Rect) {
    let border_color = if picker.is_focused() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let textarea = picker.textarea_mut();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(&*textarea, area);
}

/// Render the dropdown under `input_area`, no lower than `bottom`
pub fn render_dropdown(
    picker: &PickerState,
    frame: &mut Frame,
    input_area: Rect,
    bottom: u16,
    max_visible: usize,
    regions: &mut LayoutRegions,
) {
    let suggestions = match picker.dropdown_content() {
        DropdownContent::Hidden => return,
        DropdownContent::NoSuggestions => {
            render_no_suggestions(picker, frame, input_area, bottom, regions);
            return;
        }
        DropdownContent::Suggestions(suggestions) => suggestions,
    };

    let visible_count = suggestions.len().min(max_visible.max(1));
    let popup_height = visible_count as u16 + DROPDOWN_BORDER_HEIGHT;
    let popup_area = popup::popup_below_anchor(input_area, popup_height, bottom);
    if popup_area.height == 0 {
        return;
    }

    // Too short for a border: give every row to suggestions
    let bordered = popup_area.height > DROPDOWN_BORDER_HEIGHT;
    let rows = if bordered {
        popup_area.height - DROPDOWN_BORDER_HEIGHT
    } else {
        popup_area.height
    };
    let highlighted = picker.highlighted_index();
    let offset = scroll_offset(highlighted, rows as usize);
    let max_name_width = (popup_area.width as usize).saturating_sub(2 + SELECTED_PREFIX.width());

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows as usize)
        .map(|(i, person)| {
            let name = truncate_to_width(person.name, max_name_width);
            let line = if i == highlighted {
                Line::from(Span::styled(
                    format!("{}{}", SELECTED_PREFIX, name),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("{}{}", NORMAL_PREFIX, name),
                    Style::default().fg(Color::LightBlue).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items);
    let inner = if bordered {
        let block = dropdown_block(format!(
            " Suggestions ({}/{}) ",
            suggestions.len(),
            picker.total_count()
        ));
        let inner = block.inner(popup_area);
        frame.render_widget(list.block(block), popup_area);
        inner
    } else {
        frame.render_widget(list.style(Style::default().bg(Color::Black)), popup_area);
        popup_area
    };

    regions.dropdown = Some(popup_area);
    regions.suggestion_rows = Some(inner);
    regions.scroll_offset = offset;
    regions.suggestion_count = suggestions.len();
}

fn render_no_suggestions(
    picker: &PickerState,
    frame: &mut Frame,
    input_area: Rect,
    bottom: u16,
    regions: &mut LayoutRegions,
) {
    let popup_area = popup::popup_below_anchor(input_area, 1 + DROPDOWN_BORDER_HEIGHT, bottom);
    if popup_area.height == 0 {
        return;
    }

    popup::clear_area(frame, popup_area);

    let message = Paragraph::new(Line::from(Span::styled(
        NO_SUGGESTIONS_MESSAGE,
        Style::default().fg(Color::Red),
    )))
    .alignment(Alignment::Center);

    // The message needs one row inside the border; drop the border before the message
    let message = if popup_area.height > DROPDOWN_BORDER_HEIGHT {
        message.block(
            dropdown_block(format!(" Suggestions (0/{}) ", picker.total_count()))
                .border_style(Style::default().fg(Color::Red)),
        )
    } else {
        message.style(Style::default().bg(Color::Black))
    };

    frame.render_widget(message, popup_area);
    regions.dropdown = Some(popup_area);
}

fn dropdown_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black))
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "picker_render_tests.rs"]
mod picker_render_tests;
