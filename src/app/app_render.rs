use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::app_state::App;
use crate::picker::picker_render::{self, INPUT_HEIGHT, TITLE_HEIGHT};

const KEY_HINTS: &[&str] = &[
    "↑/↓ move",
    "Enter select",
    "Tab focus",
    "Esc close",
    "Ctrl+C quit",
];
const HINT_SEPARATOR: &str = "  ";

/// Key hints that fit in `width` columns, dropping whole hints from the right
fn fit_key_hints(width: u16) -> String {
    let width = width as usize;
    let mut line = String::new();

    for hint in KEY_HINTS {
        let candidate = format!("{}{}{}", line, HINT_SEPARATOR, hint);
        if candidate.width() > width {
            break;
        }
        line = candidate;
    }

    line
}

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),    // Room for the dropdown
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

        let title_area = layout[0];
        let input_area = layout[1];
        let footer_area = layout[3];

        self.layout_regions.clear();
        self.layout_regions.title = Some(title_area);
        self.layout_regions.input = Some(input_area);

        picker_render::render_title(&self.picker, frame, title_area);
        picker_render::render_input(&mut self.picker, frame, input_area);
        self.render_footer(frame, footer_area);

        // Dropdown last so it draws over the empty area
        picker_render::render_dropdown(
            &self.picker,
            frame,
            input_area,
            footer_area.y,
            self.max_visible,
            &mut self.layout_regions,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let line = match &self.notice {
            Some(notice) => Line::from(Span::styled(
                format!(" {}", notice),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(
                fit_key_hints(area.width),
                Style::default().fg(Color::DarkGray),
            )),
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
