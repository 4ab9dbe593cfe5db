use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app_state::App;
use super::mouse_click;
use crate::layout::region_at;

/// Longest wait for input when no timer is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

impl App {
    /// Wait for one event (or the next timer), handle it, then fire due timers
    pub fn handle_events(&mut self) -> io::Result<()> {
        let timeout = self
            .picker
            .next_deadline(Instant::now())
            .map_or(IDLE_POLL, |deadline| deadline.min(IDLE_POLL));

        if event::poll(timeout)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_event(key, Instant::now());
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse_event(mouse, Instant::now());
                }
                _ => {}
            }
        }

        self.picker.tick(Instant::now());
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.picker.is_dropdown_visible() {
                    self.picker.hide_dropdown();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Enter => {
                // Still selects while a blur is pending and the dropdown is open
                if self.picker.is_dropdown_visible() {
                    self.picker.select_highlighted();
                } else {
                    self.confirmed = true;
                    self.should_quit = true;
                }
            }
            KeyCode::Tab | KeyCode::BackTab => {
                if self.picker.is_focused() {
                    self.picker.handle_blur(now);
                } else {
                    self.picker.handle_focus(now);
                }
            }
            KeyCode::Down if self.picker.is_focused() => {
                if self.picker.is_dropdown_visible() {
                    self.picker.highlight_next();
                } else {
                    self.picker.show_dropdown();
                }
            }
            KeyCode::Up if self.picker.is_focused() => {
                if self.picker.is_dropdown_visible() {
                    self.picker.highlight_previous();
                }
            }
            _ => self.handle_input_key(key, now),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl+M / Ctrl+J would insert a newline into the single-line input
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j'))
        {
            return;
        }

        if !self.picker.is_focused() {
            if !matches!(key.code, KeyCode::Char(_)) {
                return;
            }
            self.picker.handle_focus(now);
        }

        self.picker.handle_key(key, now);
    }

    /// Handle mouse events; only left clicks do anything
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let region = region_at(&self.layout_regions, mouse.column, mouse.row);
            mouse_click::handle_click(self, region, now);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
