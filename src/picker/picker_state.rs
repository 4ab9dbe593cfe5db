use std::time::{Duration, Instant};

use ratatui::crossterm::event::KeyEvent;
use ratatui::style::{Color, Modifier, Style};
use tui_textarea::TextArea;

use super::{NO_SELECTION_TITLE, PLACEHOLDER};
use crate::config::PickerConfig;
use crate::debounce::Debouncer;
use crate::filter::filter_people;
use crate::people::Person;

/// Invoked with the new selection, or `None` when an edit clears it
pub type SelectionCallback = Box<dyn FnMut(Option<&Person>)>;

/// What the dropdown shows right now
#[derive(Debug, PartialEq, Eq)]
pub enum DropdownContent<'a> {
    Hidden,
    Suggestions(Vec<&'a Person>),
    NoSuggestions,
}

/// Creates a TextArea configured for single-line name input.
fn create_input_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    textarea
}

/// Widget state, created when the picker mounts and dropped with it
pub struct PickerState {
    people: &'static [Person],
    /// Raw text as typed
    textarea: TextArea<'static>,
    /// Query the suggestions are currently filtered by
    applied_query: String,
    debouncer: Debouncer<String>,
    blur_delay: Duration,
    /// When set, the dropdown closes once this instant passes
    blur_deadline: Option<Instant>,
    selected: Option<&'static Person>,
    dropdown_visible: bool,
    focused: bool,
    /// Keyboard highlight within the current suggestions
    highlighted: usize,
    on_selected: Option<SelectionCallback>,
}

impl PickerState {
    pub fn new(people: &'static [Person]) -> Self {
        Self::with_config(people, &PickerConfig::default())
    }

    pub fn with_config(people: &'static [Person], config: &PickerConfig) -> Self {
        Self {
            people,
            textarea: create_input_textarea(),
            applied_query: String::new(),
            debouncer: Debouncer::new(config.debounce()),
            blur_delay: config.blur_delay(),
            blur_deadline: None,
            selected: None,
            dropdown_visible: false,
            focused: false,
            highlighted: 0,
            on_selected: None,
        }
    }

    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    pub fn on_selected(mut self, callback: SelectionCallback) -> Self {
        self.on_selected = Some(callback);
        self
    }

    /// Current raw input text
    pub fn query(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn applied_query(&self) -> &str {
        &self.applied_query
    }

    pub fn selected(&self) -> Option<&'static Person> {
        self.selected
    }

    pub fn is_dropdown_visible(&self) -> bool {
        self.dropdown_visible
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    pub fn total_count(&self) -> usize {
        self.people.len()
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    /// Heading text: the selected person, or a placeholder
    pub fn title(&self) -> String {
        match self.selected {
            Some(person) => person.title(),
            None => NO_SELECTION_TITLE.to_string(),
        }
    }

    /// People matching the applied query, in dataset order
    pub fn suggestions(&self) -> Vec<&'static Person> {
        filter_people(self.people, &self.applied_query)
    }

    pub fn dropdown_content(&self) -> DropdownContent<'static> {
        if !self.dropdown_visible {
            return DropdownContent::Hidden;
        }

        let suggestions = self.suggestions();
        if suggestions.is_empty() {
            DropdownContent::NoSuggestions
        } else {
            DropdownContent::Suggestions(suggestions)
        }
    }

    /// Feed a key to the input, treating any resulting text change as an edit
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let before = self.query().to_string();
        self.textarea.input(key);
        let after = self.query().to_string();

        if after != before {
            self.apply_edit(after, now);
        }
    }

    /// Replace the input text as if the user had typed it
    pub fn handle_input_change(&mut self, text: &str, now: Instant) {
        if text == self.query() {
            return;
        }

        self.replace_text(text);
        self.apply_edit(text.to_string(), now);
    }

    pub fn handle_focus(&mut self, _now: Instant) {
        self.focused = true;
        self.blur_deadline = None;
        self.dropdown_visible = true;

        if self.query().is_empty() {
            self.set_applied_query(String::new());
        }
    }

    /// Lose focus; the dropdown closes after the blur delay so a click
    /// landing in the meantime still selects
    pub fn handle_blur(&mut self, now: Instant) {
        self.focused = false;
        self.blur_deadline = Some(now + self.blur_delay);
    }

    /// Fire due timers. Returns true when visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(query) = self.debouncer.poll(now) {
            log::debug!("Applying query {:?}", query);
            changed |= self.set_applied_query(query);
        }

        if let Some(deadline) = self.blur_deadline {
            if now >= deadline {
                self.blur_deadline = None;
                changed |= self.dropdown_visible;
                self.dropdown_visible = false;
            }
        }

        changed
    }

    /// Earliest instant at which `tick` has work to do
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        let debounce = self.debouncer.remaining(now);
        let blur = self
            .blur_deadline
            .map(|deadline| deadline.saturating_duration_since(now));

        match (debounce, blur) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn show_dropdown(&mut self) {
        self.dropdown_visible = true;
    }

    pub fn hide_dropdown(&mut self) {
        self.dropdown_visible = false;
    }

    pub fn select(&mut self, person: &'static Person) {
        log::debug!("Selected {}", person.name);
        self.replace_text(person.name);
        self.selected = Some(person);
        self.dropdown_visible = false;
        self.notify(Some(person));
    }

    /// Select the suggestion at `index`. Returns false if there is none.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.suggestions().get(index).copied() {
            Some(person) => {
                self.select(person);
                true
            }
            None => false,
        }
    }

    pub fn select_highlighted(&mut self) -> bool {
        self.select_index(self.highlighted)
    }

    pub fn highlight_next(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            return;
        }
        self.highlighted = (self.highlighted + 1) % count;
    }

    pub fn highlight_previous(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            return;
        }
        self.highlighted = if self.highlighted == 0 {
            count - 1
        } else {
            self.highlighted - 1
        };
    }

    fn apply_edit(&mut self, text: String, now: Instant) {
        if self.selected.take().is_some() {
            log::debug!("Selection cleared by edit");
        }
        self.notify(None);
        self.debouncer.schedule(text, now);
        self.dropdown_visible = true;
    }

    fn set_applied_query(&mut self, query: String) -> bool {
        if query == self.applied_query {
            return false;
        }
        self.applied_query = query;
        self.highlighted = 0;
        true
    }

    fn replace_text(&mut self, text: &str) {
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
    }

    fn notify(&mut self, person: Option<&Person>) {
        if let Some(callback) = self.on_selected.as_mut() {
            callback(person);
        }
    }
}

#[cfg(test)]
#[path = "picker_state_tests.rs"]
mod picker_state_tests;
