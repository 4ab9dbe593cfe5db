use std::time::Instant;

use crate::config::Config;
use crate::error::PickError;
use crate::layout::LayoutRegions;
use crate::people::Person;
use crate::picker::PickerState;

/// How a confirmed selection is written on exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Title,
    Json,
}

/// Application state
pub struct App {
    pub picker: PickerState,
    pub layout_regions: LayoutRegions,
    pub max_visible: usize,
    pub should_quit: bool,
    /// Set when the user exits with Enter rather than Esc/Ctrl+C
    pub confirmed: bool,
    /// One-off message for the footer, e.g. a config warning
    pub notice: Option<String>,
}

impl App {
    /// Create a new App over `people`, with the input focused
    pub fn new(people: &'static [Person], config: &Config) -> Self {
        Self::with_picker(PickerState::with_config(people, &config.picker), config)
    }

    pub fn with_picker(mut picker: PickerState, config: &Config) -> Self {
        picker.handle_focus(Instant::now());

        Self {
            picker,
            layout_regions: LayoutRegions::new(),
            max_visible: config.picker.max_visible,
            should_quit: false,
            confirmed: false,
            notice: None,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text to print on exit, if the user confirmed a selection
    pub fn output(&self, format: OutputFormat) -> Result<Option<String>, PickError> {
        if !self.confirmed {
            return Ok(None);
        }

        let Some(person) = self.picker.selected() else {
            return Ok(None);
        };

        let text = match format {
            OutputFormat::Title => person.title(),
            OutputFormat::Json => serde_json::to_string_pretty(person)?,
        };
        Ok(Some(text))
    }
}
