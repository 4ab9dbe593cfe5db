// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_BLUR_DELAY_MS: u64 = 200;
pub const DEFAULT_MAX_VISIBLE: usize = 8;

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_blur_delay_ms() -> u64 {
    DEFAULT_BLUR_DELAY_MS
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

/// Picker configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickerConfig {
    /// Quiet period before typed text is applied to the filter
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// How long the dropdown stays open after the input loses focus
    #[serde(default = "default_blur_delay_ms")]
    pub blur_delay_ms: u64,
    /// Rows shown in the dropdown before it scrolls
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl PickerConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn blur_delay(&self) -> Duration {
        Duration::from_millis(self.blur_delay_ms)
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            blur_delay_ms: DEFAULT_BLUR_DELAY_MS,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub picker: PickerConfig,
}
