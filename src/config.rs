//! Configuration
//!
//! Loads `config.toml` from the user config directory. A missing file means
//! defaults; a broken file means defaults plus a warning for the footer.

mod loader;
mod types;

pub use loader::{ConfigResult, default_config_path, load_config, load_config_from};
pub use types::{Config, PickerConfig};
