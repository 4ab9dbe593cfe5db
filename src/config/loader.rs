use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::PickError;

const APP_DIR: &str = "peoplepick";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a warning to surface when the file was unusable
#[derive(Debug, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// `<config dir>/peoplepick/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load from `path`, or from the default location when `path` is `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => return ConfigResult::default(),
        },
    };

    match load_config_from(&path) {
        Ok(Some(config)) => ConfigResult {
            config,
            warning: None,
        },
        Ok(None) => ConfigResult::default(),
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Parse the file at `path`. A missing file is `Ok(None)`.
pub fn load_config_from(path: &Path) -> Result<Option<Config>, PickError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PickError::ConfigRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(|source| PickError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
