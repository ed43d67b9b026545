//! JSON file configuration adapter.
//!
//! Implements [`ConfigPort`] over an optional file path.  No path means
//! built-in defaults; a path that cannot be read or parsed is an error,
//! never a silent fallback.

use std::io::ErrorKind;
use std::path::PathBuf;

use log::info;

use crate::app::ports::ConfigPort;
use crate::config::Config;
use crate::error::ConfigError;

pub struct JsonFileConfig {
    path: Option<PathBuf>,
}

impl JsonFileConfig {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl ConfigPort for JsonFileConfig {
    fn load(&self) -> Result<Config, ConfigError> {
        let Some(path) = &self.path else {
            info!("No config file given, using defaults");
            return Ok(Config::default());
        };

        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::IoError,
        })?;
        let config = Config::from_json(&text)?;
        info!("Config loaded from {}", path.display());
        Ok(config)
    }
}
