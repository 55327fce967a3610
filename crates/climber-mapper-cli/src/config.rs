//! Application configuration.
//!
//! Sets where the dataset files are read from and where the GeoJSON file is
//! written. Values come from, lowest priority first:
//!
//! 1. built-in defaults (`all_routes`, the working directory)
//! 2. `~/.config/climber-mapper/config.json`
//! 3. `CLIMBER_MAPPER_DATA_DIR` / `CLIMBER_MAPPER_OUTPUT_DIR`, which may also
//!    be set in a `.env` file

use std::path::PathBuf;

use anyhow::{Context, Result};
use climber_mapper_core::DEFAULT_DATA_DIR;
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path
const APP_NAME: &str = "climber-mapper";

/// Config file name
const CONFIG_FILE: &str = "config.json";

pub const DATA_DIR_ENV: &str = "CLIMBER_MAPPER_DATA_DIR";
pub const OUTPUT_DIR_ENV: &str = "CLIMBER_MAPPER_OUTPUT_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load the config file (if any) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                serde_json::from_str(&contents)
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))?
            }
            _ => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Replace fields with non-empty values returned by `lookup` for
    /// `CLIMBER_MAPPER_DATA_DIR` and `CLIMBER_MAPPER_OUTPUT_DIR`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        if let Some(dir) = get(DATA_DIR_ENV) {
            self.data_dir = Some(dir);
        }
        if let Some(dir) = get(OUTPUT_DIR_ENV) {
            self.output_dir = Some(dir);
        }
        self
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
