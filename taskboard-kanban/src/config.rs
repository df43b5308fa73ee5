//! Board configuration
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. `taskboard.toml`, `taskboard.yaml`, `taskboard.json` in the working directory
//! 3. Environment variables prefixed `TASKBOARD_` (e.g. `TASKBOARD_DATA_DIR`)

use crate::error::Result;
use crate::types::DEFAULT_COLUMN_COLOR;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base name of the configuration files
pub const CONFIG_FILE_STEM: &str = "taskboard";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "TASKBOARD_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Directory holding the snapshot files
    pub data_dir: PathBuf,
    /// Colour tag given to newly added columns
    pub default_column_color: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_column_color: DEFAULT_COLUMN_COLOR.to_string(),
        }
    }
}

/// `<platform data dir>/taskboard`, or `./taskboard` when the platform has none
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskboard")
}

impl BoardConfig {
    /// Load from the current working directory and the environment
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from(&cwd)
    }

    /// Load using config files found in `dir`
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config = Self::figment(dir).extract::<Self>()?;
        tracing::debug!(?config, "loaded board config");
        Ok(config)
    }

    fn figment(dir: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(dir.join(format!("{CONFIG_FILE_STEM}.toml"))))
            .merge(Yaml::file(dir.join(format!("{CONFIG_FILE_STEM}.yaml"))))
            .merge(Json::file(dir.join(format!("{CONFIG_FILE_STEM}.json"))))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_default_column_color(mut self, color: impl Into<String>) -> Self {
        self.default_column_color = color.into();
        self
    }
}
