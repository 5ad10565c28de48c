use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::DropdeckError;
use crate::result::DropdeckResult;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Pre-fill for the People form field.
    #[serde(default)]
    pub default_people: Option<u8>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/dropdeck/config.toml"))
        }
        #[cfg(not(target_os = "macos"))]
        {
            dirs::config_dir().map(|config| config.join("dropdeck").join("config.toml"))
        }
    }

    /// Read and parse a config file. Missing files surface as IO
    /// errors, malformed ones as serialization errors.
    pub fn load_from(path: &Path) -> DropdeckResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|err| DropdeckError::Serialization(err.to_string()))
    }

    /// Best-effort load from the default location; a missing or
    /// malformed file falls back to defaults.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    pub fn effective_default_people(&self) -> u8 {
        self.default_people.unwrap_or(1).clamp(1, 5)
    }
}
