use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use pronunciation_core::shared::constants::{APP_DIR_NAME, SETTINGS_FILE_NAME};

/// Persistent defaults; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub phrases_path: Option<PathBuf>,
    #[serde(default)]
    pub hints_path: Option<PathBuf>,
    #[serde(default)]
    pub json_output: bool,
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Missing or malformed files fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(json) = fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::debug!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
