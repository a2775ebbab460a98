use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::formatting::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_FOREGROUND};
use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default = "default_font_family")]
    pub font_family: String,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_foreground")]
    pub foreground: String,

    #[serde(default)]
    pub case_sensitive_search: bool,

    /// Find next/previous wraps around the document ends
    #[serde(default = "default_wrap_search")]
    pub wrap_search: bool,

    /// Extension given to conversion destinations that have none
    #[serde(default = "default_extension")]
    pub default_extension: String,
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

fn default_foreground() -> String {
    DEFAULT_FOREGROUND.to_string()
}

fn default_wrap_search() -> bool {
    true
}

fn default_extension() -> String {
    "rtf".to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            foreground: default_foreground(),
            case_sensitive_search: false,
            wrap_search: default_wrap_search(),
            default_extension: default_extension(),
        }
    }
}

impl EditorSettings {
    /// Load settings from the user config directory, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    /// Load settings from `path`; a missing or unreadable file yields defaults
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to the user config directory
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if self.font_family.trim().is_empty() {
            return Err(AppError::Settings("font family must not be empty".to_string()));
        }
        if self.font_size == 0 {
            return Err(AppError::Settings("font size must be positive".to_string()));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("wordimperfect");
        path.push("settings.json");
        path
    }
}
