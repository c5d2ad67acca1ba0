//! Configuration handling for forms and their presentation

use crate::error::{FormError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Label used in messages when a field has none
pub const DEFAULT_FALLBACK_LABEL: &str = "This field";

/// Label used for the other side of a match rule when it has none
pub const DEFAULT_FALLBACK_MATCH_LABEL: &str = "dependant field";

/// Colors used by a presentation layer to draw fields
///
/// Values are color names or `#rrggbb` strings; the renderer decides how to
/// interpret them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub text_color: String,
    pub label_color: String,
    pub error_color: String,
    pub success_color: String,
    pub border_color: String,
    pub focus_color: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            text_color: "white".to_string(),
            label_color: "gray".to_string(),
            error_color: "red".to_string(),
            success_color: "green".to_string(),
            border_color: "darkgray".to_string(),
            focus_color: "cyan".to_string(),
        }
    }
}

/// Form configuration passed at construction time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Substituted for a missing field label in error messages
    pub fallback_label: String,
    /// Substituted for a missing label on the referenced side of a match rule
    pub fallback_match_label: String,
    pub appearance: Appearance,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            fallback_label: DEFAULT_FALLBACK_LABEL.to_string(),
            fallback_match_label: DEFAULT_FALLBACK_MATCH_LABEL.to_string(),
            appearance: Appearance::default(),
        }
    }
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formwork", "formwork")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded form config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the platform config directory
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(FormError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
