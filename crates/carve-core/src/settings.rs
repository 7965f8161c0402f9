//! Session settings persistence.
//!
//! A single flat record per session, persisted as TOML. `#[serde(default)]`
//! keeps old settings files loadable when fields are added, and a missing
//! or malformed file falls back to the documented defaults rather than
//! failing the session.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Per-category syntax color overrides, keyed by category name
/// ("keyword", "operator", "comment"). Empty means rule-set defaults.
pub type SyntaxColors = HashMap<String, String>;

/// Editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display font family
    pub font_name: String,

    /// Font size in points
    pub font_size: u32,

    /// Editor background color
    pub background_color: String,

    /// Default text color
    pub font_color: String,

    /// Per-category highlight color overrides
    pub syntax_highlighting_colors: SyntaxColors,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_name: "Arial".to_string(),
            font_size: 12,
            background_color: "white".to_string(),
            font_color: "black".to_string(),
            syntax_highlighting_colors: HashMap::new(),
        }
    }
}

impl Settings {
    /// Loads settings from the default location, falling back to
    /// defaults when the file is missing or malformed.
    pub fn load() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_or_default(path),
            Err(_) => Self::default(),
        }
    }

    /// Loads settings from `path`, falling back to defaults on any
    /// failure. A malformed file is tolerated, not fatal.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("settings file {}: {e}; using defaults", path.display());
            Self::default()
        })
    }

    /// Loads settings from a file, surfacing parse failures.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let settings: Self = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Returns the default settings file path.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let config_dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(config_dir.join("carve").join("settings.toml"))
    }

    /// Saves the settings to the default location.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(Self::default_path()?)
    }

    /// Saves the settings to a specific path.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Settings persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.font_size, 12);
        assert_eq!(settings.background_color, "white");
        assert_eq!(settings.font_color, "black");
        assert!(settings.syntax_highlighting_colors.is_empty());
    }

    #[test]
    fn test_round_trip_reproduces_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = Settings::default();
        settings.font_name = "Courier".to_string();
        settings.font_size = 16;
        settings
            .syntax_highlighting_colors
            .insert("keyword".to_string(), "red".to_string());

        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_or_default(dir.path().join("absent.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "font_size = \"not a number").unwrap();

        let settings = Settings::load_or_default(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "font_size = 20\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.font_size, 20);
        assert_eq!(settings.background_color, "white");
    }
}
