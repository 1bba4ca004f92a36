//! User settings for onboard
//!
//! Manages wizard preferences: navigation mode, progress dot rendering,
//! the event tick rate and where slide definitions come from.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::OnboardPaths;
use crate::error::WizardError;

/// User settings for onboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Progress dots only move forward and cannot be clicked
    #[serde(default)]
    pub unidirectional: bool,

    /// Mark done slides on the progress dots
    #[serde(default = "default_true")]
    pub show_done_state: bool,

    /// Event loop tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Title of the wizard dialog
    #[serde(default = "default_dialog_title")]
    pub dialog_title: String,

    /// Slide definitions to use instead of the built-in set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides_file: Option<PathBuf>,

    /// Whether the user has dismissed a fully completed wizard
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_dialog_title() -> String {
    "Complete Setup".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            unidirectional: false,
            show_done_state: default_true(),
            tick_rate_ms: default_tick_rate_ms(),
            dialog_title: default_dialog_title(),
            slides_file: None,
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &OnboardPaths) -> Result<Self, WizardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                WizardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WizardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OnboardPaths) -> Result<(), WizardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            WizardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            WizardError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.unidirectional);
        assert!(settings.show_done_state);
        assert_eq!(settings.tick_rate_ms, 250);
        assert_eq!(settings.dialog_title, "Complete Setup");
        assert!(settings.slides_file.is_none());
    }

    #[test]
    fn test_load_missing_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(!settings.setup_completed);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.unidirectional = true;
        settings.slides_file = Some(PathBuf::from("/tmp/slides.yaml"));

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.unidirectional);
        assert_eq!(loaded.slides_file, Some(PathBuf::from("/tmp/slides.yaml")));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"unidirectional": true}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.unidirectional);
        assert!(loaded.show_done_state);
        assert_eq!(loaded.tick_rate_ms, 250);
    }
}
