//! Path management for onboard
//!
//! Resolves where settings, records, slide definitions and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `ONBOARD_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/onboard` on Linux, `%APPDATA%\onboard\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::WizardError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "ONBOARD_DATA_DIR";

/// Manages all paths used by onboard
#[derive(Debug, Clone)]
pub struct OnboardPaths {
    /// Base directory for all onboard data
    base_dir: PathBuf,
}

impl OnboardPaths {
    /// Create a new OnboardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, WizardError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create OnboardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to records.json
    pub fn records_file(&self) -> PathBuf {
        self.data_dir().join("records.json")
    }

    /// Get the path to the user's slide definitions
    pub fn slides_file(&self) -> PathBuf {
        self.base_dir.join("slides.yaml")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), WizardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WizardError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| WizardError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, WizardError> {
    ProjectDirs::from("", "", "onboard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| WizardError::Config("Could not determine home directory".into()))
}
