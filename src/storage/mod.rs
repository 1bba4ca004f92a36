//! Storage layer for onboard
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod records;

pub use file_io::{read_json, write_json_atomic};
pub use records::RecordRepository;

use crate::config::paths::OnboardPaths;
use crate::error::WizardError;

/// Storage coordinator that provides access to all repositories
pub struct Storage {
    paths: OnboardPaths,
    pub records: RecordRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: OnboardPaths) -> Result<Self, WizardError> {
        paths.ensure_directories()?;

        Ok(Self {
            records: RecordRepository::new(paths.records_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &OnboardPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), WizardError> {
        self.records.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), WizardError> {
        self.records.save()
    }
}
