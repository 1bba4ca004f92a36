//! Record repository for JSON storage
//!
//! Manages loading and saving records to records.json

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::WizardError;
use crate::models::{Record, RecordId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable record data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct RecordData {
    records: Vec<Record>,
}

/// Repository for record persistence
pub struct RecordRepository {
    path: PathBuf,
    data: RwLock<Vec<Record>>,
}

impl RecordRepository {
    /// Create a new record repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load records from disk
    pub fn load(&self) -> Result<(), WizardError> {
        let file_data: RecordData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            WizardError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = file_data.records;
        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> Result<(), WizardError> {
        let data = self.data.read().map_err(|e| {
            WizardError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = RecordData {
            records: data.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Append records; ids must be new
    pub fn insert_many(&self, records: Vec<Record>) -> Result<(), WizardError> {
        let mut data = self.data.write().map_err(|e| {
            WizardError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        for record in &records {
            if data.iter().any(|r| r.id == record.id) {
                return Err(WizardError::Storage(format!(
                    "Record {} already exists",
                    record.id
                )));
            }
        }

        data.extend(records);
        Ok(())
    }

    /// Remove the records with the given ids; returns how many were removed
    pub fn remove_many(&self, ids: &[RecordId]) -> Result<usize, WizardError> {
        let mut data = self.data.write().map_err(|e| {
            WizardError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let before = data.len();
        data.retain(|r| !ids.contains(&r.id));
        Ok(before - data.len())
    }

    /// Append records and persist them; on a failed save the records are
    /// taken back out so memory matches the file.
    pub fn insert_and_save(&self, records: Vec<Record>) -> Result<(), WizardError> {
        let ids: Vec<RecordId> = records.iter().map(|r| r.id).collect();
        self.insert_many(records)?;

        if let Err(e) = self.save() {
            self.remove_many(&ids)?;
            return Err(e);
        }
        Ok(())
    }

    /// Append a single record
    pub fn insert(&self, record: Record) -> Result<(), WizardError> {
        self.insert_many(vec![record])
    }

    /// Get a record by ID
    pub fn get(&self, id: RecordId) -> Result<Option<Record>, WizardError> {
        let data = self.data.read().map_err(|e| {
            WizardError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|r| r.id == id).cloned())
    }

    /// Get all records of a doctype in creation order
    pub fn get_by_doctype(&self, doctype: &str) -> Result<Vec<Record>, WizardError> {
        let data = self.data.read().map_err(|e| {
            WizardError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().filter(|r| r.is_doctype(doctype)).cloned().collect())
    }

    /// Check whether at least one record of a doctype exists
    pub fn has_doctype(&self, doctype: &str) -> Result<bool, WizardError> {
        let data = self.data.read().map_err(|e| {
            WizardError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().any(|r| r.is_doctype(doctype)))
    }

    /// Number of records per doctype
    pub fn doctype_counts(&self) -> Result<BTreeMap<String, usize>, WizardError> {
        let data = self.data.read().map_err(|e| {
            WizardError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut counts = BTreeMap::new();
        for record in data.iter() {
            *counts.entry(record.doctype.clone()).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Total number of records
    pub fn count(&self) -> Result<usize, WizardError> {
        let data = self.data.read().map_err(|e| {
            WizardError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
