//! CSV record import
//!
//! Bulk-loads records of one doctype from a CSV file with a header row.
//! The record name comes from the `name` column, or the column named after
//! the doctype, or the first column; every other non-empty cell becomes a
//! field.

use std::path::Path;

use csv::{Reader, StringRecord};
use serde_json::json;

use crate::audit::{AuditEntry, AuditEvent, AuditLogger};
use crate::error::{WizardError, WizardResult};
use crate::models::Record;
use crate::storage::Storage;

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of records imported
    pub imported: usize,
    /// Rows skipped because every cell was empty
    pub skipped_empty: usize,
    /// Rows skipped because the name cell was empty
    pub skipped_unnamed: usize,
    /// IDs of imported records
    pub imported_ids: Vec<String>,
    /// Why the import could not be written to the audit log
    pub audit_error: Option<String>,
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
    audit: Option<&'a AuditLogger>,
}

impl<'a> ImportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            audit: None,
        }
    }

    /// Log a `records_imported` entry after each import
    pub fn with_audit(mut self, audit: &'a AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Import a CSV file as records of `doctype`
    pub fn import_file(&self, doctype: &str, path: &Path) -> WizardResult<ImportResult> {
        let mut reader = Reader::from_path(path)
            .map_err(|e| WizardError::Import(format!("Failed to open {}: {}", path.display(), e)))?;
        let mut result = self.import_from_reader(doctype, &mut reader)?;

        // Records are already saved, so a failed audit write is only reported
        if let Some(audit) = self.audit {
            let entry = AuditEntry::new(AuditEvent::RecordsImported, doctype).with_detail(&json!({
                "file": path.display().to_string(),
                "imported": result.imported,
            }));
            result.audit_error = audit.log(&entry).err().map(|e| e.to_string());
        }
        Ok(result)
    }

    /// Import from any CSV reader
    pub fn import_from_reader<R: std::io::Read>(
        &self,
        doctype: &str,
        reader: &mut Reader<R>,
    ) -> WizardResult<ImportResult> {
        let doctype = doctype.trim();
        if doctype.is_empty() {
            return Err(WizardError::Validation("Doctype cannot be empty".into()));
        }

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| WizardError::Import(format!("Error reading CSV header: {}", e)))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if headers.is_empty() {
            return Err(WizardError::Import("CSV file has no header row".into()));
        }
        let name_column = name_column(&headers, doctype);

        let mut result = ImportResult::default();
        let mut records = Vec::new();

        for (idx, row) in reader.records().enumerate() {
            let row = row.map_err(|e| {
                WizardError::Import(format!("Error reading CSV record {}: {}", idx + 1, e))
            })?;

            if row.iter().all(|cell| cell.trim().is_empty()) {
                result.skipped_empty += 1;
                continue;
            }

            match build_record(doctype, &headers, name_column, &row) {
                Some(record) => records.push(record),
                None => result.skipped_unnamed += 1,
            }
        }

        result.imported = records.len();
        result.imported_ids = records.iter().map(|r| r.id.to_string()).collect();

        if !records.is_empty() {
            self.storage.records.insert_and_save(records)?;
        }

        Ok(result)
    }
}

fn name_column(headers: &[String], doctype: &str) -> usize {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("name"))
        .or_else(|| headers.iter().position(|h| h.eq_ignore_ascii_case(doctype)))
        .unwrap_or(0)
}

fn build_record(doctype: &str, headers: &[String], name_column: usize, row: &StringRecord) -> Option<Record> {
    let name = row.get(name_column).map(str::trim).unwrap_or("");
    if name.is_empty() {
        return None;
    }

    let record = headers
        .iter()
        .enumerate()
        .filter(|(i, header)| *i != name_column && !header.is_empty())
        .fold(Record::new(doctype, name), |record, (i, header)| {
            record.with_field(header.as_str(), row.get(i).unwrap_or(""))
        });
    Some(record)
}
