//! Stored business records
//!
//! Records are what setup actions produce: customers, suppliers, items,
//! users, contacts. Every record has a doctype, a display name and a bag of
//! string fields.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::RecordId;

/// A stored record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier
    pub id: RecordId,

    /// Record type, e.g. "Customer"
    pub doctype: String,

    /// Display name
    pub name: String,

    /// Remaining field values
    #[serde(default)]
    pub fields: BTreeMap<String, String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Create a new record
    pub fn new(doctype: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            doctype: doctype.into(),
            name: name.into(),
            fields: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Attach a field value, skipping empty values
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.fields.insert(key.into(), value.trim().to_string());
        }
        self
    }

    /// Check if the record is of the given doctype (case-insensitive)
    pub fn is_doctype(&self, doctype: &str) -> bool {
        self.doctype.eq_ignore_ascii_case(doctype)
    }
}
