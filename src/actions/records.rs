//! Record-creating action handler
//!
//! Groups a slide's values by their instance suffix (`customer_1`,
//! `customer_contact_1`, `customer_2`, ...) and creates one record per group
//! whose key field has a value. Optionally creates a linked Contact record
//! from a contact field.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{json, Value};

use super::registry::ActionHandler;
use crate::audit::{AuditEntry, AuditEvent, AuditLogger};
use crate::error::{WizardError, WizardResult};
use crate::form::split_instance_name;
use crate::models::{FieldValues, Record};
use crate::storage::Storage;

/// Doctype of the linked records created from a contact field
pub const CONTACT_DOCTYPE: &str = "Contact";

/// Result key carrying an audit-log failure for records that were saved
pub const AUDIT_ERROR_KEY: &str = "audit_error";

/// Creates records of one doctype from slide values
pub struct CreateRecords {
    storage: Arc<Storage>,
    doctype: String,
    key_field: String,
    contact_field: Option<String>,
    audit: Option<AuditLogger>,
}

impl CreateRecords {
    /// Handler creating `doctype` records named after `key_field`
    pub fn new(storage: Arc<Storage>, doctype: impl Into<String>, key_field: impl Into<String>) -> Self {
        Self {
            storage,
            doctype: doctype.into(),
            key_field: key_field.into(),
            contact_field: None,
            audit: None,
        }
    }

    /// Also create a linked Contact from this field
    pub fn with_contact_field(mut self, field: impl Into<String>) -> Self {
        self.contact_field = Some(field.into());
        self
    }

    /// Write an audit entry per created record
    pub fn with_audit(mut self, audit: AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    fn group_values(values: &FieldValues) -> BTreeMap<usize, BTreeMap<&str, &str>> {
        let mut groups: BTreeMap<usize, BTreeMap<&str, &str>> = BTreeMap::new();
        for (key, value) in values {
            let (base, index) = split_instance_name(key).unwrap_or((key.as_str(), 0));
            groups.entry(index).or_default().insert(base, value.as_str());
        }
        groups
    }

    fn build_records(&self, values: &FieldValues) -> Vec<Record> {
        let mut records = Vec::new();

        for group in Self::group_values(values).into_values() {
            let name = group.get(self.key_field.as_str()).map(|v| v.trim()).unwrap_or("");
            if name.is_empty() {
                continue;
            }

            let mut record = Record::new(&self.doctype, name);
            for (field, value) in &group {
                let is_contact = self.contact_field.as_deref() == Some(*field);
                if *field != self.key_field && !is_contact {
                    record = record.with_field(*field, *value);
                }
            }

            let contact = self
                .contact_field
                .as_deref()
                .and_then(|field| group.get(field))
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(|contact| {
                    Record::new(CONTACT_DOCTYPE, contact)
                        .with_field("link_doctype", self.doctype.as_str())
                        .with_field("link_name", name)
                });

            records.push(record);
            records.extend(contact);
        }

        records
    }
}

impl ActionHandler for CreateRecords {
    fn handle(&self, method: &str, values: &FieldValues) -> WizardResult<Value> {
        let records = self.build_records(values);
        if records.is_empty() {
            return Err(WizardError::action(
                method,
                format!("no {} name was given", self.doctype.to_lowercase()),
            ));
        }

        let ids: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
        let entries: Vec<AuditEntry> = records
            .iter()
            .map(|r| {
                AuditEntry::new(AuditEvent::RecordCreated, r.id.to_string())
                    .with_detail(&json!({ "doctype": r.doctype, "name": r.name, "method": method }))
            })
            .collect();

        self.storage.records.insert_and_save(records)?;

        let mut result = json!({ "created": ids.len(), "ids": ids });

        // The records are on disk; a retry would duplicate them, so an audit
        // failure is reported alongside the result instead of failing the call.
        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log_batch(&entries) {
                result[AUDIT_ERROR_KEY] = json!(e.to_string());
            }
        }

        Ok(result)
    }

    fn doctype(&self) -> Option<&str> {
        Some(&self.doctype)
    }
}
