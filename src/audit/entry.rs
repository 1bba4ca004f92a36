//! Audit entry data structures
//!
//! One entry per noteworthy wizard event, written as a JSON line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Events that are written to the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEvent {
    /// A setup action created a record
    RecordCreated,
    /// Records were imported from a CSV file
    RecordsImported,
    /// A slide reached its done state
    SlideCompleted,
    /// Every slide is done
    SetupCompleted,
    /// A setup action returned an error
    ActionFailed,
}

impl std::fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditEvent::RecordCreated => write!(f, "RECORD_CREATED"),
            AuditEvent::RecordsImported => write!(f, "RECORDS_IMPORTED"),
            AuditEvent::SlideCompleted => write!(f, "SLIDE_COMPLETED"),
            AuditEvent::SetupCompleted => write!(f, "SETUP_COMPLETED"),
            AuditEvent::ActionFailed => write!(f, "ACTION_FAILED"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// What happened
    pub event: AuditEvent,

    /// What it happened to: a record id, a slide name, a method
    pub subject: String,

    /// Structured context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create an entry stamped with the current time
    pub fn new(event: AuditEvent, subject: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
            subject: subject.into(),
            detail: None,
        }
    }

    /// Attach serialized context
    pub fn with_detail<T: Serialize>(mut self, detail: &T) -> Self {
        self.detail = serde_json::to_value(detail).ok();
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.event,
            self.subject
        );

        if let Some(detail) = &self.detail {
            output.push_str(&format!("\n  {}", detail));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_display() {
        assert_eq!(AuditEvent::SlideCompleted.to_string(), "SLIDE_COMPLETED");
        assert_eq!(AuditEvent::ActionFailed.to_string(), "ACTION_FAILED");
    }

    #[test]
    fn test_event_serializes_snake_case() {
        let json = serde_json::to_string(&AuditEvent::RecordsImported).unwrap();
        assert_eq!(json, "\"records_imported\"");
    }

    #[test]
    fn test_entry_with_detail() {
        let entry = AuditEntry::new(AuditEvent::RecordCreated, "rec-1234abcd")
            .with_detail(&json!({"doctype": "Customer", "name": "Acme"}));

        assert_eq!(entry.subject, "rec-1234abcd");
        assert_eq!(entry.detail.unwrap()["doctype"], "Customer");
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::new(AuditEvent::SlideCompleted, "Customers")
            .with_detail(&json!({"percent": 25}));

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("SLIDE_COMPLETED"));
        assert!(formatted.contains("Customers"));
        assert!(formatted.contains("\"percent\":25"));
    }
}
