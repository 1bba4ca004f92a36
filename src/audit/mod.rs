//! Audit logging for onboard
//!
//! Records created by setup actions, slide completions and action failures
//! are appended to a line-delimited JSON log.
//!
//! # Example
//!
//! ```rust,ignore
//! use onboard::audit::{AuditEntry, AuditEvent, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::new(AuditEvent::SlideCompleted, "Customers"))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, AuditEvent};
pub use logger::AuditLogger;
