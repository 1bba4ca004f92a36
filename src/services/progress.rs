//! Progress bookkeeping
//!
//! A slide counts as done once records of the doctype it creates exist.
//! Completion events seen by the wizard are written to the audit log.

use serde_json::json;

use crate::actions::ActionRegistry;
use crate::audit::{AuditEntry, AuditEvent, AuditLogger};
use crate::error::WizardResult;
use crate::models::SlideDescriptor;
use crate::storage::Storage;
use crate::wizard::{CompletionUpdate, Slide};

/// Status of one slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideStatus {
    pub name: String,
    pub title: String,
    pub method: String,
    pub doctype: Option<String>,
    pub records: usize,
    pub done: bool,
}

/// Status of the whole wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    pub slides: Vec<SlideStatus>,
    pub done: usize,
    pub percent: u8,
}

impl ProgressSummary {
    pub fn is_complete(&self) -> bool {
        self.done == self.slides.len()
    }
}

/// Doctype a slide creates: its own setting, else its method's
pub fn slide_doctype<'a>(descriptor: &'a SlideDescriptor, registry: &'a ActionRegistry) -> Option<&'a str> {
    descriptor
        .doctype
        .as_deref()
        .or_else(|| registry.doctype_for(&descriptor.method))
}

/// Service deriving slide progress from stored records
pub struct ProgressService<'a> {
    storage: &'a Storage,
    registry: &'a ActionRegistry,
}

impl<'a> ProgressService<'a> {
    pub fn new(storage: &'a Storage, registry: &'a ActionRegistry) -> Self {
        Self { storage, registry }
    }

    /// Set `done` on every slide whose doctype already has records.
    ///
    /// Returns how many slides are done afterwards.
    pub fn mark_done(&self, slides: &mut [SlideDescriptor]) -> WizardResult<usize> {
        let mut done = 0;
        for descriptor in slides.iter_mut() {
            if let Some(doctype) = slide_doctype(descriptor, self.registry) {
                if self.storage.records.has_doctype(doctype)? {
                    descriptor.done = true;
                }
            }
            if descriptor.done {
                done += 1;
            }
        }
        Ok(done)
    }

    /// Status rows for the given slides
    pub fn summary(&self, slides: &[SlideDescriptor]) -> WizardResult<ProgressSummary> {
        let counts = self.storage.records.doctype_counts()?;

        let rows: Vec<SlideStatus> = slides
            .iter()
            .map(|descriptor| {
                let doctype = slide_doctype(descriptor, self.registry).map(str::to_string);
                let records = doctype
                    .as_deref()
                    .map(|d| {
                        counts
                            .iter()
                            .filter(|(k, _)| k.eq_ignore_ascii_case(d))
                            .map(|(_, n)| *n)
                            .sum()
                    })
                    .unwrap_or(0);
                SlideStatus {
                    name: descriptor.name.clone(),
                    title: descriptor.title.clone(),
                    method: descriptor.method.clone(),
                    doctype,
                    records,
                    done: descriptor.done || records > 0,
                }
            })
            .collect();

        let done = rows.iter().filter(|r| r.done).count();
        let percent = if rows.is_empty() {
            0
        } else {
            (done * 100 / rows.len()) as u8
        };

        Ok(ProgressSummary {
            slides: rows,
            done,
            percent,
        })
    }
}

/// Writes wizard progress to the audit log
#[derive(Debug, Clone)]
pub struct ProgressRecorder {
    audit: AuditLogger,
}

impl ProgressRecorder {
    pub fn new(audit: AuditLogger) -> Self {
        Self { audit }
    }

    /// Log a slide reaching its done state, and setup completion if it did
    pub fn slide_completed(&self, slide: &Slide, update: CompletionUpdate) -> WizardResult<()> {
        let mut entries = vec![AuditEntry::new(AuditEvent::SlideCompleted, &slide.descriptor().name)
            .with_detail(&json!({
                "method": slide.descriptor().method,
                "percent": update.percent,
            }))];

        if update.setup_complete {
            entries.push(
                AuditEntry::new(AuditEvent::SetupCompleted, "wizard")
                    .with_detail(&json!({ "percent": update.percent })),
            );
        }

        self.audit.log_batch(&entries)
    }

    /// Log a domain action failure
    pub fn action_failed(&self, slide: &Slide, message: &str) -> WizardResult<()> {
        self.audit.log(
            &AuditEntry::new(AuditEvent::ActionFailed, &slide.descriptor().method)
                .with_detail(&json!({ "slide": slide.descriptor().name, "error": message })),
        )
    }
}
