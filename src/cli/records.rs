//! Record CLI commands
//!
//! Listing and importing records, and the terminal router that performs
//! navigation chosen in the wizard.

use std::path::Path;

use anyhow::Result;

use crate::audit::AuditLogger;
use crate::display::format_record_list;
use crate::error::{WizardError, WizardResult};
use crate::services::ImportService;
use crate::storage::Storage;
use crate::wizard::{Route, Router, IMPORT_PAGE};

/// Handle `onboard records <doctype>`
pub fn handle_records_command(storage: &Storage, doctype: &str) -> Result<()> {
    let records = storage.records.get_by_doctype(doctype)?;
    println!("{}", format_record_list(doctype, &records));
    Ok(())
}

/// Handle `onboard import <doctype> <file>`
pub fn handle_import_command(storage: &Storage, audit: &AuditLogger, doctype: &str, file: &Path) -> Result<()> {
    if !file.exists() {
        return Err(WizardError::Import(format!("File not found: {}", file.display())).into());
    }

    let result = ImportService::new(storage)
        .with_audit(audit)
        .import_file(doctype, file)?;

    println!("Imported {} {} record(s) from {}", result.imported, doctype.trim(), file.display());
    if result.skipped_empty > 0 {
        println!("  Skipped {} empty row(s)", result.skipped_empty);
    }
    if result.skipped_unnamed > 0 {
        println!("  Skipped {} row(s) without a name", result.skipped_unnamed);
    }
    if let Some(e) = &result.audit_error {
        println!("Warning: import was not written to the audit log: {}", e);
    }
    Ok(())
}

/// Performs wizard navigation on the terminal after the TUI exits
pub struct TerminalRouter<'a> {
    storage: &'a Storage,
}

impl<'a> TerminalRouter<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Text a route produces
    pub fn render(&self, route: &Route) -> WizardResult<String> {
        Ok(match route {
            Route::List(doctype) => {
                let records = self.storage.records.get_by_doctype(doctype)?;
                format_record_list(doctype, &records)
            }
            Route::Page(page) if page == IMPORT_PAGE => {
                "Import records from a CSV file with a header row:\n\n  onboard import <doctype> <file.csv>"
                    .to_string()
            }
            Route::Page(page) => format!("Opening {}", page),
        })
    }
}

impl Router for TerminalRouter<'_> {
    fn set_route(&mut self, route: &Route) -> WizardResult<()> {
        println!("{}", self.render(route)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OnboardPaths;
    use crate::models::Record;
    use tempfile::TempDir;

    #[test]
    fn test_router_renders_routes() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(OnboardPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        storage.records.insert(Record::new("User", "jane@example.com")).unwrap();
        let router = TerminalRouter::new(&storage);

        let list = router.render(&Route::List("User".into())).unwrap();
        assert!(list.contains("jane@example.com"));

        let import = router.render(&Route::Page(IMPORT_PAGE.into())).unwrap();
        assert!(import.contains("onboard import"));

        let page = router.render(&Route::Page("setup-wizard".into())).unwrap();
        assert_eq!(page, "Opening setup-wizard");
    }
}
