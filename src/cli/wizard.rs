//! Wizard CLI commands
//!
//! Running the setup wizard, showing progress and managing slide
//! definitions.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use super::records::TerminalRouter;
use crate::actions::{ActionDispatcher, ActionRegistry};
use crate::audit::AuditLogger;
use crate::config::{OnboardPaths, Settings};
use crate::display::{format_slide_list, format_status};
use crate::error::WizardResult;
use crate::models::SlideSet;
use crate::services::{ProgressRecorder, ProgressService, SlideService};
use crate::storage::Storage;
use crate::tui::{run_wizard, App, WizardExit};
use crate::wizard::{Router, SequenceOptions, SlideSequence, UserProgressDialog};

/// Everything a wizard run needs
pub struct WizardContext {
    pub paths: OnboardPaths,
    pub settings: Settings,
    pub storage: Arc<Storage>,
    pub audit: AuditLogger,
    pub registry: Arc<ActionRegistry>,
}

impl WizardContext {
    /// Load settings and records and register the built-in methods
    pub fn load(paths: OnboardPaths) -> WizardResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        let mut storage = Storage::new(paths.clone())?;
        storage.load_all()?;
        let storage = Arc::new(storage);

        let audit = AuditLogger::new(paths.audit_log());
        let registry = Arc::new(ActionRegistry::with_defaults(
            Arc::clone(&storage),
            Some(audit.clone()),
        ));

        Ok(Self {
            paths,
            settings,
            storage,
            audit,
            registry,
        })
    }

    /// Slides for this run, with `done` set from stored records
    pub fn slides(&self, flag: Option<&Path>) -> WizardResult<SlideSet> {
        let (_, mut set) = SlideService::new(&self.paths, &self.settings).load(flag)?;
        ProgressService::new(&self.storage, &self.registry).mark_done(&mut set.slides)?;
        Ok(set)
    }
}

/// Build the dialog for a slide set
pub fn build_dialog(set: SlideSet, settings: &Settings, unidirectional: bool) -> WizardResult<UserProgressDialog> {
    let options = SequenceOptions {
        unidirectional: unidirectional || settings.unidirectional,
        done_state: settings.show_done_state,
    };
    let sequence = SlideSequence::new(set.slides, options)?;
    Ok(UserProgressDialog::new(settings.dialog_title.clone(), sequence))
}

/// Handle `onboard run`
pub fn handle_run_command(ctx: &mut WizardContext, slides: Option<&Path>, unidirectional: bool) -> Result<()> {
    let set = ctx.slides(slides)?;
    if set.slides.iter().all(|s| s.done) {
        println!("Setup is complete. Every slide is done.");
        println!("Run 'onboard status' to see what was created.");
        return Ok(());
    }

    let dialog = build_dialog(set, &ctx.settings, unidirectional)?;
    let registry: Arc<ActionRegistry> = Arc::clone(&ctx.registry);
    let app = App::new(dialog, ActionDispatcher::new(registry))
        .with_recorder(ProgressRecorder::new(ctx.audit.clone()));

    let exit = run_wizard(app, Duration::from_millis(ctx.settings.tick_rate_ms))?;

    match exit {
        WizardExit::Quit => {
            println!("Setup wizard closed. Run 'onboard' to continue.");
        }
        WizardExit::Dismissed => {
            ctx.settings.setup_completed = true;
            ctx.settings.save(&ctx.paths)?;
            println!("Setup complete!");
        }
        WizardExit::Route(route) => {
            TerminalRouter::new(&ctx.storage).set_route(&route)?;
        }
    }

    Ok(())
}

/// Handle `onboard status`
pub fn handle_status_command(ctx: &WizardContext, slides: Option<&Path>) -> Result<()> {
    let set = ctx.slides(slides)?;
    let summary = ProgressService::new(&ctx.storage, &ctx.registry).summary(&set.slides)?;
    println!("{}", format_status(&summary));
    Ok(())
}

/// Handle `onboard slides`
pub fn handle_slides_command(ctx: &WizardContext, slides: Option<&Path>) -> Result<()> {
    let (source, set) = SlideService::new(&ctx.paths, &ctx.settings).load(slides)?;
    println!("Slides from {}", source);
    println!("{}", format_slide_list(&set.slides));

    let unknown: Vec<_> = set
        .slides
        .iter()
        .filter(|s| !ctx.registry.contains(&s.method))
        .map(|s| s.method.as_str())
        .collect();
    if !unknown.is_empty() {
        println!();
        println!("Warning: no handler for method(s): {}", unknown.join(", "));
    }
    Ok(())
}

/// Handle `onboard init-slides`
pub fn handle_init_slides_command(ctx: &WizardContext, force: bool) -> Result<()> {
    let path = SlideService::new(&ctx.paths, &ctx.settings).init_slides(force)?;
    println!("Wrote default slides to {}", path.display());
    println!("Edit the file to customize the wizard.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use tempfile::TempDir;

    #[test]
    fn test_context_marks_done_slides() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let storage = Storage::new(paths.clone()).unwrap();
            storage.records.insert(Record::new("Supplier", "Globex")).unwrap();
            storage.save_all().unwrap();
        }

        let ctx = WizardContext::load(paths).unwrap();
        let set = ctx.slides(None).unwrap();
        let done: Vec<_> = set.slides.iter().filter(|s| s.done).map(|s| s.name.as_str()).collect();
        assert_eq!(done, ["Suppliers"]);
    }

    #[test]
    fn test_build_dialog_applies_settings() {
        let mut settings = Settings::default();
        settings.dialog_title = "Get Started".into();

        let dialog = build_dialog(SlideSet::builtin().unwrap(), &settings, true).unwrap();
        assert_eq!(dialog.title(), "Get Started");
        assert!(dialog.sequence().options().unidirectional);
        assert!(!dialog.dismiss_visible());
    }
}
