//! Application state for the TUI
//!
//! The App owns the wizard dialog, the call in flight and the transient
//! status line. It is also the router: choosing a done-state action records
//! the route and leaves the wizard so the caller can navigate.

use serde_json::Value;

use crate::actions::{ActionDispatcher, ActionOutcome, CallOptions, PendingCall, AUDIT_ERROR_KEY};
use crate::error::WizardResult;
use crate::services::ProgressRecorder;
use crate::wizard::{Route, Router, SlidePhase, SubmitResult, UserProgressDialog};

/// How the wizard was left
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardExit {
    /// Esc before setup was complete
    Quit,
    /// Dismissed after every slide was done
    Dismissed,
    /// A done-state action was chosen
    Route(Route),
}

/// Main application state
pub struct App {
    /// The wizard being shown
    pub dialog: UserProgressDialog,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    dispatcher: ActionDispatcher,
    recorder: Option<ProgressRecorder>,
    pending: Option<PendingCall>,
    exit: WizardExit,
}

impl App {
    /// Create a new App and open the dialog
    pub fn new(mut dialog: UserProgressDialog, dispatcher: ActionDispatcher) -> Self {
        dialog.show();
        Self {
            dialog,
            should_quit: false,
            status_message: None,
            dispatcher,
            recorder: None,
            pending: None,
            exit: WizardExit::Quit,
        }
    }

    /// Write completions and failures to the audit log
    pub fn with_recorder(mut self, recorder: ProgressRecorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Whether input is blocked by a running call
    pub fn is_frozen(&self) -> bool {
        self.pending.as_ref().map(PendingCall::freezes).unwrap_or(false)
    }

    /// Whether a call is running
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit the current slide
    pub fn submit(&mut self) {
        if self.pending.is_some() {
            return;
        }

        match self.dialog.submit() {
            Some(request) => {
                self.status_message = None;
                self.pending = Some(self.dispatcher.dispatch(request, CallOptions::default()));
            }
            None => {
                let slide = self.dialog.sequence().current();
                if slide.phase() == SlidePhase::Active {
                    self.status_message = slide
                        .form()
                        .and_then(|f| f.message())
                        .map(str::to_string)
                        .or_else(|| Some("Check the values and try again".to_string()));
                }
            }
        }
    }

    /// Periodic work: collect a finished call and completion events
    pub fn tick(&mut self) {
        let outcome = self.pending.as_ref().and_then(PendingCall::poll);
        if let Some(outcome) = outcome {
            self.pending = None;
            self.apply(outcome);
        }
        self.dialog.poll_signals();
    }

    /// Block until the running call finishes and apply it
    pub fn finish_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.apply(pending.wait());
        }
    }

    fn apply(&mut self, outcome: ActionOutcome) {
        let index = outcome.request.slide;
        let audit_error = outcome
            .result
            .as_ref()
            .ok()
            .and_then(|value| value.get(AUDIT_ERROR_KEY))
            .and_then(Value::as_str)
            .map(str::to_string);
        let result = match self.dialog.apply_outcome(outcome) {
            Ok(result) => result,
            Err(e) => {
                self.status_message = Some(e.to_string());
                return;
            }
        };

        let Some(slide) = self.dialog.sequence().slide(index) else {
            return;
        };

        let logged = match (&result, &self.recorder) {
            (SubmitResult::Completed(update), Some(recorder)) => recorder.slide_completed(slide, *update),
            (SubmitResult::Failed(message), Some(recorder)) => recorder.action_failed(slide, message),
            (_, None) => Ok(()),
        };

        self.status_message = match (&result, logged) {
            (_, Err(e)) => Some(e.to_string()),
            (SubmitResult::Completed(_), Ok(())) if audit_error.is_some() => {
                audit_error.map(|e| format!("{} done, but it was not logged: {}", slide.descriptor().name, e))
            }
            (SubmitResult::Completed(update), Ok(())) if update.setup_complete => {
                Some("Setup complete! Press Ctrl+D to dismiss".to_string())
            }
            (SubmitResult::Completed(update), Ok(())) => {
                Some(format!("{} done ({}% complete)", slide.descriptor().name, update.percent))
            }
            (SubmitResult::Failed(_), Ok(())) => None,
        };
    }

    /// Add another repeated block to the current slide
    pub fn add_more(&mut self) {
        if self.is_frozen() {
            return;
        }
        if !self.dialog.sequence_mut().current_mut().add_more() {
            self.status_message = Some("Cannot add more here".to_string());
        }
    }

    pub fn next_slide(&mut self) {
        if !self.is_frozen() {
            self.dialog.sequence_mut().next();
        }
    }

    pub fn prev_slide(&mut self) {
        if !self.is_frozen() {
            self.dialog.sequence_mut().prev();
        }
    }

    /// Jump to a slide from its progress dot
    pub fn click_dot(&mut self, index: usize) {
        if self.is_frozen() {
            return;
        }
        if let Err(e) = self.dialog.sequence_mut().click_dot(index) {
            self.status_message = Some(e.to_string());
        }
    }

    /// Follow done-state action `index` of the current slide
    pub fn choose_done_action(&mut self, index: usize) -> WizardResult<bool> {
        let route = self
            .dialog
            .sequence()
            .current()
            .done_actions()
            .get(index)
            .map(|action| action.route.clone());

        match route {
            Some(route) => {
                self.set_route(&route)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Dismiss the wizard once setup is complete
    pub fn dismiss(&mut self) {
        if self.is_frozen() {
            return;
        }
        match self.dialog.dismiss() {
            Ok(()) => {
                self.exit = WizardExit::Dismissed;
                self.should_quit = true;
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// How the wizard was left
    pub fn exit(&self) -> &WizardExit {
        &self.exit
    }
}

impl Router for App {
    fn set_route(&mut self, route: &Route) -> WizardResult<()> {
        self.exit = WizardExit::Route(route.clone());
        self.dialog.close();
        self.should_quit = true;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::actions::DomainAction;
    use crate::error::WizardError;
    use crate::models::{FieldDef, SlideDescriptor};
    use crate::wizard::{SequenceOptions, SlideSequence};
    use serde_json::{json, Value};
    use std::sync::Arc;

    struct Echo;

    impl DomainAction for Echo {
        fn call(&self, method: &str, args: &Value) -> WizardResult<Value> {
            match args["args_data"]["item"].as_str() {
                Some("fail") => Err(WizardError::action(method, "rejected")),
                Some("unlogged") => Ok(json!({ "created": 1, AUDIT_ERROR_KEY: "Audit error: disk full" })),
                _ => Ok(json!({ "created": 1 })),
            }
        }
    }

    pub(crate) fn test_app(count: usize) -> App {
        let descriptors = (0..count)
            .map(|i| {
                let mut descriptor = SlideDescriptor::new(
                    format!("Items{}", i),
                    "Add Items",
                    "create_items",
                    vec![FieldDef::new("item", "Item").required()],
                );
                descriptor.doctype = Some("Item".into());
                descriptor
            })
            .collect();
        let sequence = SlideSequence::new(descriptors, SequenceOptions::default()).unwrap();
        let dialog = UserProgressDialog::new("Complete Setup", sequence);
        App::new(dialog, ActionDispatcher::new(Arc::new(Echo)))
    }

    fn fill(app: &mut App, value: &str) {
        app.dialog
            .sequence_mut()
            .current_mut()
            .set_value("item", value)
            .unwrap();
    }

    #[test]
    fn test_submit_with_missing_values_reports() {
        let mut app = test_app(1);
        app.submit();
        assert!(!app.has_pending());
        assert_eq!(app.status_message.as_deref(), Some("Missing values for: Item"));
    }

    #[test]
    fn test_submit_completes_slide() {
        let mut app = test_app(2);
        fill(&mut app, "Widget");
        app.submit();
        assert!(app.is_frozen());

        app.finish_pending();
        assert!(!app.has_pending());
        assert!(app.dialog.sequence().current().is_done());
        assert_eq!(app.dialog.progress(), 50);
        assert_eq!(app.status_message.as_deref(), Some("Items0 done (50% complete)"));
    }

    #[test]
    fn test_failure_keeps_form() {
        let mut app = test_app(1);
        fill(&mut app, "fail");
        app.submit();
        app.finish_pending();

        let slide = app.dialog.sequence().current();
        assert_eq!(slide.phase(), SlidePhase::Active);
        assert_eq!(slide.error(), Some("Action 'create_items' failed: rejected"));
    }

    #[test]
    fn test_unlogged_creation_still_completes() {
        let mut app = test_app(2);
        fill(&mut app, "unlogged");
        app.submit();
        app.finish_pending();

        assert!(app.dialog.sequence().current().is_done());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Items0 done, but it was not logged: Audit error: disk full")
        );
    }

    #[test]
    fn test_dismiss_requires_completion() {
        let mut app = test_app(1);
        app.dismiss();
        assert!(!app.should_quit);

        fill(&mut app, "Widget");
        app.submit();
        app.finish_pending();
        app.dismiss();
        assert!(app.should_quit);
        assert_eq!(app.exit(), &WizardExit::Dismissed);
    }

    #[test]
    fn test_done_action_routes() {
        let mut app = test_app(1);
        assert!(!app.choose_done_action(0).unwrap());

        fill(&mut app, "Widget");
        app.submit();
        app.finish_pending();

        assert!(app.choose_done_action(0).unwrap());
        assert!(app.should_quit);
        assert_eq!(app.exit(), &WizardExit::Route(Route::List("Item".into())));
    }
}
