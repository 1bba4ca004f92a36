//! The setup dialog
//!
//! Wraps a `SlideSequence` with the dialog chrome: a title, the "Create"
//! primary button, and a dismiss control that stays hidden until every
//! slide is done.

use super::sequence::{CompletionUpdate, SlideSequence};
use super::signal::{CompletionEvent, Subscription};
use crate::actions::{ActionOutcome, ActionRequest};
use crate::error::{WizardError, WizardResult};

pub const PRIMARY_LABEL: &str = "Create";
pub const DISMISS_LABEL: &str = "Dismiss";

/// What applying an action outcome did to its slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// The slide is done
    Completed(CompletionUpdate),
    /// The slide kept its form and shows this message
    Failed(String),
}

/// Modal wizard over a slide sequence
#[derive(Debug)]
pub struct UserProgressDialog {
    title: String,
    sequence: SlideSequence,
    subscription: Option<Subscription>,
    dismiss_visible: bool,
    open: bool,
    progress: u8,
}

impl UserProgressDialog {
    pub fn new(title: impl Into<String>, mut sequence: SlideSequence) -> Self {
        let subscription = sequence.subscribe();
        let progress = sequence.completion_percent();
        let dismiss_visible = sequence.is_complete();
        Self {
            title: title.into(),
            sequence,
            subscription: Some(subscription),
            dismiss_visible,
            open: false,
            progress,
        }
    }

    /// Open the dialog
    pub fn show(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Last published completion percentage
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn sequence(&self) -> &SlideSequence {
        &self.sequence
    }

    pub fn sequence_mut(&mut self) -> &mut SlideSequence {
        &mut self.sequence
    }

    /// Apply completion events published since the last poll
    pub fn poll_signals(&mut self) -> Vec<CompletionEvent> {
        let events = self
            .subscription
            .as_ref()
            .map(Subscription::drain)
            .unwrap_or_default();

        for event in &events {
            match event {
                CompletionEvent::Progress(percent) => self.progress = *percent,
                CompletionEvent::SetupComplete => self.dismiss_visible = true,
            }
        }
        events
    }

    pub fn primary_label(&self) -> &'static str {
        PRIMARY_LABEL
    }

    /// Whether "Create" can be pressed on the current slide
    pub fn primary_enabled(&self) -> bool {
        self.open && self.sequence.current().primary_enabled()
    }

    /// Collect the current slide's values into a request
    pub fn submit(&mut self) -> Option<ActionRequest> {
        if !self.open {
            return None;
        }
        self.sequence.current_mut().prepare_submit()
    }

    /// Feed a finished call back into its slide
    pub fn apply_outcome(&mut self, outcome: ActionOutcome) -> WizardResult<SubmitResult> {
        let index = outcome.request.slide;
        match outcome.result {
            Ok(_) => {
                let update = self.sequence.complete_slide(index)?;
                self.poll_signals();
                Ok(SubmitResult::Completed(update))
            }
            Err(e) => {
                let message = e.to_string();
                self.sequence.fail_slide(index, message.clone())?;
                Ok(SubmitResult::Failed(message))
            }
        }
    }

    pub fn dismiss_label(&self) -> &'static str {
        DISMISS_LABEL
    }

    pub fn dismiss_visible(&self) -> bool {
        self.dismiss_visible
    }

    /// Close the dialog once setup is complete
    pub fn dismiss(&mut self) -> WizardResult<()> {
        if !self.dismiss_visible {
            return Err(WizardError::DismissLocked);
        }
        self.close();
        Ok(())
    }

    /// Close the dialog and stop listening for completion events
    pub fn close(&mut self) {
        self.open = false;
        if let Some(subscription) = self.subscription.take() {
            self.sequence.unsubscribe(subscription.id());
        }
    }
}

impl Drop for UserProgressDialog {
    fn drop(&mut self) {
        self.close();
    }
}
