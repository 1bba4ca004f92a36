//! A single wizard step
//!
//! A slide renders lazily: `make()` builds either the active form or, for a
//! slide that is already done, the done state. A successful primary action
//! moves it from active to done; there is no way back.

use std::fmt;

use super::route::{DoneAction, Route, IMPORT_PAGE};
use crate::actions::ActionRequest;
use crate::error::{WizardError, WizardResult};
use crate::form::{FieldGroup, RepeatBlock};
use crate::models::{FieldValues, SlideDescriptor};

/// Lifecycle of a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePhase {
    /// Not rendered yet
    Unopened,
    /// Showing its form
    Active,
    /// Terminal: showing follow-up actions
    Done,
}

/// Hook run with the slide while it renders
pub type SlideHook = Box<dyn FnMut(&mut Slide)>;

/// Extra check run on collected values before submitting
pub type Validator = Box<dyn Fn(&FieldValues) -> bool>;

#[derive(Default)]
struct SlideHooks {
    before_load: Option<SlideHook>,
    onload: Option<SlideHook>,
    validate: Option<Validator>,
}

impl fmt::Debug for SlideHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideHooks")
            .field("before_load", &self.before_load.is_some())
            .field("onload", &self.onload.is_some())
            .field("validate", &self.validate.is_some())
            .finish()
    }
}

/// One step of the setup wizard
#[derive(Debug)]
pub struct Slide {
    id: usize,
    descriptor: SlideDescriptor,
    phase: SlidePhase,
    visible: bool,
    form: Option<FieldGroup>,
    repeat: Option<RepeatBlock>,
    values: Option<FieldValues>,
    error: Option<String>,
    primary_visible: bool,
    done_actions: Vec<DoneAction>,
    hooks: SlideHooks,
}

impl Slide {
    /// Create an unrendered, hidden slide
    pub fn new(id: usize, descriptor: SlideDescriptor) -> Self {
        Self {
            id,
            descriptor,
            phase: SlidePhase::Unopened,
            visible: false,
            form: None,
            repeat: None,
            values: None,
            error: None,
            primary_visible: false,
            done_actions: Vec::new(),
            hooks: SlideHooks::default(),
        }
    }

    /// Run a hook before the slide first renders
    pub fn before_load(mut self, hook: impl FnMut(&mut Slide) + 'static) -> Self {
        self.hooks.before_load = Some(Box::new(hook));
        self
    }

    /// Run a hook each time the form is built
    pub fn onload(mut self, hook: impl FnMut(&mut Slide) + 'static) -> Self {
        self.hooks.onload = Some(Box::new(hook));
        self
    }

    /// Reject submissions the validator returns `false` for
    pub fn validate_with(mut self, validator: impl Fn(&FieldValues) -> bool + 'static) -> Self {
        self.hooks.validate = Some(Box::new(validator));
        self
    }

    /// Render the slide; later calls do nothing
    pub fn make(&mut self) {
        if self.phase != SlidePhase::Unopened {
            return;
        }

        if let Some(mut hook) = self.hooks.before_load.take() {
            hook(self);
            self.hooks.before_load = Some(hook);
        }

        self.phase = if self.descriptor.done {
            SlidePhase::Done
        } else {
            SlidePhase::Active
        };
        self.refresh();
    }

    /// Rebuild the body for the current phase
    pub fn refresh(&mut self) {
        match self.phase {
            SlidePhase::Unopened => {}
            SlidePhase::Active => self.setup_form(),
            SlidePhase::Done => self.setup_done_state(),
        }
    }

    fn setup_form(&mut self) {
        let fields = if self.descriptor.add_more {
            let mut block = RepeatBlock::new(
                self.descriptor.fields.clone(),
                self.descriptor.max_count,
                self.descriptor.mandatory_entry,
            );
            let first = block.next_instance().unwrap_or_default();
            self.repeat = Some(block);
            first
        } else {
            self.repeat = None;
            self.descriptor.fields.clone()
        };

        self.form = Some(FieldGroup::new(fields));
        self.primary_visible = true;
        self.done_actions.clear();

        if let Some(mut hook) = self.hooks.onload.take() {
            hook(self);
            self.hooks.onload = Some(hook);
        }
    }

    fn setup_done_state(&mut self) {
        self.form = None;
        self.repeat = None;
        self.primary_visible = false;
        self.done_actions = done_actions_for(&self.descriptor);
    }

    /// Make the slide visible
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the slide
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Append another instance of the repeatable field block.
    ///
    /// Returns `false` when the slide has no repeatable block or the block is
    /// at its maximum.
    pub fn add_more(&mut self) -> bool {
        let (Some(block), Some(form)) = (self.repeat.as_mut(), self.form.as_mut()) else {
            return false;
        };

        match block.next_instance() {
            Some(fields) => {
                form.add_fields(fields);
                true
            }
            None => false,
        }
    }

    /// Whether the "Add More" affordance is offered
    pub fn can_add_more(&self) -> bool {
        self.phase == SlidePhase::Active
            && self.repeat.as_ref().map(RepeatBlock::can_add).unwrap_or(false)
    }

    /// Number of repeated blocks rendered so far
    pub fn block_count(&self) -> usize {
        self.repeat.as_ref().map(RepeatBlock::count).unwrap_or(0)
    }

    /// Set a form value
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> WizardResult<()> {
        let form = self.form.as_mut().ok_or_else(|| {
            WizardError::Validation(format!("Slide '{}' has no active form", self.descriptor.name))
        })?;
        form.set_value(name, value)?;
        self.error = None;
        Ok(())
    }

    /// Whether the primary button can be pressed
    pub fn primary_enabled(&self) -> bool {
        self.phase == SlidePhase::Active
            && self.primary_visible
            && self.form.as_ref().map(FieldGroup::required_filled).unwrap_or(false)
    }

    /// Collect and check values, producing the action to run.
    ///
    /// Returns `None` when a required field is empty, a field value is
    /// invalid, or the validation hook rejects the values.
    pub fn prepare_submit(&mut self) -> Option<ActionRequest> {
        if self.phase != SlidePhase::Active {
            return None;
        }

        let values = self.form.as_mut()?.collect()?;

        if let Some(validate) = &self.hooks.validate {
            if !validate(&values) {
                return None;
            }
        }

        let request = ActionRequest::new(self.id, &self.descriptor.method, &values);
        self.values = Some(values);
        Some(request)
    }

    /// Enter the done state after a successful action.
    ///
    /// Returns `false` if the slide was already done.
    pub fn complete(&mut self) -> bool {
        if self.phase == SlidePhase::Done {
            return false;
        }
        self.phase = SlidePhase::Done;
        self.error = None;
        self.refresh();
        true
    }

    /// Record a failed action; the slide keeps its form
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn descriptor(&self) -> &SlideDescriptor {
        &self.descriptor
    }

    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == SlidePhase::Done || (self.phase == SlidePhase::Unopened && self.descriptor.done)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The live form while active
    pub fn form(&self) -> Option<&FieldGroup> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FieldGroup> {
        self.form.as_mut()
    }

    /// Values from the last accepted submit
    pub fn values(&self) -> Option<&FieldValues> {
        self.values.as_ref()
    }

    /// Message from the last failed action
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the primary button is shown at all
    pub fn primary_visible(&self) -> bool {
        self.primary_visible
    }

    /// Follow-up actions shown in the done state
    pub fn done_actions(&self) -> &[DoneAction] {
        &self.done_actions
    }
}

/// Follow-up actions for a finished slide
pub fn done_actions_for(descriptor: &SlideDescriptor) -> Vec<DoneAction> {
    if let Some(doctype) = &descriptor.doctype {
        let mut actions = vec![DoneAction::new(
            format!("Go to {}", descriptor.name),
            Route::List(doctype.clone()),
        )];
        if let Some(sec_doctype) = &descriptor.sec_doctype {
            actions.push(DoneAction::new(
                format!("Go to {}s", sec_doctype),
                Route::List(sec_doctype.clone()),
            ));
        }
        actions.push(DoneAction::new(
            format!("Import {}", descriptor.name),
            Route::Page(IMPORT_PAGE.to_string()),
        ));
        actions
    } else if let Some(route) = &descriptor.route {
        vec![DoneAction::new("Check it out", Route::parse(route))]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::split_instance_name;
    use crate::models::FieldDef;
    use std::cell::Cell;
    use std::rc::Rc;

    fn customers() -> SlideDescriptor {
        let mut descriptor = SlideDescriptor::new(
            "Customers",
            "Add Customers",
            "create_customers",
            vec![
                FieldDef::new("customer_type", "Type").static_label(),
                FieldDef::new("customer", "Customer"),
                FieldDef::new("customer_contact", "Contact"),
            ],
        );
        descriptor.add_more = true;
        descriptor.max_count = 3;
        descriptor.mandatory_entry = true;
        descriptor.doctype = Some("Customer".into());
        descriptor.sec_doctype = Some("Contact".into());
        descriptor
    }

    fn titled() -> SlideDescriptor {
        SlideDescriptor::new(
            "Welcome",
            "Welcome",
            "create_items",
            vec![FieldDef::new("title", "Title").required()],
        )
    }

    #[test]
    fn test_unopened_until_made() {
        let mut slide = Slide::new(0, titled());
        assert_eq!(slide.phase(), SlidePhase::Unopened);
        assert!(slide.form().is_none());
        assert!(!slide.is_visible());

        slide.make();
        assert_eq!(slide.phase(), SlidePhase::Active);
        assert!(slide.form().is_some());
    }

    #[test]
    fn test_make_is_idempotent() {
        let mut slide = Slide::new(0, titled());
        slide.make();
        slide.set_value("title", "kept").unwrap();
        slide.make();
        assert_eq!(slide.form().unwrap().value("title"), Some("kept"));
    }

    #[test]
    fn test_initially_done_renders_done_state() {
        let mut descriptor = customers();
        descriptor.done = true;
        let mut slide = Slide::new(0, descriptor);
        slide.make();

        assert_eq!(slide.phase(), SlidePhase::Done);
        assert!(slide.form().is_none());
        assert!(!slide.primary_enabled());
        assert_eq!(slide.done_actions().len(), 3);
    }

    #[test]
    fn test_primary_enabled_tracks_required_fields() {
        let mut slide = Slide::new(0, titled());
        slide.make();
        assert!(!slide.primary_enabled());

        slide.set_value("title", "Hello").unwrap();
        assert!(slide.primary_enabled());

        slide.set_value("title", "").unwrap();
        assert!(!slide.primary_enabled());
    }

    #[test]
    fn test_add_more_suffixes_and_max() {
        let mut slide = Slide::new(0, customers());
        slide.make();
        assert_eq!(slide.block_count(), 1);

        assert!(slide.add_more());
        assert!(slide.add_more());
        assert!(!slide.can_add_more());
        assert!(!slide.add_more());

        let names: Vec<_> = slide
            .form()
            .unwrap()
            .fields()
            .iter()
            .map(|f| f.name())
            .filter(|name| matches!(split_instance_name(name), Some(("customer", _))))
            .collect();
        assert_eq!(names, ["customer_1", "customer_2", "customer_3"]);

        // only the first block's name is mandatory
        assert_eq!(slide.form().unwrap().required_fields(), ["customer_1"]);
    }

    #[test]
    fn test_submit_blocked_by_empty_required() {
        let mut slide = Slide::new(0, titled());
        slide.make();
        assert!(slide.prepare_submit().is_none());
        assert_eq!(slide.phase(), SlidePhase::Active);
    }

    #[test]
    fn test_submit_builds_request() {
        let mut slide = Slide::new(4, titled());
        slide.make();
        slide.set_value("title", " Hello ").unwrap();

        let request = slide.prepare_submit().unwrap();
        assert_eq!(request.slide, 4);
        assert_eq!(request.method, "create_items");
        assert_eq!(request.args["args_data"]["title"], "Hello");
        assert_eq!(slide.values().unwrap()["title"], "Hello");
    }

    #[test]
    fn test_validator_can_reject() {
        let mut slide = Slide::new(0, titled())
            .validate_with(|values| values.get("title").map(|t| t.len() > 3).unwrap_or(false));
        slide.make();

        slide.set_value("title", "abc").unwrap();
        assert!(slide.prepare_submit().is_none());

        slide.set_value("title", "abcd").unwrap();
        assert!(slide.prepare_submit().is_some());
    }

    #[test]
    fn test_hooks_run() {
        let loads = Rc::new(Cell::new(0));
        let counter = Rc::clone(&loads);
        let mut slide = Slide::new(0, titled())
            .before_load(|s| s.show())
            .onload(move |s| {
                counter.set(counter.get() + 1);
                s.set_value("title", "prefilled").unwrap();
            });

        slide.make();
        assert!(slide.is_visible());
        assert_eq!(loads.get(), 1);
        assert!(slide.primary_enabled());
    }

    #[test]
    fn test_complete_is_one_way() {
        let mut slide = Slide::new(0, customers());
        slide.make();
        slide.fail("boom");
        assert_eq!(slide.error(), Some("boom"));
        assert_eq!(slide.phase(), SlidePhase::Active);

        assert!(slide.complete());
        assert_eq!(slide.phase(), SlidePhase::Done);
        assert!(slide.error().is_none());
        assert!(!slide.primary_visible());
        assert!(!slide.can_add_more());
        assert!(slide.prepare_submit().is_none());
        assert!(!slide.complete());
    }

    #[test]
    fn test_done_actions_with_doctype() {
        let actions = done_actions_for(&customers());
        let labels: Vec<_> = actions.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, ["Go to Customers", "Go to Contacts", "Import Customers"]);
        assert_eq!(actions[0].route, Route::List("Customer".into()));
        assert_eq!(actions[2].route, Route::Page(IMPORT_PAGE.into()));
    }

    #[test]
    fn test_done_actions_with_route_only() {
        let mut descriptor = titled();
        descriptor.route = Some("List/User".into());
        let actions = done_actions_for(&descriptor);
        assert_eq!(actions, vec![DoneAction::new("Check it out", Route::List("User".into()))]);

        descriptor.route = None;
        assert!(done_actions_for(&descriptor).is_empty());
    }
}
