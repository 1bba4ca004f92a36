//! Form field group
//!
//! Holds the live inputs of a slide's form: one `FormField` per definition,
//! the focused field and the last message the form itself produced.

use crate::error::{WizardError, WizardResult};
use crate::models::{FieldDef, FieldType, FieldValues};

use super::input::TextInput;

/// A rendered field: its definition plus the current input
#[derive(Debug, Clone)]
pub struct FormField {
    /// The field definition
    pub def: FieldDef,
    /// Current input
    pub input: TextInput,
}

impl FormField {
    fn new(def: FieldDef) -> Self {
        Self {
            def,
            input: TextInput::new(),
        }
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.def.fieldname
    }

    /// Current value
    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Whether the field counts as empty
    pub fn is_empty(&self) -> bool {
        let value = self.input.value().trim();
        match self.def.fieldtype {
            FieldType::Check => value.is_empty() || value == "0",
            _ => value.is_empty(),
        }
    }

    /// Whether the field accepts typed characters
    pub fn is_text(&self) -> bool {
        !matches!(self.def.fieldtype, FieldType::Select | FieldType::Check)
    }

    /// Step a select field through its options, or flip a checkbox
    pub fn cycle(&mut self, forward: bool) {
        match self.def.fieldtype {
            FieldType::Check => {
                let next = if self.is_empty() { "1" } else { "" };
                self.input.set(next);
            }
            FieldType::Select if !self.def.options.is_empty() => {
                let options = &self.def.options;
                let current = options.iter().position(|o| o == self.input.value());
                let next = match (current, forward) {
                    (None, true) => 0,
                    (None, false) => options.len() - 1,
                    (Some(i), true) => (i + 1) % options.len(),
                    (Some(0), false) => options.len() - 1,
                    (Some(i), false) => i - 1,
                };
                self.input.set(options[next].clone());
            }
            _ => {}
        }
    }
}

/// A group of form fields
#[derive(Debug, Clone, Default)]
pub struct FieldGroup {
    fields: Vec<FormField>,
    focus: usize,
    message: Option<String>,
}

impl FieldGroup {
    /// Build a form from field definitions
    pub fn new(defs: Vec<FieldDef>) -> Self {
        Self {
            fields: defs.into_iter().map(FormField::new).collect(),
            focus: 0,
            message: None,
        }
    }

    /// Append more fields to an already built form
    pub fn add_fields(&mut self, defs: Vec<FieldDef>) {
        self.fields.extend(defs.into_iter().map(FormField::new));
    }

    /// All fields in display order
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Current value of a field
    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(FormField::value)
    }

    /// Set a field's value
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> WizardResult<()> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.def.fieldname == name)
            .ok_or_else(|| WizardError::field_not_found(name))?;
        field.input.set(value);
        self.message = None;
        Ok(())
    }

    /// Names of required fields
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.def.reqd)
            .map(FormField::name)
            .collect()
    }

    /// Names of required fields that are still empty
    pub fn missing_required(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.def.reqd && f.is_empty())
            .map(FormField::name)
            .collect()
    }

    /// Whether every required field has a value
    pub fn required_filled(&self) -> bool {
        self.fields.iter().all(|f| !f.def.reqd || !f.is_empty())
    }

    /// Current values, or `None` if a required field is empty
    pub fn get_values(&self) -> Option<FieldValues> {
        if !self.required_filled() {
            return None;
        }
        Some(
            self.fields
                .iter()
                .map(|f| (f.name().to_string(), f.value().trim().to_string()))
                .collect(),
        )
    }

    /// Collect values for submission, recording a form message on failure
    pub fn collect(&mut self) -> Option<FieldValues> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            let labels: Vec<_> = self
                .fields
                .iter()
                .filter(|f| f.def.reqd && f.is_empty())
                .map(|f| f.def.label.clone())
                .collect();
            self.message = Some(format!("Missing values for: {}", labels.join(", ")));
            return None;
        }

        for field in &self.fields {
            if let Err(e) = field.def.check_value(field.value()) {
                self.message = Some(e);
                return None;
            }
        }

        self.message = None;
        self.get_values()
    }

    /// The form's own validation message, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Index of the focused field
    pub fn focus_index(&self) -> usize {
        self.focus
    }

    /// Move focus to the next field, wrapping
    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    /// Move focus to the previous field, wrapping
    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = if self.focus == 0 {
                self.fields.len() - 1
            } else {
                self.focus - 1
            };
        }
    }

    /// Move focus to a field index
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// The focused field
    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    /// The focused field, mutably; editing clears the form message
    pub fn focused_mut(&mut self) -> Option<&mut FormField> {
        self.message = None;
        self.fields.get_mut(self.focus)
    }
}
