//! Domain actions invoked by a slide's primary button
//!
//! A slide names a `method`; the `DomainAction` collaborator runs it with the
//! slide's collected values wrapped as `{"args_data": {...}}`. The local
//! implementation is an `ActionRegistry` of named handlers, run off the UI
//! thread by `ActionDispatcher`.

pub mod dispatcher;
pub mod records;
pub mod registry;

pub use dispatcher::{ActionDispatcher, ActionOutcome, PendingCall};
pub use records::{CreateRecords, AUDIT_ERROR_KEY};
pub use registry::{ActionHandler, ActionRegistry};

use serde_json::{json, Value};

use crate::error::{WizardError, WizardResult};
use crate::models::FieldValues;

/// Runs a named method with an argument bag
pub trait DomainAction: Send + Sync {
    /// Invoke `method`; returns the method's result payload
    fn call(&self, method: &str, args: &Value) -> WizardResult<Value>;
}

/// Display hints for a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallOptions {
    /// Block all interaction until the call finishes
    pub freeze: bool,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self { freeze: true }
    }
}

/// A submit request produced by a slide
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    /// Index of the submitting slide
    pub slide: usize,
    /// Method to invoke
    pub method: String,
    /// Argument bag
    pub args: Value,
}

impl ActionRequest {
    /// Wrap collected values as `{"args_data": values}`
    pub fn new(slide: usize, method: impl Into<String>, values: &FieldValues) -> Self {
        Self {
            slide,
            method: method.into(),
            args: json!({ "args_data": values }),
        }
    }
}

/// Extract the `args_data` object of an argument bag as field values
pub fn args_data(method: &str, args: &Value) -> WizardResult<FieldValues> {
    let data = args
        .get("args_data")
        .and_then(Value::as_object)
        .ok_or_else(|| WizardError::action(method, "missing args_data"))?;

    Ok(data
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect())
}
