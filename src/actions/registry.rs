//! Method registry

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::records::CreateRecords;
use super::{args_data, DomainAction};
use crate::audit::AuditLogger;
use crate::error::{WizardError, WizardResult};
use crate::models::FieldValues;
use crate::storage::Storage;

/// Handles one registered method
pub trait ActionHandler: Send + Sync {
    /// Run with the request's `args_data`
    fn handle(&self, method: &str, values: &FieldValues) -> WizardResult<Value>;

    /// Doctype of the records this handler creates, if any
    fn doctype(&self) -> Option<&str> {
        None
    }
}

/// Maps method names to handlers
#[derive(Default)]
pub struct ActionRegistry {
    handlers: HashMap<String, Box<dyn ActionHandler>>,
}

impl ActionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in record-creating methods
    pub fn with_defaults(storage: Arc<Storage>, audit: Option<AuditLogger>) -> Self {
        let mut registry = Self::new();

        let builtin = [
            ("create_customers", "Customer", "customer", Some("customer_contact")),
            ("create_suppliers", "Supplier", "supplier", Some("supplier_contact")),
            ("create_items", "Item", "item", None),
            ("create_users", "User", "user_email", None),
        ];

        for (method, doctype, key_field, contact_field) in builtin {
            let mut handler = CreateRecords::new(Arc::clone(&storage), doctype, key_field);
            if let Some(field) = contact_field {
                handler = handler.with_contact_field(field);
            }
            if let Some(logger) = &audit {
                handler = handler.with_audit(logger.clone());
            }
            registry.register(method, handler);
        }

        registry
    }

    /// Register or replace a handler
    pub fn register(&mut self, method: impl Into<String>, handler: impl ActionHandler + 'static) {
        self.handlers.insert(method.into(), Box::new(handler));
    }

    /// Whether a method is registered
    pub fn contains(&self, method: &str) -> bool {
        self.handlers.contains_key(method)
    }

    /// Doctype created by a method
    pub fn doctype_for(&self, method: &str) -> Option<&str> {
        self.handlers.get(method).and_then(|h| h.doctype())
    }

    /// Registered method names, sorted
    pub fn methods(&self) -> Vec<&str> {
        let mut methods: Vec<_> = self.handlers.keys().map(String::as_str).collect();
        methods.sort_unstable();
        methods
    }
}

impl DomainAction for ActionRegistry {
    fn call(&self, method: &str, args: &Value) -> WizardResult<Value> {
        let handler = self
            .handlers
            .get(method)
            .ok_or_else(|| WizardError::UnknownMethod(method.to_string()))?;

        let values = args_data(method, args)?;
        handler.handle(method, &values)
    }
}
