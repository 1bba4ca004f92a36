//! Custom error types for onboard
//!
//! This module defines the error hierarchy for the wizard and its
//! collaborators using thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for onboard operations
#[derive(Error, Debug)]
pub enum WizardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML slide definition errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for descriptors, fields and action arguments
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A slide index outside the sequence
    #[error("Slide index {index} out of range (sequence has {len} slides)")]
    SlideOutOfRange { index: usize, len: usize },

    /// A sequence was built from an empty descriptor list
    #[error("A setup wizard needs at least one slide")]
    NoSlides,

    /// No handler registered for a domain-action method
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    /// A domain action failed while running
    #[error("Action '{method}' failed: {message}")]
    Action { method: String, message: String },

    /// Dismiss was requested before every slide was done
    #[error("Setup is not complete yet; dismiss is unavailable")]
    DismissLocked,

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Audit log errors
    #[error("Audit error: {0}")]
    Audit(String),
}

impl WizardError {
    /// Create a "not found" error for form fields
    pub fn field_not_found(fieldname: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Field",
            identifier: fieldname.into(),
        }
    }

    /// Create an action failure for a method
    pub fn action(method: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Action {
            method: method.into(),
            message: message.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for WizardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WizardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for WizardError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for onboard operations
pub type WizardResult<T> = Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WizardError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = WizardError::field_not_found("customer_1");
        assert_eq!(err.to_string(), "Field not found: customer_1");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_out_of_range_error() {
        let err = WizardError::SlideOutOfRange { index: 4, len: 3 };
        assert_eq!(
            err.to_string(),
            "Slide index 4 out of range (sequence has 3 slides)"
        );
    }

    #[test]
    fn test_action_error() {
        let err = WizardError::action("create_customers", "no customer names given");
        assert_eq!(
            err.to_string(),
            "Action 'create_customers' failed: no customer names given"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WizardError = io_err.into();
        assert!(matches!(err, WizardError::Io(_)));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{ not: [a list").unwrap_err();
        let err: WizardError = yaml_err.into();
        assert!(matches!(err, WizardError::Yaml(_)));
    }
}
