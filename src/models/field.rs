//! Form field definitions
//!
//! A slide's form is described by a list of `FieldDef`s. Field values are
//! always kept as strings; the field type only drives input handling and
//! value checks.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Values collected from a form, keyed by field name
pub type FieldValues = BTreeMap<String, String>;

/// The kind of input a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free text
    #[default]
    Data,
    /// An email address
    Email,
    /// Choice from `options`
    Select,
    /// Boolean checkbox, stored as "1" or ""
    Check,
    /// Whole number
    Int,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data => write!(f, "Data"),
            Self::Email => write!(f, "Email"),
            Self::Select => write!(f, "Select"),
            Self::Check => write!(f, "Check"),
            Self::Int => write!(f, "Int"),
        }
    }
}

/// A single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Key under which the value is collected
    pub fieldname: String,

    /// Label shown next to the input
    #[serde(default)]
    pub label: String,

    /// Input kind
    #[serde(default)]
    pub fieldtype: FieldType,

    /// Choices for select fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Whether a value is required before the slide can be submitted
    #[serde(default)]
    pub reqd: bool,

    /// Keep the label unchanged when the field is repeated
    #[serde(default, rename = "static")]
    pub static_label: bool,

    /// Hint shown while the input is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FieldDef {
    /// Create a plain data field
    pub fn new(fieldname: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            fieldname: fieldname.into(),
            label: label.into(),
            fieldtype: FieldType::Data,
            options: Vec::new(),
            reqd: false,
            static_label: false,
            placeholder: None,
        }
    }

    /// Set the field type
    pub fn fieldtype(mut self, fieldtype: FieldType) -> Self {
        self.fieldtype = fieldtype;
        self
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.reqd = true;
        self
    }

    /// Set select options
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Keep the label fixed across repeated instances
    pub fn static_label(mut self) -> Self {
        self.static_label = true;
        self
    }

    /// Check a non-empty value against the field type
    pub fn check_value(&self, value: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(());
        }

        match self.fieldtype {
            FieldType::Data => Ok(()),
            FieldType::Email => {
                let valid = value
                    .split_once('@')
                    .map(|(user, domain)| !user.is_empty() && domain.contains('.'))
                    .unwrap_or(false);
                if valid {
                    Ok(())
                } else {
                    Err(format!("{}: '{}' is not a valid email address", self.label, value))
                }
            }
            FieldType::Select => {
                if self.options.iter().any(|o| o == value) {
                    Ok(())
                } else {
                    Err(format!("{}: '{}' is not one of the options", self.label, value))
                }
            }
            FieldType::Check => match value {
                "0" | "1" => Ok(()),
                _ => Err(format!("{}: expected 0 or 1", self.label)),
            },
            FieldType::Int => value
                .parse::<i64>()
                .map(|_| ())
                .map_err(|_| format!("{}: '{}' is not a whole number", self.label, value)),
        }
    }

    /// Check that the definition itself is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.fieldname.trim().is_empty() {
            return Err("Field name cannot be empty".into());
        }
        if self.fieldtype == FieldType::Select && self.options.is_empty() {
            return Err(format!("Select field '{}' has no options", self.fieldname));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_check() {
        let field = FieldDef::new("email", "Email").fieldtype(FieldType::Email);
        assert!(field.check_value("jane@example.com").is_ok());
        assert!(field.check_value("").is_ok());
        assert!(field.check_value("jane").is_err());
        assert!(field.check_value("@example.com").is_err());
    }

    #[test]
    fn test_select_check() {
        let field = FieldDef::new("uom", "Unit")
            .fieldtype(FieldType::Select)
            .options(["Unit", "Nos", "Kg"]);
        assert!(field.check_value("Kg").is_ok());
        assert!(field.check_value("Litre").is_err());
    }

    #[test]
    fn test_int_check() {
        let field = FieldDef::new("qty", "Qty").fieldtype(FieldType::Int);
        assert!(field.check_value("12").is_ok());
        assert!(field.check_value("1.5").is_err());
    }

    #[test]
    fn test_validate_definition() {
        assert!(FieldDef::new("", "Nothing").validate().is_err());
        assert!(FieldDef::new("uom", "Unit")
            .fieldtype(FieldType::Select)
            .validate()
            .is_err());
        assert!(FieldDef::new("customer", "Customer").validate().is_ok());
    }

    #[test]
    fn test_yaml_static_flag() {
        let yaml = "fieldname: contact\nlabel: Contact\nstatic: true\nreqd: true\n";
        let field: FieldDef = serde_yaml::from_str(yaml).unwrap();
        assert!(field.static_label);
        assert!(field.reqd);
        assert_eq!(field.fieldtype, FieldType::Data);
    }
}
