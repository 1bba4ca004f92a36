//! Slide descriptors
//!
//! The static configuration of one wizard step. Descriptors are read from
//! YAML; a default set is compiled into the binary.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::field::FieldDef;
use crate::error::{WizardError, WizardResult};

const DEFAULT_SLIDES: &str = include_str!("../../assets/default_slides.yaml");

/// Static configuration of a single slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDescriptor {
    /// Short name, used in done-state action labels ("Go to Customers")
    pub name: String,

    /// Heading shown above the form
    pub title: String,

    /// Optional help text below the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Optional illustration reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,

    /// Form fields (the template when `add_more` is set)
    #[serde(default)]
    pub fields: Vec<FieldDef>,

    /// Whether the field block can be repeated
    #[serde(default)]
    pub add_more: bool,

    /// Maximum number of repeated blocks
    #[serde(default = "default_max_count")]
    pub max_count: usize,

    /// Make the second field of the first block required
    #[serde(default)]
    pub mandatory_entry: bool,

    /// Domain-action method invoked by the primary button
    pub method: String,

    /// Record type the slide creates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctype: Option<String>,

    /// Related record type offered after completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sec_doctype: Option<String>,

    /// Page to open after completion when there is no doctype
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    /// Initial completion state
    #[serde(default)]
    pub done: bool,
}

fn default_max_count() -> usize {
    3
}

impl SlideDescriptor {
    /// Create a descriptor with the given fields and method
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        method: impl Into<String>,
        fields: Vec<FieldDef>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            help: None,
            image_src: None,
            fields,
            add_more: false,
            max_count: default_max_count(),
            mandatory_entry: false,
            method: method.into(),
            doctype: None,
            sec_doctype: None,
            route: None,
            done: false,
        }
    }

    /// Validate the descriptor
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Slide name cannot be empty".into());
        }
        if self.method.trim().is_empty() {
            return Err(format!("Slide '{}' has no method", self.name));
        }
        if self.add_more && self.max_count == 0 {
            return Err(format!("Slide '{}' allows repeats but max_count is 0", self.name));
        }
        for field in &self.fields {
            field
                .validate()
                .map_err(|e| format!("Slide '{}': {}", self.name, e))?;
        }
        Ok(())
    }
}

/// File layout of a slide definition document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlideSet {
    /// Slides in display order
    #[serde(default)]
    pub slides: Vec<SlideDescriptor>,
}

impl SlideSet {
    /// Parse and validate a YAML slide definition
    pub fn from_yaml(yaml: &str) -> WizardResult<Self> {
        let set: SlideSet = serde_yaml::from_str(yaml)?;
        set.validate()?;
        Ok(set)
    }

    /// Load slide definitions from a YAML file
    pub fn load(path: &Path) -> WizardResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            WizardError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&contents)
    }

    /// The built-in slide set
    pub fn builtin() -> WizardResult<Self> {
        Self::from_yaml(DEFAULT_SLIDES)
    }

    /// Raw text of the built-in slide set
    pub fn builtin_yaml() -> &'static str {
        DEFAULT_SLIDES
    }

    /// Validate every slide
    pub fn validate(&self) -> WizardResult<()> {
        if self.slides.is_empty() {
            return Err(WizardError::NoSlides);
        }
        for slide in &self.slides {
            slide.validate().map_err(WizardError::Validation)?;
        }
        Ok(())
    }
}
