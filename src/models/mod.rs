//! Core data models for onboard
//!
//! Slide descriptors and their form fields describe the wizard; records are
//! what the wizard's actions create.

pub mod field;
pub mod ids;
pub mod record;
pub mod slide;

pub use field::{FieldDef, FieldType, FieldValues};
pub use ids::RecordId;
pub use record::Record;
pub use slide::{SlideDescriptor, SlideSet};
