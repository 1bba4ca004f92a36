//! Form rendering state for slides
//!
//! `FieldGroup` is the live form of a slide; `repeat` expands field templates
//! for slides whose field block can be repeated.

pub mod field_group;
pub mod input;
pub mod repeat;

pub use field_group::{FieldGroup, FormField};
pub use input::TextInput;
pub use repeat::{instance_fields, split_instance_name, RepeatBlock};
