//! Display formatting for terminal output
//!
//! Tables for records, slides and wizard progress.

pub mod progress;
pub mod records;

pub use progress::{format_slide_list, format_status};
pub use records::format_record_list;
