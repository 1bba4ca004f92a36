//! Service layer for onboard
//!
//! Business logic between the storage layer and the front ends: where slide
//! definitions come from, which slides are already done, and CSV import.

pub mod import;
pub mod progress;
pub mod slides;

pub use import::{ImportResult, ImportService};
pub use progress::{slide_doctype, ProgressRecorder, ProgressService, ProgressSummary, SlideStatus};
pub use slides::{SlideService, SlideSource};
