//! The setup wizard
//!
//! Slides, the sequence that orders them, the dialog around the sequence,
//! and the completion channel the sequence publishes on.

pub mod dialog;
pub mod route;
pub mod sequence;
pub mod signal;
pub mod slide;

pub use dialog::{SubmitResult, UserProgressDialog};
pub use route::{DoneAction, Route, Router, IMPORT_PAGE};
pub use sequence::{CompletionUpdate, ProgressDot, SequenceOptions, SlideSequence};
pub use signal::{CompletionBus, CompletionEvent, Subscription, SubscriptionId};
pub use slide::{Slide, SlidePhase};
