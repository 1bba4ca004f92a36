//! onboard - Terminal setup wizard
//!
//! This library provides the core of a multi-slide setup wizard: each slide
//! shows a small form, runs a domain action when submitted, and switches to
//! a done state with follow-up actions. The sequence tracks aggregate
//! completion and announces once when every slide is done.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Slide descriptors, field definitions and records
//! - `form`: Live form state (inputs, focus, repeatable blocks)
//! - `wizard`: Slides, the slide sequence and the dialog around it
//! - `actions`: Domain actions and the worker that runs them
//! - `storage`: JSON file storage layer
//! - `services`: Slide lookup, progress and CSV import
//! - `audit`: Audit logging system
//! - `display`: Table formatting for CLI output
//! - `cli`: CLI command handlers
//! - `tui`: Terminal user interface
//!
//! # Example
//!
//! ```rust,ignore
//! use onboard::models::SlideSet;
//! use onboard::wizard::{SequenceOptions, SlideSequence, UserProgressDialog};
//!
//! let set = SlideSet::builtin()?;
//! let sequence = SlideSequence::new(set.slides, SequenceOptions::default())?;
//! let mut dialog = UserProgressDialog::new("Complete Setup", sequence);
//! dialog.show();
//! ```

pub mod actions;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;
pub mod wizard;

pub use error::{WizardError, WizardResult};
