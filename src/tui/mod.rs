//! Terminal User Interface module
//!
//! A ratatui front end for the setup wizard: one centered modal showing the
//! current slide, its progress and the navigation controls.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::{App, WizardExit};
pub use terminal::run_wizard;
