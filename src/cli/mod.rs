//! CLI command handlers
//!
//! Bridges clap argument parsing with the wizard and the service layer.

pub mod records;
pub mod wizard;

pub use records::{handle_import_command, handle_records_command, TerminalRouter};
pub use wizard::{
    build_dialog, handle_init_slides_command, handle_run_command, handle_slides_command,
    handle_status_command, WizardContext,
};
