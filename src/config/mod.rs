//! Configuration module for onboard
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::OnboardPaths;
pub use settings::Settings;
