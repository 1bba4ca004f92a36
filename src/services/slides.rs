//! Slide definition lookup
//!
//! Decides which slide definitions a run uses and writes the built-in set
//! out for editing.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{OnboardPaths, Settings};
use crate::error::{WizardError, WizardResult};
use crate::models::SlideSet;

/// Where a slide set was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideSource {
    /// `--slides` on the command line
    Flag(PathBuf),
    /// `slides_file` in the settings
    Settings(PathBuf),
    /// `slides.yaml` in the base directory
    BaseDir(PathBuf),
    /// Compiled into the binary
    Builtin,
}

impl fmt::Display for SlideSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(path) => write!(f, "{} (--slides)", path.display()),
            Self::Settings(path) => write!(f, "{} (settings)", path.display()),
            Self::BaseDir(path) => write!(f, "{}", path.display()),
            Self::Builtin => write!(f, "built-in"),
        }
    }
}

/// Service for locating slide definitions
pub struct SlideService<'a> {
    paths: &'a OnboardPaths,
    settings: &'a Settings,
}

impl<'a> SlideService<'a> {
    pub fn new(paths: &'a OnboardPaths, settings: &'a Settings) -> Self {
        Self { paths, settings }
    }

    /// Pick the slide source: the flag, then the settings, then the base
    /// directory file, then the built-in set
    pub fn source(&self, flag: Option<&Path>) -> SlideSource {
        if let Some(path) = flag {
            return SlideSource::Flag(path.to_path_buf());
        }
        if let Some(path) = &self.settings.slides_file {
            return SlideSource::Settings(path.clone());
        }
        let local = self.paths.slides_file();
        if local.exists() {
            return SlideSource::BaseDir(local);
        }
        SlideSource::Builtin
    }

    /// Load and validate the slides a run should use
    pub fn load(&self, flag: Option<&Path>) -> WizardResult<(SlideSource, SlideSet)> {
        let source = self.source(flag);
        let set = match &source {
            SlideSource::Flag(path) | SlideSource::Settings(path) | SlideSource::BaseDir(path) => {
                SlideSet::load(path)?
            }
            SlideSource::Builtin => SlideSet::builtin()?,
        };
        Ok((source, set))
    }

    /// Write the built-in slides to `slides.yaml` in the base directory
    pub fn init_slides(&self, force: bool) -> WizardResult<PathBuf> {
        let path = self.paths.slides_file();
        if path.exists() && !force {
            return Err(WizardError::Config(format!(
                "{} already exists; use --force to overwrite",
                path.display()
            )));
        }

        self.paths.ensure_directories()?;
        std::fs::write(&path, SlideSet::builtin_yaml())
            .map_err(|e| WizardError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
        Ok(path)
    }
}
