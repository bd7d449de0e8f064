// src/config.rs
mod file_config;
mod loader;

pub use file_config::FileConfig;
pub use loader::{CONFIG_FILE_NAME, find_config_file, load_config};

use crate::core::transform::{Transform, compile_patterns};
use crate::error::RenameError;
use glob::Pattern;
use regex::Regex;
use std::path::PathBuf;

/// Everything a run needs, collected once and passed down unchanged.
#[derive(Debug, Clone)]
pub struct RenameConfig {
    pub root: PathBuf,
    pub recurse: bool,
    pub remove_whitespace: bool,
    pub dry_run: bool,
    pub patterns: Vec<Regex>,
    pub exclude: Vec<Pattern>,
}

impl RenameConfig {
    /// A config for `root` with every transform disabled.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recurse: false,
            remove_whitespace: false,
            dry_run: false,
            patterns: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// Appends removal patterns after the ones already configured.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::InvalidPattern`] if any pattern fails to compile.
    pub fn with_patterns(mut self, patterns: &[String]) -> Result<Self, RenameError> {
        self.patterns.extend(compile_patterns(patterns)?);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`RenameError::InvalidExclude`] if any glob is malformed.
    pub fn with_exclude(mut self, globs: &[String]) -> Result<Self, RenameError> {
        for glob in globs {
            let pattern = Pattern::new(glob).map_err(|source| RenameError::InvalidExclude {
                pattern: glob.clone(),
                source,
            })?;
            self.exclude.push(pattern);
        }
        Ok(self)
    }

    /// Enabled transforms in their fixed order: pattern removal, then whitespace removal.
    #[must_use]
    pub fn transforms(&self) -> Vec<Transform> {
        let mut transforms = Vec::new();
        if !self.patterns.is_empty() {
            transforms.push(Transform::RemovePatterns(self.patterns.clone()));
        }
        if self.remove_whitespace {
            transforms.push(Transform::RemoveWhitespace);
        }
        transforms
    }
}
