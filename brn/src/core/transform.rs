// src/core/transform.rs
use crate::error::RenameError;
use regex::Regex;

/// A name rewrite applied uniformly across the whole tree.
#[derive(Debug, Clone)]
pub enum Transform {
    RemovePatterns(Vec<Regex>),
    RemoveWhitespace,
}

impl Transform {
    #[inline]
    #[must_use]
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::RemovePatterns(patterns) => remove_patterns(name, patterns),
            Self::RemoveWhitespace => remove_whitespace(name),
        }
    }
}

/// Compiles removal patterns in order, stopping at the first invalid one.
///
/// # Errors
///
/// Returns [`RenameError::InvalidPattern`] naming the pattern that failed to compile.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>, RenameError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| RenameError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Removes every match of each pattern, feeding each pattern the previous one's output.
#[must_use]
pub fn remove_patterns(name: &str, patterns: &[Regex]) -> String {
    patterns
        .iter()
        .fold(name.to_owned(), |updated, pattern| {
            pattern.replace_all(&updated, "").into_owned()
        })
}

/// Deletes literal spaces. Tabs and other whitespace are left alone.
#[must_use]
pub fn remove_whitespace(name: &str) -> String {
    name.replace(' ', "")
}
