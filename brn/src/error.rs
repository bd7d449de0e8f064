// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the rename pipeline. Every variant aborts the run.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("invalid removal pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid exclude glob `{pattern}`")]
    InvalidExclude {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to list directory {}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to rename {} -> {}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} would be renamed to an empty name", path.display())]
    EmptyName { path: PathBuf },

    #[error("{} would be renamed to `{name}`", path.display())]
    InvalidName { path: PathBuf, name: String },
}
