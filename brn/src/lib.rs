// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;

pub use cli::{Args, LogLevel, NormalizedArgs, build_config, normalize_args, run};
pub use config::{FileConfig, RenameConfig, load_config};
pub use crate::core::commit::{commit, validate};
pub use crate::core::fs::{DiskFs, Entry, FileSystem};
pub use crate::core::pipeline::{RunReport, execute};
pub use crate::core::preview::{Preview, render, report};
pub use crate::core::propagate::apply;
pub use crate::core::snapshot::build;
pub use crate::core::transform::{Transform, compile_patterns, remove_patterns, remove_whitespace};
pub use error::RenameError;
pub use models::{CommitSummary, DirectoryNode, FileNode, NodeKind, PreviewLine};
