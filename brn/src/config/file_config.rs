// src/config/file_config.rs
use serde::Deserialize;

/// Contents of a `brn.toml` file. Every key is optional.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub recurse: bool,
    pub remove_whitespace: bool,
    pub dry_run: bool,
    /// Applied before any patterns given on the command line.
    pub patterns: Vec<String>,
    /// Globs matched against bare entry names.
    pub exclude: Vec<String>,
}
