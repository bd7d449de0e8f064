// src/config/loader.rs
use crate::config::FileConfig;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "brn.toml";

/// Looks for a `brn.toml` starting at `dir` and walking up through its
/// parents, returning the first one found.
///
/// # Errors
///
/// Returns an error if `dir` is relative and the current directory cannot be read.
pub fn find_config_file(dir: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()?.join(dir)
    };

    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    Ok(None)
}

/// Loads the file config for a run rooted at `dir`.
///
/// An `explicit` path must exist. Otherwise the nearest `brn.toml` is used,
/// and a missing one yields the defaults.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file exists but cannot be read
/// * The file is not valid TOML or contains unknown keys
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<FileConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_config_file(dir)? {
            Some(path) => path,
            None => return Ok(FileConfig::default()),
        },
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
