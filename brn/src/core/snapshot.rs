// src/core/snapshot.rs
use crate::core::fs::FileSystem;
use crate::error::RenameError;
use crate::models::{DirectoryNode, FileNode};
use glob::Pattern;
use std::path::Path;
use tracing::{debug, warn};

/// Builds the in-memory tree for every directory directly under `root`.
///
/// Discovery runs in two passes. The first finds the directory shape
/// (recursively when `recurse` is set). The second lists the files of every
/// directory in that shape. Files sitting directly in `root` are not part of
/// the tree.
///
/// Entries come back in filesystem enumeration order. Nothing is sorted.
///
/// # Arguments
///
/// * `fs` - Listing capability
/// * `root` - Directory whose children are snapshotted
/// * `recurse` - Whether to descend below the first level
/// * `exclude` - Globs matched against bare entry names; matches are left out entirely
///
/// # Errors
///
/// Returns [`RenameError::List`] for the first directory that cannot be
/// listed. No partial tree is returned.
pub fn build(
    fs: &impl FileSystem,
    root: &Path,
    recurse: bool,
    exclude: &[Pattern],
) -> Result<Vec<DirectoryNode>, RenameError> {
    let mut directories = discover_directories(fs, root, recurse, exclude)?;
    for directory in &mut directories {
        attach_files(fs, root, directory, exclude)?;
    }
    Ok(directories)
}

fn discover_directories(
    fs: &impl FileSystem,
    path: &Path,
    recurse: bool,
    exclude: &[Pattern],
) -> Result<Vec<DirectoryNode>, RenameError> {
    let mut directories: Vec<DirectoryNode> = list(fs, path, exclude)?
        .into_iter()
        .filter(|(_, is_dir)| *is_dir)
        .map(|(name, _)| DirectoryNode::new(name))
        .collect();

    if recurse {
        for directory in &mut directories {
            let child = path.join(directory.original_name());
            directory.subdirectories = discover_directories(fs, &child, true, exclude)?;
        }
    }

    Ok(directories)
}

// Walks the shape found by `discover_directories`; subdirectories are only
// present when discovery recursed.
fn attach_files(
    fs: &impl FileSystem,
    parent: &Path,
    directory: &mut DirectoryNode,
    exclude: &[Pattern],
) -> Result<(), RenameError> {
    let path = parent.join(directory.original_name());
    debug!(path = %path.display(), "discovering files");

    directory.files = list(fs, &path, exclude)?
        .into_iter()
        .filter(|(_, is_dir)| !*is_dir)
        .map(|(name, _)| FileNode::new(name))
        .collect();

    for subdirectory in &mut directory.subdirectories {
        attach_files(fs, &path, subdirectory, exclude)?;
    }

    Ok(())
}

fn list(
    fs: &impl FileSystem,
    path: &Path,
    exclude: &[Pattern],
) -> Result<Vec<(String, bool)>, RenameError> {
    let entries = fs.list_entries(path).map_err(|source| RenameError::List {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry.name.into_string() {
            Ok(name) if is_excluded(&name, exclude) => {
                debug!(path = %path.join(&name).display(), "excluded");
                None
            }
            Ok(name) => Some((name, entry.is_dir)),
            Err(raw) => {
                warn!(
                    "skipping {}: name is not valid UTF-8",
                    path.join(raw).display()
                );
                None
            }
        })
        .collect())
}

fn is_excluded(name: &str, exclude: &[Pattern]) -> bool {
    exclude.iter().any(|pattern| pattern.matches(name))
}
