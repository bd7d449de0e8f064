// src/core/commit.rs
use crate::core::fs::FileSystem;
use crate::error::RenameError;
use crate::models::{CommitSummary, DirectoryNode};
use std::path::Path;
use tracing::debug;

/// Checks every planned name before anything is renamed.
///
/// # Errors
///
/// Returns [`RenameError::EmptyName`] or [`RenameError::InvalidName`] with the
/// original path of the first node whose updated name is empty, `.` or `..`.
pub fn validate(tree: &[DirectoryNode], root: &Path) -> Result<(), RenameError> {
    tree.iter()
        .try_for_each(|directory| validate_directory(directory, root))
}

fn validate_directory(directory: &DirectoryNode, parent: &Path) -> Result<(), RenameError> {
    let path = parent.join(directory.original_name());
    check_name(&directory.updated_name, &path)?;
    for file in &directory.files {
        check_name(&file.updated_name, &path.join(file.original_name()))?;
    }
    directory
        .subdirectories
        .iter()
        .try_for_each(|subdirectory| validate_directory(subdirectory, &path))
}

// `.` and `..` name the directory itself or its parent, never a sibling.
fn check_name(name: &str, path: &Path) -> Result<(), RenameError> {
    match name {
        "" => Err(RenameError::EmptyName {
            path: path.to_path_buf(),
        }),
        "." | ".." => Err(RenameError::InvalidName {
            path: path.to_path_buf(),
            name: name.to_owned(),
        }),
        _ => Ok(()),
    }
}

/// Writes the updated names to disk, parent first.
///
/// A directory is renamed before its files and subdirectories, which are then
/// addressed through the directory's new path. Nodes whose name did not change
/// are skipped. The touch order matches the preview order.
///
/// # Errors
///
/// Returns [`RenameError::Rename`] for the first rename that fails. Renames
/// already performed are left in place.
pub fn commit(
    fs: &impl FileSystem,
    tree: &[DirectoryNode],
    root: &Path,
) -> Result<CommitSummary, RenameError> {
    let mut summary = CommitSummary::new();
    for directory in tree {
        commit_directory(fs, directory, root, &mut summary)?;
    }
    Ok(summary)
}

fn commit_directory(
    fs: &impl FileSystem,
    directory: &DirectoryNode,
    parent: &Path,
    summary: &mut CommitSummary,
) -> Result<(), RenameError> {
    let updated = parent.join(&directory.updated_name);
    rename_path(fs, &parent.join(directory.original_name()), &updated, summary)?;

    for file in &directory.files {
        rename_path(
            fs,
            &updated.join(file.original_name()),
            &updated.join(&file.updated_name),
            summary,
        )?;
    }

    for subdirectory in &directory.subdirectories {
        commit_directory(fs, subdirectory, &updated, summary)?;
    }

    Ok(())
}

fn rename_path(
    fs: &impl FileSystem,
    from: &Path,
    to: &Path,
    summary: &mut CommitSummary,
) -> Result<(), RenameError> {
    if from == to {
        summary.unchanged = summary.unchanged.saturating_add(1);
        return Ok(());
    }

    debug!("renaming {} -> {}", from.display(), to.display());
    fs.rename(from, to).map_err(|source| RenameError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    summary.renamed = summary.renamed.saturating_add(1);
    Ok(())
}
