// src/core/pipeline.rs
use crate::config::RenameConfig;
use crate::core::fs::FileSystem;
use crate::core::{commit, preview, propagate, snapshot};
use crate::error::RenameError;
use crate::models::{CommitSummary, DirectoryNode, PreviewLine};
use tracing::{debug, info};

/// What a run planned and, unless it was a dry run, what it committed.
#[derive(Debug)]
pub struct RunReport {
    pub preview: Vec<PreviewLine>,
    /// `None` for a dry run.
    pub committed: Option<CommitSummary>,
}

/// Snapshot, transform, preview, then commit unless `config.dry_run` is set.
///
/// Every phase finishes before the next starts. Nothing on disk changes
/// until the whole plan has been computed, previewed, and validated.
///
/// # Errors
///
/// Returns the first [`RenameError`] raised by discovery, validation, or commit.
pub fn execute(fs: &impl FileSystem, config: &RenameConfig) -> Result<RunReport, RenameError> {
    let mut tree = snapshot::build(fs, &config.root, config.recurse, &config.exclude)?;
    let nodes: usize = tree.iter().map(DirectoryNode::node_count).sum();
    debug!("snapshot of {} holds {nodes} entries", config.root.display());

    propagate::apply(&mut tree, &config.transforms());

    let preview = preview::report(preview::render(&tree, &config.root, &config.root));
    let changed = preview.iter().filter(|line| line.is_changed()).count();
    info!("{} entries, {changed} to rename", preview.len());

    commit::validate(&tree, &config.root)?;

    if config.dry_run {
        info!("dry run, nothing renamed");
        return Ok(RunReport {
            preview,
            committed: None,
        });
    }

    let summary = commit::commit(fs, &tree, &config.root)?;
    info!(
        "renamed {} entries, {} unchanged",
        summary.renamed, summary.unchanged
    );

    Ok(RunReport {
        preview,
        committed: Some(summary),
    })
}
