// src/core/preview.rs
use crate::models::{DirectoryNode, FileNode, NodeKind, PreviewLine};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
enum Pending<'a> {
    Directory {
        node: &'a DirectoryNode,
        original_parent: PathBuf,
        updated_parent: PathBuf,
    },
    File {
        node: &'a FileNode,
        original_parent: PathBuf,
        updated_parent: PathBuf,
    },
}

/// Lazy pre-order walk over the planned renames.
///
/// Each directory line is followed by its file lines and then by its
/// subdirectories. Original paths are joined from ancestors' original names,
/// updated paths from ancestors' updated names. The walk drains as it goes,
/// so a `Preview` cannot be restarted.
#[derive(Debug)]
pub struct Preview<'a> {
    stack: Vec<Pending<'a>>,
}

/// Starts a preview of `tree`, rooted at the two given paths.
#[must_use]
pub fn render<'a>(
    tree: &'a [DirectoryNode],
    original_root: &Path,
    updated_root: &Path,
) -> Preview<'a> {
    let stack = tree
        .iter()
        .rev()
        .map(|node| Pending::Directory {
            node,
            original_parent: original_root.to_path_buf(),
            updated_parent: updated_root.to_path_buf(),
        })
        .collect();
    Preview { stack }
}

impl Iterator for Preview<'_> {
    type Item = PreviewLine;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stack.pop()? {
            Pending::File {
                node,
                original_parent,
                updated_parent,
            } => Some(PreviewLine {
                kind: NodeKind::File,
                original: original_parent.join(node.original_name()),
                updated: updated_parent.join(&node.updated_name),
            }),
            Pending::Directory {
                node,
                original_parent,
                updated_parent,
            } => {
                let original = original_parent.join(node.original_name());
                let updated = updated_parent.join(&node.updated_name);

                // Pushed in reverse so files pop before subdirectories, each in tree order.
                for subdirectory in node.subdirectories.iter().rev() {
                    self.stack.push(Pending::Directory {
                        node: subdirectory,
                        original_parent: original.clone(),
                        updated_parent: updated.clone(),
                    });
                }
                for file in node.files.iter().rev() {
                    self.stack.push(Pending::File {
                        node: file,
                        original_parent: original.clone(),
                        updated_parent: updated.clone(),
                    });
                }

                Some(PreviewLine {
                    kind: NodeKind::Directory,
                    original,
                    updated,
                })
            }
        }
    }
}

/// Logs every preview line as it is pulled and hands the lines back.
pub fn report(preview: Preview<'_>) -> Vec<PreviewLine> {
    preview
        .inspect(|line| info!("{line}"))
        .collect()
}
