// src/models/directory_node.rs
use crate::models::FileNode;

/// One directory level of the snapshot.
///
/// The node owns its files and subdirectories outright. `subdirectories`
/// stays empty unless discovery ran recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    original_name: String,
    pub updated_name: String,
    pub files: Vec<FileNode>,
    pub subdirectories: Vec<DirectoryNode>,
}

impl DirectoryNode {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let original_name = name.into();
        Self {
            updated_name: original_name.clone(),
            original_name,
            files: Vec::new(),
            subdirectories: Vec::new(),
        }
    }

    /// Name the directory had on disk when it was discovered.
    #[inline]
    #[must_use]
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// Counts this directory plus every file and directory below it.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.subdirectories
            .iter()
            .map(Self::node_count)
            .fold(1_usize.saturating_add(self.files.len()), usize::saturating_add)
    }
}
