// src/models/file_node.rs

/// A regular file found inside a discovered directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    original_name: String,
    pub updated_name: String,
}

impl FileNode {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let original_name = name.into();
        Self {
            updated_name: original_name.clone(),
            original_name,
        }
    }

    /// Name the file had on disk when it was discovered.
    #[inline]
    #[must_use]
    pub fn original_name(&self) -> &str {
        &self.original_name
    }
}
