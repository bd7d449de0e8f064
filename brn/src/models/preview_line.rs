// src/models/preview_line.rs
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// One planned rename, with both paths fully joined from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    pub kind: NodeKind,
    pub original: PathBuf,
    pub updated: PathBuf,
}

impl PreviewLine {
    /// Whether the entry's own name changes. A renamed parent alone does not count.
    #[inline]
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.original.file_name() != self.updated.file_name()
    }
}

impl fmt::Display for PreviewLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == NodeKind::File {
            f.write_str("\t")?;
        }
        write!(f, "{} -> {}", self.original.display(), self.updated.display())
    }
}
