// src/models.rs
mod commit_summary;
mod directory_node;
mod file_node;
mod preview_line;

pub use commit_summary::CommitSummary;
pub use directory_node::DirectoryNode;
pub use file_node::FileNode;
pub use preview_line::{NodeKind, PreviewLine};
