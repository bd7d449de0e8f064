use crate::core::fs::{Entry, FileSystem};
use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(&file_path)?;
    Ok(file_path)
}

pub fn create_test_dir(dir: &TempDir, name: &str) -> Result<PathBuf> {
    let dir_path = dir.path().join(name);
    fs::create_dir_all(&dir_path)?;
    Ok(dir_path)
}

/// In-memory listings that record every rename instead of performing it.
#[derive(Debug, Default)]
pub struct RecordingFs {
    listings: HashMap<PathBuf, Vec<Entry>>,
    fail_rename_from: Option<PathBuf>,
    pub renames: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl RecordingFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, path: impl AsRef<Path>, entries: &[(&str, bool)]) -> Self {
        let entries = entries
            .iter()
            .map(|&(name, is_dir)| Entry::new(name, is_dir))
            .collect();
        self.listings.insert(path.as_ref().to_path_buf(), entries);
        self
    }

    pub fn failing_rename_from(mut self, path: impl AsRef<Path>) -> Self {
        self.fail_rename_from = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn recorded(&self) -> Vec<(PathBuf, PathBuf)> {
        self.renames.borrow().clone()
    }
}

impl FileSystem for RecordingFs {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        self.listings.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
        })
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        if self.fail_rename_from.as_deref() == Some(from) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "rename refused"));
        }
        self.renames
            .borrow_mut()
            .push((from.to_path_buf(), to.to_path_buf()));
        Ok(())
    }
}

/// `.` holds `my sub` and a loose file; `my sub` holds a file and `inner dir`,
/// which holds one more file.
pub fn nested_fs() -> RecordingFs {
    RecordingFs::new()
        .with_dir(".", &[("my sub", true), ("top file.txt", false)])
        .with_dir("./my sub", &[("file 1.txt", false), ("inner dir", true)])
        .with_dir("./my sub/inner dir", &[("deep file.txt", false)])
}
