// src/core/fs.rs
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// An immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub is_dir: bool,
}

impl Entry {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<OsString>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }
}

/// The two filesystem operations the renamer needs. File contents are never read.
pub trait FileSystem {
    /// Lists the immediate entries of `path`, in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is missing, is not a directory, or cannot be read.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>>;

    /// Moves `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns the underlying OS error if the rename fails.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFs;

impl FileSystem for DiskFs {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        if !fs::metadata(path)?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", path.display()),
            ));
        }

        // Symlinks are not followed, so a link to a directory lists as a plain entry.
        WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .map(|entry| {
                let entry = entry?;
                Ok(Entry::new(
                    entry.file_name().to_os_string(),
                    entry.file_type().is_dir(),
                ))
            })
            .collect()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}
