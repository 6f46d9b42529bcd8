use std::ffi::OsString;
use std::path::Path;

use crate::domain::AppError;

/// One item of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Entry name relative to the listed directory.
    pub name: OsString,
    /// Whether the entry is (or resolves to) a directory.
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn file(name: impl Into<OsString>) -> Self {
        Self { name: name.into(), is_dir: false }
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Self { name: name.into(), is_dir: true }
    }
}

/// Port for enumerating the entries directly inside a directory.
pub trait DirectoryListing {
    /// List the entries of `dir` in the order the backing store yields them.
    ///
    /// Fails with `DirectoryNotFound`, `NotADirectory` or `DirectoryUnreadable`
    /// when `dir` cannot be listed.
    fn list(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, AppError>;
}
