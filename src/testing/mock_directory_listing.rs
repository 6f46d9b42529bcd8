use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{DirectoryEntry, DirectoryListing};

/// In-memory directory listing for testing.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockDirectoryListing {
    dirs: HashMap<PathBuf, Vec<DirectoryEntry>>,
    denied: Vec<PathBuf>,
}

#[allow(dead_code)]
impl MockDirectoryListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `dir` with `entries` in listing order.
    pub fn with_dir(mut self, dir: &str, entries: Vec<DirectoryEntry>) -> Self {
        self.dirs.insert(PathBuf::from(dir), entries);
        self
    }

    /// Register `dir` as present but not readable.
    pub fn with_denied(mut self, dir: &str) -> Self {
        self.denied.push(PathBuf::from(dir));
        self
    }
}

impl DirectoryListing for MockDirectoryListing {
    fn list(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, AppError> {
        if self.denied.iter().any(|d| d == dir) {
            return Err(AppError::DirectoryUnreadable {
                path: dir.to_path_buf(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        self.dirs.get(dir).cloned().ok_or_else(|| AppError::DirectoryNotFound(dir.to_path_buf()))
    }
}
