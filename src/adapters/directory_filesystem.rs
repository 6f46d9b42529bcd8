use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::{DirectoryEntry, DirectoryListing};

/// Directory listing backed by `std::fs::read_dir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemDirectoryListing;

impl FilesystemDirectoryListing {
    pub fn new() -> Self {
        Self
    }
}

fn listing_error(dir: &Path, err: io::Error) -> AppError {
    match err.kind() {
        io::ErrorKind::NotFound => AppError::DirectoryNotFound(dir.to_path_buf()),
        _ => AppError::DirectoryUnreadable { path: dir.to_path_buf(), source: err },
    }
}

impl DirectoryListing for FilesystemDirectoryListing {
    fn list(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, AppError> {
        let metadata = fs::metadata(dir).map_err(|err| listing_error(dir, err))?;
        if !metadata.is_dir() {
            return Err(AppError::NotADirectory(dir.to_path_buf()));
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(|err| listing_error(dir, err))? {
            let entry = entry.map_err(|err| listing_error(dir, err))?;
            // Follows symlinks, so a link to a directory counts as one.
            let is_dir = entry.path().is_dir();
            entries.push(DirectoryEntry { name: entry.file_name(), is_dir });
        }
        Ok(entries)
    }
}
