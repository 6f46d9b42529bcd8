use std::path::Path;

use crate::domain::{FileName, ReaderError};

/// Port for constructing a reader over one file of a scanned directory.
///
/// `Handle` is opaque to the loader: it is stored in the registry and never
/// inspected.
pub trait ReaderFactory {
    type Handle;

    /// Open `name` inside `dir`.
    fn open(&self, dir: &Path, name: &FileName) -> Result<Self::Handle, ReaderError>;
}
