//! tsvload: load the tab-separated files of a directory into a registry of readers.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use app::api::{LoadOutcome, SkippedFile, load_directory, scan_directory};
pub use domain::{
    AppError, FailurePolicy, FileName, LoadConfig, ReaderError, Registry, ScanSettings,
    SuffixFilter, TsvTable,
};

/// Load every `.txt` file directly inside `dir`, stopping at the first file
/// that cannot be read.
pub fn load(dir: impl AsRef<Path>) -> Result<Registry<TsvTable>, AppError> {
    let outcome = load_directory(dir, &LoadConfig::default())?;
    Ok(outcome.registry)
}
