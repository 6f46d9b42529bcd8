//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::{FilesystemDirectoryListing, TsvReaderFactory};
use crate::app::{
    AppContext,
    commands::{load, scan},
};

pub use crate::app::commands::load::{LoadOutcome, SkippedFile};
pub use crate::domain::{
    AppError, FailurePolicy, FileName, LoadConfig, Registry, ScanSettings, TsvTable,
};

/// Create an `AppContext` over the real filesystem.
fn create_context() -> AppContext<FilesystemDirectoryListing, TsvReaderFactory> {
    AppContext::new(FilesystemDirectoryListing::new(), TsvReaderFactory::new())
}

/// List the files in `dir` that the given settings retain, in listing order.
pub fn scan_directory(
    dir: impl AsRef<Path>,
    settings: &ScanSettings,
) -> Result<Vec<FileName>, AppError> {
    scan::execute(&create_context(), dir.as_ref(), settings)
}

/// Load every retained file in `dir` as a tab-separated table.
pub fn load_directory(
    dir: impl AsRef<Path>,
    config: &LoadConfig,
) -> Result<LoadOutcome<TsvTable>, AppError> {
    load::execute(&create_context(), dir.as_ref(), config)
}
