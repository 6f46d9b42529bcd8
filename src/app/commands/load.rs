//! Registry build: one reader handle per scanned file.

use std::path::Path;

use tracing::{info, info_span, warn};

use crate::app::AppContext;
use crate::app::commands::scan;
use crate::domain::{AppError, FailurePolicy, FileName, LoadConfig, Registry};
use crate::ports::{DirectoryListing, ReaderFactory};

/// A file whose reader could not be constructed under [`FailurePolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub name: FileName,
    pub reason: String,
}

/// Result of loading a directory.
#[derive(Debug)]
pub struct LoadOutcome<H> {
    /// Handles for every file that was opened.
    pub registry: Registry<H>,
    /// Files left out of the registry. Always empty under [`FailurePolicy::Abort`].
    pub skipped: Vec<SkippedFile>,
}

/// Scan `dir` and open a reader for every retained file.
pub fn execute<L, F>(
    ctx: &AppContext<L, F>,
    dir: &Path,
    config: &LoadConfig,
) -> Result<LoadOutcome<F::Handle>, AppError>
where
    L: DirectoryListing,
    F: ReaderFactory,
{
    let _span = info_span!("load", dir = %dir.display()).entered();

    let files = scan::execute(ctx, dir, &config.scan)?;
    build_registry(ctx.readers(), dir, files, config.load.on_error)
}

/// Open a reader for each of `files`, in order, keyed by file name.
///
/// Under [`FailurePolicy::Abort`] the first reader failure is returned and the
/// partially built registry is discarded.
pub fn build_registry<F: ReaderFactory>(
    readers: &F,
    dir: &Path,
    files: Vec<FileName>,
    policy: FailurePolicy,
) -> Result<LoadOutcome<F::Handle>, AppError> {
    let mut registry = Registry::new();
    let mut skipped = Vec::new();

    for file in files {
        match readers.open(dir, &file) {
            Ok(handle) => registry.insert(file, handle)?,
            Err(source) => match policy {
                FailurePolicy::Abort => {
                    return Err(AppError::Reader { file: file.into(), source });
                }
                FailurePolicy::Skip => {
                    warn!(file = %file, error = %source, "skipping file");
                    skipped.push(SkippedFile { name: file, reason: source.to_string() });
                }
            },
        }
    }

    info!(loaded = registry.len(), skipped = skipped.len(), "registry built");
    Ok(LoadOutcome { registry, skipped })
}
