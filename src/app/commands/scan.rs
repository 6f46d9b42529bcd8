//! Directory scan: the entries of one directory whose names end with a suffix.

use std::path::Path;

use tracing::{debug, info, trace, warn};

use crate::app::AppContext;
use crate::domain::{AppError, FileName, ScanSettings};
use crate::ports::{DirectoryListing, ReaderFactory};

/// List `dir` and keep the entries whose name ends with the configured suffix.
///
/// Listing order is preserved. Entries that are directories are dropped unless
/// `include_directories` is set. The suffix is matched against the raw name, so
/// a matching name that is not valid UTF-8 is kept under an escaped key.
pub fn execute<L, F>(
    ctx: &AppContext<L, F>,
    dir: &Path,
    settings: &ScanSettings,
) -> Result<Vec<FileName>, AppError>
where
    L: DirectoryListing,
    F: ReaderFactory,
{
    let filter = settings.filter()?;
    let entries = ctx.listing().list(dir)?;
    let listed = entries.len();

    let mut retained = Vec::new();
    for entry in entries {
        if !filter.matches_os(&entry.name) {
            trace!(name = ?entry.name, "file rejected");
            continue;
        }
        if entry.is_dir && !settings.include_directories {
            debug!(name = ?entry.name, "directory rejected");
            continue;
        }

        let file = FileName::from_os_str(&entry.name)?;
        if !file.is_utf8() {
            warn!(
                file = %file,
                "file name is not valid UTF-8, registering it under an escaped name"
            );
        }
        debug!(file = %file, "file retained");
        retained.push(file);
    }

    info!(
        dir = %dir.display(),
        suffix = %filter,
        listed,
        retained = retained.len(),
        "directory scanned"
    );
    Ok(retained)
}
