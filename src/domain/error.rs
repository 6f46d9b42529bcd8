use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for tsvload operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The directory to scan does not exist.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The path to scan exists but is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The directory exists but could not be listed.
    #[error("Cannot read directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Suffix filter is unusable.
    #[error("Invalid suffix '{0}': must be non-empty and contain no path separators")]
    InvalidSuffix(String),

    /// File name is not a single directory entry name.
    #[error("Invalid file name '{0}': must be a single non-empty path component")]
    InvalidFileName(String),

    /// The same file name was registered twice.
    #[error("File '{0}' is already registered")]
    DuplicateEntry(String),

    /// The reader could not be constructed for a file.
    #[error("Failed to load '{file}': {source}")]
    Reader {
        file: String,
        #[source]
        source: ReaderError,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

/// Failure raised by a reader while opening a single file.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// The file could not be read.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The file content does not match the reader's format.
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on filesystem failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::DirectoryUnreadable { source, .. } => source.kind(),
            AppError::Reader { source: ReaderError::Io(err), .. } => err.kind(),
            AppError::DirectoryNotFound(_) => io::ErrorKind::NotFound,
            AppError::DuplicateEntry(_) => io::ErrorKind::AlreadyExists,
            AppError::Configuration(_)
            | AppError::NotADirectory(_)
            | AppError::InvalidSuffix(_)
            | AppError::InvalidFileName(_)
            | AppError::Reader { source: ReaderError::Malformed { .. }, .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
        }
    }
}
