use std::ffi::OsStr;

use super::AppError;
use super::validation::validate_suffix;
use crate::impl_validated_name;

/// Suffix applied when no other is configured.
pub const DEFAULT_SUFFIX: &str = ".txt";

/// Exact trailing-substring filter over entry names.
///
/// Matching is case-sensitive and purely textual: `.txt` retains `notes.txt`
/// and `archive.tar.txt`, and rejects `notes.TXT` and `notes.txt.bak`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixFilter(String);

impl_validated_name!(SuffixFilter, validate_suffix, AppError::InvalidSuffix);

impl SuffixFilter {
    /// Whether `name` ends with this suffix.
    pub fn matches(&self, name: &str) -> bool {
        self.matches_os(OsStr::new(name))
    }

    /// Whether the raw entry name `name` ends with this suffix, byte for byte.
    pub fn matches_os(&self, name: &OsStr) -> bool {
        name.as_encoded_bytes().ends_with(self.0.as_bytes())
    }
}

impl Default for SuffixFilter {
    fn default() -> Self {
        Self(DEFAULT_SUFFIX.to_string())
    }
}
