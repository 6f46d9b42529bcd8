//! Load configuration domain models.

use serde::Deserialize;

use super::{AppError, SuffixFilter, suffix::DEFAULT_SUFFIX};

/// Configuration for a directory load, optionally read from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadConfig {
    /// Directory scan settings.
    #[serde(default)]
    pub scan: ScanSettings,
    /// Registry build settings.
    #[serde(default)]
    pub load: LoadSettings,
}

/// Which directory entries the scanner retains.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanSettings {
    /// Exact trailing text an entry name must end with.
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Retain matching entries that are directories.
    #[serde(default)]
    pub include_directories: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self { suffix: default_suffix(), include_directories: false }
    }
}

impl ScanSettings {
    /// Build the validated filter for `suffix`.
    pub fn filter(&self) -> Result<SuffixFilter, AppError> {
        SuffixFilter::new(&self.suffix)
    }
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

/// Registry build settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadSettings {
    /// What a reader failure does to the rest of the build.
    #[serde(default)]
    pub on_error: FailurePolicy,
}

/// Reaction to a file whose reader cannot be constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Log the failure, record the file as skipped, and continue.
    Skip,
}

impl LoadConfig {
    /// Parse and validate a configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: LoadConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.scan.filter().map(|_| ())
    }
}
