//! Load configuration assembly: config file, then command-line overrides.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, FailurePolicy, LoadConfig};

/// Settings given on the command line; each one, when present, wins over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub suffix: Option<String>,
    pub include_directories: bool,
    pub on_error: Option<FailurePolicy>,
}

/// Read and validate a TOML configuration file.
pub fn load_config_file(path: &Path) -> Result<LoadConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        AppError::config_error(format!("Cannot read config file {}: {}", path.display(), err))
    })?;
    LoadConfig::parse(&content)
}

/// Build the effective configuration from an optional file and overrides.
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<LoadConfig, AppError> {
    let mut config = match config_path {
        Some(path) => load_config_file(path)?,
        None => LoadConfig::default(),
    };

    if let Some(suffix) = overrides.suffix {
        config.scan.suffix = suffix;
    }
    if overrides.include_directories {
        config.scan.include_directories = true;
    }
    if let Some(policy) = overrides.on_error {
        config.load.on_error = policy;
    }

    config.validate()?;
    Ok(config)
}
