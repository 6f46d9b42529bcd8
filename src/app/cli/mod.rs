//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::app::config::{ConfigOverrides, resolve_config};
use crate::app::{api, logging};
use crate::domain::{AppError, FailurePolicy};

/// Printed on stdout once every file has been loaded.
pub const COMPLETION_MARKER: &str = "completed";

#[derive(Parser)]
#[command(name = "tsvload")]
#[command(version)]
#[command(
    about = "Load every tab-separated .txt file in a directory",
    long_about = None
)]
struct Cli {
    /// Directory whose files are loaded (not searched recursively)
    directory: PathBuf,
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Load entries whose name ends with this text [default: .txt]
    #[arg(short, long)]
    suffix: Option<String>,
    /// Also retain directories whose name matches the suffix
    #[arg(long)]
    include_dirs: bool,
    /// What a file that fails to load does to the run [default: abort]
    #[arg(long, value_enum)]
    on_error: Option<OnError>,
    /// Print each loaded file with its row count
    #[arg(long)]
    summary: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Command-line spelling of [`FailurePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OnError {
    /// Stop at the first file that fails to load
    Abort,
    /// Warn about files that fail to load and continue
    Skip,
}

impl From<OnError> for FailurePolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Abort => FailurePolicy::Abort,
            OnError::Skip => FailurePolicy::Skip,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run_load(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_load(cli: Cli) -> Result<(), AppError> {
    let overrides = ConfigOverrides {
        suffix: cli.suffix,
        include_directories: cli.include_dirs,
        on_error: cli.on_error.map(FailurePolicy::from),
    };
    let config = resolve_config(cli.config.as_deref(), overrides)?;

    let outcome = api::load_directory(&cli.directory, &config)?;

    if cli.summary {
        for (name, table) in outcome.registry.iter() {
            println!("{}\t{}", name, table.len());
        }
    }
    println!("{}", COMPLETION_MARKER);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "tsvload",
            "data",
            "--config",
            "cfg.toml",
            "--suffix",
            ".tsv",
            "--include-dirs",
            "--on-error",
            "skip",
            "--summary",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.directory, PathBuf::from("data"));
        assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
        assert_eq!(cli.suffix.as_deref(), Some(".tsv"));
        assert!(cli.include_dirs);
        assert_eq!(cli.on_error.map(FailurePolicy::from), Some(FailurePolicy::Skip));
        assert!(cli.summary);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn defaults_leave_overrides_unset() {
        let cli = Cli::try_parse_from(["tsvload", "data"]).unwrap();

        assert!(cli.config.is_none());
        assert!(cli.suffix.is_none());
        assert!(!cli.include_dirs);
        assert!(cli.on_error.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn abort_flag_maps_to_abort_policy() {
        let cli = Cli::try_parse_from(["tsvload", "data", "--on-error", "abort"]).unwrap();
        assert_eq!(cli.on_error.map(FailurePolicy::from), Some(FailurePolicy::Abort));
    }

    #[test]
    fn directory_is_required() {
        assert!(Cli::try_parse_from(["tsvload"]).is_err());
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["tsvload", "data", "--on-error", "retry"]).is_err());
    }
}
