//! Shared testing harness for `tsvload` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated data directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    data_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty `data/` directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let data_dir = root.path().join("data");
        fs::create_dir_all(&data_dir).expect("Failed to create test data directory");

        Self { root, data_dir }
    }

    /// Root of the temporary environment.
    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory the tests load from.
    pub(crate) fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Write `content` to `name` inside the data directory.
    pub(crate) fn write_file(&self, name: &str, content: &str) -> &Self {
        fs::write(self.data_dir.join(name), content).expect("Failed to write test file");
        self
    }

    /// Create a subdirectory `name` inside the data directory.
    pub(crate) fn create_dir(&self, name: &str) -> &Self {
        fs::create_dir_all(self.data_dir.join(name)).expect("Failed to create test subdirectory");
        self
    }

    /// Write a config file at the environment root and return its path.
    pub(crate) fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("tsvload.toml");
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Build a command for invoking the compiled `tsvload` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("tsvload").expect("Failed to locate tsvload binary");
        cmd.current_dir(self.root.path()).env_remove("TSVLOAD_LOG");
        cmd
    }

    /// Build a command loading the data directory.
    pub(crate) fn load(&self) -> Command {
        let mut cmd = self.cli();
        cmd.arg(&self.data_dir);
        cmd
    }
}
