//! Shared testing harness for packager integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory the binaries run in.
    pub(crate) fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path for `name` inside the work directory.
    pub(crate) fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Write a template file and return its path.
    pub(crate) fn write_template(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("Failed to write template");
        path
    }

    /// Read a generated manifest.
    pub(crate) fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("Failed to read generated manifest")
    }

    /// Build a command for invoking a compiled packager binary.
    pub(crate) fn cli(&self, bin: &str) -> Command {
        let mut cmd = Command::cargo_bin(bin).expect("Failed to locate packager binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    pub(crate) fn homebrew(&self) -> Command {
        self.cli("homebrew-packager")
    }

    pub(crate) fn scoop(&self) -> Command {
        self.cli("scoop-packager")
    }
}
