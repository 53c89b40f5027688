//! Shared testing harness for `epf-release` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated project without any manifest.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Create a project whose epf manifest declares `version`.
    pub(crate) fn with_version(version: &str) -> Self {
        let ctx = Self::new();
        ctx.write_manifest(&format!(r#"{{"name": "epf", "version": "{}"}}"#, version));
        ctx
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to `node_modules/epf/package.json` in the project.
    pub(crate) fn manifest_path(&self) -> PathBuf {
        self.work_dir.join("node_modules").join("epf").join("package.json")
    }

    /// Write raw manifest content at the default location.
    pub(crate) fn write_manifest(&self, content: &str) {
        self.write_file("node_modules/epf/package.json", content);
    }

    /// Write `epf-release.toml` in the project root.
    pub(crate) fn write_config(&self, content: &str) {
        self.write_file("epf-release.toml", content);
    }

    /// Write a file relative to the project root, creating parents.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the project root.
    pub(crate) fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read test file")
    }

    /// A directory outside the project, for `--root` tests.
    pub(crate) fn outside_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `epf-release` binary within the project.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `epf-release` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd =
            Command::cargo_bin("epf-release").expect("Failed to locate epf-release binary");
        cmd.current_dir(dir.as_ref());
        cmd
    }
}
