//! Test support utilities for codeartifact-npm integration tests.
//!
//! Provides an isolated project/home environment and stub `npm`/`aws`
//! executables that record their arguments instead of doing real work.

#![allow(dead_code)]


#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own project dir, home dir and stub bin dir.
/// No process-global state is mutated; child processes get everything
/// through `.current_dir()` and `.env()`, so tests can run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
    /// Directory prepended to PATH, holding stub tools
    pub bin: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        let bin = TempDir::new().expect("failed to create temp bin");

        Self { dir, home, bin }
    }

    /// Create a test environment with a package.json and recording stubs.
    pub fn with_package(package_json: &str) -> Self {
        let t = Self::new();
        t.write_package_json(package_json);
        t.stub("npm", RECORDING_STUB);
        t.stub("aws", RECORDING_STUB);
        t
    }

    /// Write `package.json` in the project directory.
    pub fn write_package_json(&self, contents: &str) {
        std::fs::write(self.dir.path().join("package.json"), contents)
            .expect("failed to write package.json");
    }

    /// Write `~/.npmrc` in the temp home directory.
    pub fn write_user_npmrc(&self, contents: &str) {
        std::fs::write(self.home.path().join(".npmrc"), contents)
            .expect("failed to write user .npmrc");
    }

    /// Install an executable stub named `name` on the test PATH.
    ///
    /// `body` is a shell script body; `$STUB_NAME` holds the tool name.
    pub fn stub(&self, name: &str, body: &str) {
        let path = self.bin.path().join(name);
        let script = format!("#!/bin/sh\nSTUB_NAME={}\n{}", name, body);
        std::fs::write(&path, script).expect("failed to write stub");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("failed to chmod stub");
        }
    }

    /// File the stubs append their invocations to.
    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("stub.log")
    }

    /// Invocations recorded by the stubs, one per line.
    pub fn invocations(&self) -> Vec<String> {
        read_lines(&self.log_path())
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
