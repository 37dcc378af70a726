//! Test support utilities for bullpen integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use assert_cmd::Command;
use std::process::Output;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir, home dir, and stub-binary
/// dir. No process-global state is mutated — child processes use
/// `.current_dir()` and an explicit PATH, so tests can safely run in
/// parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
    /// Directory placed on PATH; fake CLI binaries are installed here
    pub bin: TempDir,
}

impl Test {
    /// Create a new empty test environment. PATH contains only the (empty)
    /// stub dir, so no real Stripe CLI is visible.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
            home: TempDir::new().expect("failed to create temp home"),
            bin: TempDir::new().expect("failed to create temp bin"),
        }
    }

    /// Create a test environment with a working fake Stripe CLI installed.
    #[cfg(unix)]
    pub fn with_stripe() -> Self {
        let t = Self::new();
        fixtures::install_fake_stripe(t.bin.path(), fixtures::FAKE_STRIPE_AUTHED);
        t
    }

    /// Create a bullpen command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME/USERPROFILE set to the temporary home directory
    /// - PATH set to the stub-binary directory only
    /// - Current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("bullpen").expect("failed to find bullpen binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("PATH", self.bin.path());
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run `bullpen setup --no-banner` feeding `stdin` to the prompts.
    pub fn setup(&self, stdin: &str) -> Output {
        self.cmd()
            .args(["setup", "--no-banner"])
            .write_stdin(stdin.to_string())
            .output()
            .expect("failed to run bullpen setup")
    }

    /// Run `bullpen status`.
    pub fn status(&self) -> Output {
        self.cmd()
            .arg("status")
            .output()
            .expect("failed to run bullpen status")
    }

    /// Run `bullpen status --json`.
    pub fn status_json(&self) -> Output {
        self.cmd()
            .args(["status", "--json"])
            .output()
            .expect("failed to run bullpen status --json")
    }

    /// Read the project's `.env` file.
    pub fn env_contents(&self) -> String {
        std::fs::read_to_string(self.dir.path().join(".env")).expect("failed to read .env")
    }

    /// Write the project's `.env` file.
    pub fn write_env(&self, contents: &str) {
        std::fs::write(self.dir.path().join(".env"), contents).expect("failed to write .env");
    }
}
