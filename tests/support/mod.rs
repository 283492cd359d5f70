//! Test support utilities for ghstage integration tests.
//!
//! Provides isolated command environments, in-memory fakes of the remote
//! platforms, and assertion helpers.

#![allow(dead_code)]

pub mod fakes;
pub mod fixtures;
pub mod mocks;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fakes::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mocks::*;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working dir and home dir. No process-global state
/// is mutated; child processes use `.current_dir()` and explicit env vars so
/// tests can safely run in parallel.
pub struct Test {
    /// Working directory of the command (not a git repository)
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }
}
