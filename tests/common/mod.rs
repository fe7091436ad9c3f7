//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration test
//! files.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use aiproxy_config::infrastructure::config::ENV_OVERRIDES;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `contents` to `config.yaml` inside `dir`
pub fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.yaml");
    fs::write(&path, contents).expect("Failed to write config file");
    path
}

/// Run `f` with every override variable pinned: the given pairs set, all
/// others removed, so the ambient environment cannot leak into a test.
pub fn with_override_env<R>(pairs: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let vars: Vec<(&str, Option<&str>)> = ENV_OVERRIDES
        .iter()
        .map(|entry| {
            let value = pairs
                .iter()
                .find(|(name, _)| *name == entry.var)
                .map(|(_, value)| *value);
            (entry.var, value)
        })
        .collect();

    temp_env::with_vars(vars, f)
}
