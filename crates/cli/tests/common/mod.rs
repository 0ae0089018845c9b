// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for binary integration tests.

#![allow(dead_code)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// Environment variables that would leak settings into a test run.
const SETTINGS_ENV: [&str; 4] = [
    "ANSICONV_MODE",
    "ANSICONV_THEME",
    "ANSICONV_CONFIG",
    "ANSICONV_LOG",
];

/// The `ansiconv` binary with a clean settings environment.
pub fn ansiconv() -> Command {
    let mut cmd = Command::cargo_bin("ansiconv").unwrap();
    for var in SETTINGS_ENV {
        cmd.env_remove(var);
    }
    cmd
}

/// Create a temporary settings file with the given extension (".toml" or ".json").
pub fn write_config(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
