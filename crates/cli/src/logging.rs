// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging setup.

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive that overrides `-v`/`-q`.
pub const LOG_ENV: &str = "ANSICONV_LOG";

/// Install the global subscriber, writing to stderr.
pub fn init(level: Level) {
    let directive = std::env::var(LOG_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(level, directive.as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// Filter from an explicit directive, or from `level` when the directive is
/// missing, blank or malformed.
fn filter_for(level: Level, directive: Option<&str>) -> EnvFilter {
    directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(level.as_str().to_ascii_lowercase()))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
