// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors surfaced by the command-line front end.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read input file '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read stdin: {0}")]
    ReadStdin(#[source] std::io::Error),

    #[error("Failed to write output file '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to stdout: {0}")]
    WriteStdout(#[source] std::io::Error),

    #[error("Unknown sample '{name}' (available: {available})")]
    UnknownSample { name: String, available: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
