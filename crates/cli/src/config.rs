// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings file (TOML or JSON) and resolution of effective settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cli::Cli;
use crate::document::Theme;
use crate::mode::ConversionMode;

/// Errors that can occur when loading a settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML in '{path}': {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Contents of a settings file. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Conversion mode: "html" or "plain"
    #[serde(default)]
    pub mode: Option<ConversionMode>,

    /// Preview theme: "light" or "dark"
    #[serde(default)]
    pub theme: Option<Theme>,

    /// Wrap output in a standalone HTML page
    #[serde(default)]
    pub document: Option<bool>,
}

impl Config {
    /// Load a settings file. Files ending in `.json` are parsed as JSON,
    /// anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })
        } else {
            toml::from_str(&content).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Effective settings after layering command line, environment, config file
/// and defaults (in that order of precedence).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub mode: ConversionMode,
    pub theme: Theme,
    pub document: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: Option<&Config>) -> Self {
        let config_mode = config.and_then(|c| c.mode);
        let config_theme = config.and_then(|c| c.theme);
        let config_document = config.and_then(|c| c.document);

        Self {
            mode: cli.mode.or(config_mode).unwrap_or_default(),
            theme: cli.theme.or(config_theme).unwrap_or_default(),
            document: cli.document || config_document.unwrap_or(false),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
