// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conversion modes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use ansiconv_core::{render_html, render_plain};

/// Which renderer a conversion uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMode {
    /// ANSI → HTML with inline styles
    #[default]
    Html,
    /// ANSI → plain text
    Plain,
}

impl ConversionMode {
    /// All modes, in toggle order.
    pub const ALL: [ConversionMode; 2] = [ConversionMode::Html, ConversionMode::Plain];

    /// Convert `input` with this mode's renderer.
    ///
    /// Blank input (empty or whitespace only) converts to the empty string.
    pub fn convert(self, input: &str) -> String {
        if input.trim().is_empty() {
            return String::new();
        }
        match self {
            ConversionMode::Html => render_html(input),
            ConversionMode::Plain => render_plain(input),
        }
    }

    /// The mode a toggle switches to.
    pub fn next(self) -> Self {
        match self {
            ConversionMode::Html => ConversionMode::Plain,
            ConversionMode::Plain => ConversionMode::Html,
        }
    }

    /// Name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            ConversionMode::Html => "html",
            ConversionMode::Plain => "plain",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ConversionMode::Html => "ANSI → HTML",
            ConversionMode::Plain => "ANSI → Plain text",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ConversionMode::Html => "Convert shell output with ANSI color codes to colored HTML",
            ConversionMode::Plain => "Remove ANSI color codes and control characters, leaving plain text",
        }
    }
}

impl std::fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
