// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::document::Theme;
use crate::mode::ConversionMode;

/// Convert ANSI-colored terminal output to HTML or plain text
#[derive(Parser, Debug, Clone)]
#[command(name = "ansiconv", version, about)]
pub struct Cli {
    /// Input file to convert ("-" or omitted reads stdin)
    #[arg(value_name = "INPUT", conflicts_with = "sample")]
    pub input: Option<PathBuf>,

    /// Conversion mode
    #[arg(short, long, value_enum, env = "ANSICONV_MODE")]
    pub mode: Option<ConversionMode>,

    /// Convert a built-in sample instead of reading input
    #[arg(short, long, value_name = "NAME")]
    pub sample: Option<String>,

    /// List the built-in samples and exit
    #[arg(long)]
    pub list_samples: bool,

    /// List the conversion modes and exit
    #[arg(long)]
    pub list_modes: bool,

    /// Print the SGR color table as JSON and exit
    #[arg(long)]
    pub print_colors: bool,

    /// Wrap the result in a standalone HTML preview page
    #[arg(long)]
    pub document: bool,

    /// Color scheme of the preview page
    #[arg(long, value_enum, env = "ANSICONV_THEME")]
    pub theme: Option<Theme>,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Settings file (TOML, or JSON with a .json extension)
    #[arg(short, long, value_name = "PATH", env = "ANSICONV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The input file, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Default log level from `-v`/`-q`.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
