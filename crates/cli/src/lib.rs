// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI converter front end.
//!
//! Reads colored terminal output from a file, stdin or a built-in sample and
//! converts it to HTML fragments, standalone HTML preview pages or plain text.
//! The conversions themselves live in [`ansiconv_core`].

pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod document;
pub mod error;
pub mod logging;
pub mod mode;
pub mod run;
pub mod samples;

pub use cli::Cli;
pub use config::{Config, ConfigError, Settings};
pub use document::{wrap_document, Theme};
pub use error::Error;
pub use mode::ConversionMode;
pub use run::run;
