// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level command execution.

use std::io::{self, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use ansiconv_core::color_table;

use crate::cli::Cli;
use crate::config::{Config, Settings};
use crate::diagnostic::print_warning;
use crate::document::wrap_document;
use crate::error::Error;
use crate::mode::ConversionMode;
use crate::samples::{self, SAMPLES};

/// Run the command described by `cli`.
pub fn run(cli: &Cli) -> Result<(), Error> {
    if cli.list_modes {
        return write_output(None, &mode_listing());
    }
    if cli.list_samples {
        return write_output(None, &sample_listing());
    }
    if cli.print_colors {
        return write_output(None, &color_listing()?);
    }

    let config = cli.config.as_deref().map(Config::load).transpose()?;
    let settings = Settings::resolve(cli, config.as_ref());
    debug!(?settings, config = ?cli.config, "resolved settings");

    if cli.theme.is_some() && !settings.document {
        print_warning("--theme has no effect without --document");
    }

    let input = read_input(cli)?;
    if input.trim().is_empty() {
        print_warning("input is empty");
    }

    let output = render(&settings, &input);
    write_output(cli.output.as_deref(), &output)
}

/// Read the text to convert: a built-in sample, a file, or stdin.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_input(cli: &Cli) -> Result<String, Error> {
    if let Some(name) = &cli.sample {
        let sample = samples::find(name).ok_or_else(|| Error::UnknownSample {
            name: name.clone(),
            available: samples::names(),
        })?;
        debug!(sample = sample.name, "reading built-in sample");
        return Ok(sample.content.to_string());
    }

    let bytes = match cli.input_path() {
        Some(path) => {
            debug!(path = %path.display(), "reading input file");
            std::fs::read(path).map_err(|source| Error::ReadInput {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => {
            debug!("reading stdin");
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).map_err(Error::ReadStdin)?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Convert `input` and wrap it in the preview page when requested.
pub fn render(settings: &Settings, input: &str) -> String {
    let body = settings.mode.convert(input);
    if settings.document {
        wrap_document(&body, settings.mode, settings.theme)
    } else {
        body
    }
}

/// Write `content` to `path`, or to stdout when `path` is `None`.
///
/// A trailing newline is added to non-empty content that lacks one.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), Error> {
    let newline = if content.is_empty() || content.ends_with('\n') {
        ""
    } else {
        "\n"
    };

    match path {
        Some(path) => {
            std::fs::write(path, format!("{content}{newline}")).map_err(|source| {
                Error::WriteOutput {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            info!(path = %path.display(), bytes = content.len(), "wrote output");
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            let result = stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.write_all(newline.as_bytes()))
                .and_then(|()| stdout.flush());
            match result {
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                other => other.map_err(Error::WriteStdout),
            }
        }
    }
}

/// `name<TAB>title<TAB>description` per mode.
pub fn mode_listing() -> String {
    ConversionMode::ALL
        .iter()
        .map(|m| format!("{}\t{}\t{}\n", m.name(), m.title(), m.description()))
        .collect()
}

/// `name<TAB>title` per sample.
pub fn sample_listing() -> String {
    SAMPLES
        .iter()
        .map(|s| format!("{}\t{}\n", s.name, s.title))
        .collect()
}

/// The SGR color table as a pretty-printed JSON object.
pub fn color_listing() -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&color_table())?)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
