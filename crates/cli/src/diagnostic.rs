// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error and warning lines on stderr, colored when stderr is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }

    /// SGR foreground code: red for errors, yellow for warnings.
    fn sgr(self) -> u8 {
        match self {
            Severity::Error => 31,
            Severity::Warning => 33,
        }
    }
}

/// Print an error message to stderr.
pub fn print_error(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), Severity::Error, msg, is_tty);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), Severity::Warning, msg, is_tty);
}

/// Write one diagnostic line with an explicit terminal flag.
fn write_diagnostic<W: Write>(
    writer: &mut W,
    severity: Severity,
    msg: impl Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(
            writer,
            "\x1b[{}m{}: {}\x1b[0m",
            severity.sgr(),
            severity.label(),
            msg
        );
    } else {
        let _ = writeln!(writer, "{}: {}", severity.label(), msg);
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
