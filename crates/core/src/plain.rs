// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI to plain text.

use crate::scan::{self, Grammar};

/// The escape introducer spelled out in octal, as pasted from shell scripts.
const OCTAL_INTRODUCER: &str = "\\033[";
const INTRODUCER: &str = "\x1b[";

/// Control characters removed from plain output. Tab, line feed and
/// carriage return are kept.
fn is_removed_control(c: char) -> bool {
    matches!(c, '\x00'..='\x08' | '\x0b' | '\x0c' | '\x0e'..='\x1f' | '\x7f')
}

/// Strip all ANSI escape sequences and control characters, returning plain text.
///
/// Every CSI sequence is removed, not only colors, so cursor movement and
/// erase sequences disappear too. The literal `\033[` notation is treated
/// as a real introducer. Never fails; whitespace is left untouched.
pub fn render_plain(text: &str) -> String {
    let mut stripped = scan::strip(text, Grammar::Csi);
    if stripped.contains(OCTAL_INTRODUCER) {
        let normalized = stripped.replace(OCTAL_INTRODUCER, INTRODUCER);
        stripped = scan::strip(&normalized, Grammar::Csi);
    }

    let plain: String = stripped.chars().filter(|c| !is_removed_control(*c)).collect();
    tracing::debug!(
        input_len = text.len(),
        output_len = plain.len(),
        "rendered plain text"
    );
    plain
}

#[cfg(test)]
#[path = "plain_tests.rs"]
mod tests;
