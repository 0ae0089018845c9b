// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The 16-color ANSI palette used for SGR foreground and background codes.

use std::collections::BTreeMap;

/// Standard colors: black, red, green, yellow, blue, magenta, cyan, white.
/// Selected by 30–37 (foreground) and 40–47 (background).
pub const STANDARD: [&str; 8] = [
    "#000000", "#cd0000", "#00cd00", "#cdcd00", "#0000ee", "#cd00cd", "#00cdcd", "#e5e5e5",
];

/// Bright colors, same order as [`STANDARD`].
/// Selected by 90–97 (foreground) and 100–107 (background).
pub const BRIGHT: [&str; 8] = [
    "#7f7f7f", "#ff0000", "#00ff00", "#ffff00", "#5c5cff", "#ff00ff", "#00ffff", "#ffffff",
];

/// Color table keyed by the decimal SGR code, e.g. `"31"` → `"#cd0000"`.
pub type ColorTable = BTreeMap<String, &'static str>;

/// Look up the color for an SGR color code.
///
/// Returns `None` for codes outside 30–37, 40–47, 90–97 and 100–107.
pub fn color_for(code: u32) -> Option<&'static str> {
    let palette = match code {
        30..=37 | 40..=47 => &STANDARD,
        90..=97 | 100..=107 => &BRIGHT,
        _ => return None,
    };
    palette.get((code % 10) as usize).copied()
}

/// Every SGR color code with its color, as a read-only table.
pub fn color_table() -> ColorTable {
    [30..=37, 40..=47, 90..=97, 100..=107]
        .into_iter()
        .flatten()
        .filter_map(|code| color_for(code).map(|color| (code.to_string(), color)))
        .collect()
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
