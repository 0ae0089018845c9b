// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SGR (Select Graphic Rendition) parameter codes.

use crate::color::color_for;

/// One SGR parameter code, classified by its visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sgr {
    /// Reset all attributes: ESC[0m
    Reset,
    /// Bold: ESC[1m
    Bold,
    /// Underline: ESC[4m
    Underline,
    /// Foreground color: ESC[30-37m, ESC[90-97m
    Foreground(&'static str),
    /// Background color: ESC[40-47m, ESC[100-107m
    Background(&'static str),
    /// Any other code, recognized but without effect.
    Ignored(u32),
}

impl Sgr {
    /// Classify a numeric code.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => Sgr::Reset,
            1 => Sgr::Bold,
            4 => Sgr::Underline,
            30..=37 | 90..=97 => color_for(code).map_or(Sgr::Ignored(code), Sgr::Foreground),
            40..=47 | 100..=107 => color_for(code).map_or(Sgr::Ignored(code), Sgr::Background),
            _ => Sgr::Ignored(code),
        }
    }
}

/// Parse a parameter string (the part between `[` and `m`) into codes.
///
/// Groups are split on `;`. An empty group is code 0, so `""` and `"1;"`
/// both contain a reset. Groups that do not fit a `u32` are dropped.
pub fn parse_params(params: &str) -> impl Iterator<Item = u32> + '_ {
    params.split(';').filter_map(|group| {
        if group.is_empty() {
            Some(0)
        } else {
            group.parse().ok()
        }
    })
}

/// Parse and classify every code of a parameter string, in order.
pub fn parse(params: &str) -> impl Iterator<Item = Sgr> + '_ {
    parse_params(params).map(Sgr::from_code)
}

#[cfg(test)]
#[path = "sgr_tests.rs"]
mod tests;
