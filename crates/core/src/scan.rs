// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape sequence scanner.
//!
//! Splits text into literal runs and recognized escape sequences. The HTML
//! renderer scans for SGR sequences only, the plain-text stripper for any
//! CSI sequence; both walk the same [`Segments`] iterator.

use regex::{CaptureMatches, Regex};
use std::ops::Range;
use std::sync::LazyLock;

/// ESC [ followed by semicolon-separated numbers, ending with 'm'.
static SGR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b\[([0-9;]*)(m)").expect("SGR regex pattern is invalid")
});

/// ESC [ followed by semicolon-separated numbers, ending with any ASCII letter.
static CSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b\[([0-9;]*)([A-Za-z])").expect("CSI regex pattern is invalid")
});

/// Which family of sequences a scan recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// `ESC [ <params> m` only.
    Sgr,
    /// `ESC [ <params> <letter>`, including SGR.
    Csi,
}

impl Grammar {
    fn regex(self) -> &'static Regex {
        match self {
            Grammar::Sgr => &*SGR_REGEX,
            Grammar::Csi => &*CSI_REGEX,
        }
    }
}

/// A recognized escape sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeSequence<'t> {
    /// Byte range of the whole sequence in the scanned text.
    pub range: Range<usize>,
    /// The parameter string between `[` and the final byte.
    pub params: &'t str,
    /// The terminating letter (`m` for SGR).
    pub final_byte: char,
}

impl EscapeSequence<'_> {
    /// Whether this sequence selects graphic rendition.
    pub fn is_sgr(&self) -> bool {
        self.final_byte == 'm'
    }
}

/// A piece of scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'t> {
    /// Literal text between sequences. Never empty.
    Text(&'t str),
    /// A recognized sequence.
    Escape(EscapeSequence<'t>),
}

/// Iterator over the [`Segment`]s of a text. See [`segments`].
pub struct Segments<'t> {
    input: &'t str,
    matches: CaptureMatches<'static, 't>,
    last_end: usize,
    pending: Option<EscapeSequence<'t>>,
}

impl<'t> Iterator for Segments<'t> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(sequence) = self.pending.take() {
            self.last_end = sequence.range.end;
            return Some(Segment::Escape(sequence));
        }

        for cap in self.matches.by_ref() {
            // cap.get(0) is the full match, which is always present when the regex matches
            let Some(full_match) = cap.get(0) else {
                continue;
            };
            let sequence = EscapeSequence {
                range: full_match.range(),
                params: cap.get(1).map(|m| m.as_str()).unwrap_or(""),
                final_byte: cap
                    .get(2)
                    .and_then(|m| m.as_str().chars().next())
                    .unwrap_or('m'),
            };

            // Text before this escape sequence
            let text_before = &self.input[self.last_end..full_match.start()];
            if text_before.is_empty() {
                self.last_end = sequence.range.end;
                return Some(Segment::Escape(sequence));
            }
            self.pending = Some(sequence);
            return Some(Segment::Text(text_before));
        }

        // Remaining text after the last escape sequence
        let remaining = &self.input[self.last_end..];
        self.last_end = self.input.len();
        if remaining.is_empty() {
            None
        } else {
            Some(Segment::Text(remaining))
        }
    }
}

/// Split `input` into literal text and the sequences `grammar` recognizes.
///
/// Malformed sequences (an introducer with no terminator before the next
/// introducer or the end of input) are not recognized and stay inside the
/// surrounding [`Segment::Text`].
pub fn segments(input: &str, grammar: Grammar) -> Segments<'_> {
    Segments {
        input,
        matches: grammar.regex().captures_iter(input),
        last_end: 0,
        pending: None,
    }
}

/// Extract only the escape sequences, with their byte positions.
pub fn sequences(input: &str, grammar: Grammar) -> impl Iterator<Item = EscapeSequence<'_>> {
    segments(input, grammar).filter_map(|segment| match segment {
        Segment::Escape(sequence) => Some(sequence),
        Segment::Text(_) => None,
    })
}

/// Remove every sequence `grammar` recognizes.
pub fn strip(input: &str, grammar: Grammar) -> String {
    let mut out = String::with_capacity(input.len());
    for segment in segments(input, grammar) {
        if let Segment::Text(text) = segment {
            out.push_str(text);
        }
    }
    out
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
