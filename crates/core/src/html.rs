// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI to inline-styled HTML.
//!
//! Text is escaped first, then every SGR sequence is replaced by the markup
//! its codes produce. Open spans live on an explicit stack; a reset closes
//! all of them at once, most recent first, and whatever is still open at the
//! end of input is closed the same way.

use crate::escape::escape_html;
use crate::scan::{segments, Grammar, Segment};
use crate::sgr::{self, Sgr};

const CLOSE_TAG: &str = "</span>";
const LINE_BREAK: &str = "<br>";

/// An open styled region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSpan {
    Bold,
    Underline,
    Foreground(&'static str),
    Background(&'static str),
}

impl StyleSpan {
    /// The span a code opens, if any. Reset and ignored codes open nothing.
    pub fn for_code(code: Sgr) -> Option<Self> {
        match code {
            Sgr::Bold => Some(StyleSpan::Bold),
            Sgr::Underline => Some(StyleSpan::Underline),
            Sgr::Foreground(color) => Some(StyleSpan::Foreground(color)),
            Sgr::Background(color) => Some(StyleSpan::Background(color)),
            Sgr::Reset | Sgr::Ignored(_) => None,
        }
    }

    /// Write the opening tag.
    pub fn write_open(&self, out: &mut String) {
        out.push_str("<span style=\"");
        match self {
            StyleSpan::Bold => out.push_str("font-weight: bold;"),
            StyleSpan::Underline => out.push_str("text-decoration: underline;"),
            StyleSpan::Foreground(color) => {
                out.push_str("color: ");
                out.push_str(color);
                out.push(';');
            }
            StyleSpan::Background(color) => {
                out.push_str("background-color: ");
                out.push_str(color);
                out.push(';');
            }
        }
        out.push_str("\">");
    }
}

/// Spans opened so far, in opening order.
///
/// Spans of the same kind are not merged: two foreground codes before a
/// reset open two nested spans.
#[derive(Debug, Default)]
pub struct StyleStack {
    open: Vec<StyleSpan>,
}

impl StyleStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one code, writing the markup it produces.
    pub fn apply(&mut self, code: Sgr, out: &mut String) {
        match code {
            Sgr::Reset => self.close_all(out),
            Sgr::Ignored(code) => {
                tracing::trace!(code, "ignoring unsupported SGR code");
            }
            _ => {
                if let Some(span) = StyleSpan::for_code(code) {
                    span.write_open(out);
                    self.open.push(span);
                }
            }
        }
    }

    /// Close every open span, most recently opened first.
    pub fn close_all(&mut self, out: &mut String) {
        while self.open.pop().is_some() {
            out.push_str(CLOSE_TAG);
        }
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn spans(&self) -> &[StyleSpan] {
        &self.open
    }
}

/// Convert ANSI-colored text to HTML with inline styles.
///
/// Never fails. Literal text is escaped, so the result can be embedded in a
/// page directly. Every `<span>` emitted is closed, by an explicit reset or
/// at the end of input. Newlines become `<br>`.
pub fn render_html(text: &str) -> String {
    let escaped = escape_html(text);
    let mut out = String::with_capacity(escaped.len());
    let mut stack = StyleStack::new();
    let mut sequences = 0usize;

    for segment in segments(&escaped, Grammar::Sgr) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Escape(sequence) => {
                sequences += 1;
                for code in sgr::parse(sequence.params) {
                    stack.apply(code, &mut out);
                }
            }
        }
    }

    if stack.depth() > 0 {
        tracing::trace!(open = stack.depth(), "closing spans left open at end of input");
    }
    stack.close_all(&mut out);

    let html = out.replace('\n', LINE_BREAK);
    tracing::debug!(
        input_len = text.len(),
        sequences,
        output_len = html.len(),
        "rendered html"
    );
    html
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
