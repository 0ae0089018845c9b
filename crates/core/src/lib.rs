// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI escape sequence conversion.
//!
//! Turns terminal output into either inline-styled HTML ([`render_html`]) or
//! plain text with every escape sequence and stray control byte removed
//! ([`render_plain`]). Both are pure, total functions over `&str`.
//!
//! ```
//! use ansiconv_core::{render_html, render_plain};
//!
//! let input = "\x1b[31mRed\x1b[0m";
//! assert_eq!(render_html(input), r#"<span style="color: #cd0000;">Red</span>"#);
//! assert_eq!(render_plain(input), "Red");
//! ```

pub mod color;
pub mod escape;
pub mod html;
pub mod plain;
pub mod scan;
pub mod sgr;

pub use color::{color_for, color_table, ColorTable};
pub use escape::escape_html;
pub use html::render_html;
pub use plain::render_plain;
pub use sgr::Sgr;
