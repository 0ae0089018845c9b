// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Standalone HTML preview page around a conversion result.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use ansiconv_core::escape_html;

use crate::mode::ConversionMode;

/// Preview color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Black text on white
    #[default]
    Light,
    /// White text on black
    Dark,
}

impl Theme {
    /// (background, foreground) colors.
    pub fn colors(self) -> (&'static str, &'static str) {
        match self {
            Theme::Light => ("#ffffff", "#000000"),
            Theme::Dark => ("#000000", "#ffffff"),
        }
    }
}

/// Wrap converted output in a complete HTML page.
///
/// HTML output is already escaped and is embedded as is; plain output is
/// escaped here and placed in a `<pre>`.
pub fn wrap_document(body: &str, mode: ConversionMode, theme: Theme) -> String {
    let (background, foreground) = theme.colors();
    let content = match mode {
        ConversionMode::Html => format!("<div class=\"ansi\">{}</div>", body),
        ConversionMode::Plain => format!("<pre class=\"ansi\">{}</pre>", escape_html(body)),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>\n\
         body {{ margin: 0; padding: 1rem; background-color: {background}; color: {foreground}; }}\n\
         .ansi {{ margin: 0; font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; \
         font-size: 0.875rem; white-space: pre-wrap; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         {content}\n\
         </body>\n\
         </html>\n",
        title = escape_html(mode.title()),
    )
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
