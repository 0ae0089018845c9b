// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in example payloads of colored shell output.

/// An example of ANSI-colored terminal output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    /// Stable name used with `--sample`
    pub name: &'static str,
    /// Human-readable title
    pub title: &'static str,
    /// Raw ANSI content
    pub content: &'static str,
}

pub static SAMPLES: [Sample; 4] = [
    Sample {
        name: "log",
        title: "Colored log output",
        content: "\x1b[32m[INFO]\x1b[0m Server started successfully\n\
                  \x1b[33m[WARN]\x1b[0m Configuration file not found\n\
                  \x1b[31m[ERROR]\x1b[0m Database connection failed\n\
                  \x1b[36m[DEBUG]\x1b[0m Processing request...",
    },
    Sample {
        name: "git-status",
        title: "Git status output",
        content: "\x1b[31mmodified:\x1b[0m   src/App.tsx\n\
                  \x1b[32mnew file:\x1b[0m   README.md\n\
                  \x1b[33mdeleted:\x1b[0m    old-file.js",
    },
    Sample {
        name: "npm-install",
        title: "npm install output",
        content: "\x1b[32m+ react@18.2.0\x1b[0m\n\
                  \x1b[33m+ typescript@4.9.5\x1b[0m\n\
                  \x1b[36minstalled 245 packages\x1b[0m",
    },
    Sample {
        name: "test-results",
        title: "Test results output",
        content: "\x1b[32m✓\x1b[0m should render correctly\n\
                  \x1b[32m✓\x1b[0m should handle user input\n\
                  \x1b[31m✗\x1b[0m should validate form\n\
                  \x1b[1m\x1b[32m2 passing\x1b[0m\n\
                  \x1b[1m\x1b[31m1 failing\x1b[0m",
    },
];

/// Look up a sample by name (case-insensitive).
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Comma-separated list of sample names, for error messages.
pub fn names() -> String {
    SAMPLES
        .iter()
        .map(|s| s.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "samples_tests.rs"]
mod tests;
