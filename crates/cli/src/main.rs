// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI converter binary entry point.

use clap::Parser;

use ansiconv::diagnostic::print_error;
use ansiconv::{logging, run, Cli};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    if let Err(e) = run(&cli) {
        tracing::debug!(error = ?e, "command failed");
        print_error(e);
        std::process::exit(1);
    }
}
