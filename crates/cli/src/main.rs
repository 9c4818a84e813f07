// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use acctrs::{Cli, Error};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    acctrs::logging::init();

    if let Err(e) = acctrs::run(cli) {
        if let Error::SchemaApplication(reason) = &e {
            tracing::error!(%reason, "refusing to start: database schema could not be applied");
        }
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
