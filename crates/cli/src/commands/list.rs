// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::OutputFormat;
use crate::display::format_account_line;
use crate::error::Result;

use super::Context;

pub fn run(ctx: &Context, format: OutputFormat) -> Result<()> {
    let db = ctx.open_db()?;
    let accounts = db.list_accounts()?;

    match format {
        OutputFormat::Text => {
            for account in &accounts {
                println!("{}", format_account_line(account));
            }
        }
        OutputFormat::Json => {
            for account in &accounts {
                println!("{}", serde_json::to_string(account)?);
            }
        }
    }
    Ok(())
}
