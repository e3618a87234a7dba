// src/cli/handlers/strip.rs

use anyhow::{Result, anyhow};

use crate::cli::Session;

/// Prints the text after the command with every tag removed.
pub fn handle(session: &Session) -> Result<()> {
    let text = session.text();
    if text.is_empty() {
        return Err(anyhow!(format!(t!("cli.error.missing_text"), command = "strip")));
    }
    println!("{}", session.printer().compiler().strip(&text));
    Ok(())
}
