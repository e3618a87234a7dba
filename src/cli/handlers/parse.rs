// src/cli/handlers/parse.rs

use anyhow::{Context, Result};

use crate::cli::Session;

/// Prints the tokenized command line as pretty JSON. Output is never styled.
pub fn handle(session: &Session) -> Result<()> {
    let json = serde_json::to_string_pretty(session.input())
        .context("Failed to serialize the parsed command line")?;
    println!("{}", json);
    Ok(())
}
