// src/cli/handlers/render.rs

use anyhow::{Result, anyhow};

use crate::cli::Session;

/// Renders the text after the command and prints it.
pub fn handle(session: &Session) -> Result<()> {
    let text = session.text();
    if text.is_empty() {
        return Err(anyhow!(format!(t!("cli.error.missing_text"), command = "render")));
    }
    session.printer().line(&text)?;
    Ok(())
}
