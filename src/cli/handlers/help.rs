// src/cli/handlers/help.rs

use anyhow::Result;

use crate::cli::{Session, help_text};

/// Prints the help text.
pub fn handle(session: &Session) -> Result<()> {
    println!("{}", help_text(session.printer()));
    Ok(())
}
