// src/cli/handlers/tags.rs

use anyhow::Result;

use crate::cli::Session;

/// Lists every tag, each name drawn in its own style.
pub fn handle(session: &Session) -> Result<()> {
    let printer = session.printer();
    let table = printer.compiler().table();
    let width = table.names().map(str::len).max().unwrap_or(0) + 2;

    printer.line(t!("cli.tags.header"))?;
    for (name, sgr) in table.iter() {
        let pad = " ".repeat(width.saturating_sub(name.len()));
        let row = format!(t!("cli.tags.row"), name = name, pad = pad, codes = sgr.code_str());
        printer.line(&row)?;
    }
    Ok(())
}
