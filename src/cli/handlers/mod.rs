// src/cli/handlers/mod.rs

// One module per command. Every handler takes the session and returns `anyhow::Result`.

/// `help`
pub mod help;
/// `parse`
pub mod parse;
/// `render`
pub mod render;
/// `strip`
pub mod strip;
/// `tags`
pub mod tags;
