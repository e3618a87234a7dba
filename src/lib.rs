//! Command-line tokenizing and inline style markup for terminal applications.

include!(concat!(env!("OUT_DIR"), "/messages.rs"));

/// The `consola` binary: session setup, dispatcher and command handlers.
pub mod cli;
/// Shared names and exit codes.
pub mod constants;
/// Command-line tokenizing.
pub mod input;
/// Style markup and terminal output.
pub mod output;
