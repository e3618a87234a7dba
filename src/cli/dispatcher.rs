// src/cli/dispatcher.rs

use anyhow::{Result, anyhow};

use crate::{
    cli::{Session, handlers},
    constants::{DEFAULT_COMMAND, HELP_OPTIONS},
};

/// A command, its aliases and its handler.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(&Session) -> Result<()>,
}

/// The single source of truth for all commands.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "help",
        aliases: &[],
        handler: handlers::help::handle,
    },
    CommandDefinition {
        name: "parse",
        aliases: &["args"],
        handler: handlers::parse::handle,
    },
    CommandDefinition {
        name: "render",
        aliases: &["echo"],
        handler: handlers::render::handle,
    },
    CommandDefinition {
        name: "strip",
        aliases: &[],
        handler: handlers::strip::handle,
    },
    CommandDefinition {
        name: "tags",
        aliases: &["ls"],
        handler: handlers::tags::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Names of every registered command, aliases excluded.
pub fn command_names() -> Vec<&'static str> {
    COMMAND_REGISTRY.iter().map(|cmd| cmd.name).collect()
}

/// Routes the session to its handler.
///
/// `-h`/`--help` anywhere shows help; no command at all does too.
pub fn dispatch(session: &Session) -> Result<()> {
    let input = session.input();
    log::debug!("Dispatching '{}'", input.raw());

    let name = if input.has_any_opt(&HELP_OPTIONS) {
        DEFAULT_COMMAND
    } else {
        input.command().unwrap_or(DEFAULT_COMMAND)
    };

    let command = find_command(name)
        .ok_or_else(|| anyhow!(format!(t!("cli.error.unknown_command"), name = name)))?;
    (command.handler)(session)
}
