// src/cli/mod.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::{
    constants::{HELP_OPTIONS, NO_STYLE_OPTION, THEME_ENV_VAR, THEME_OPTION},
    input::{ParsedInput, is_value_token},
    output::{AnsiSwitch, MarkupCompiler, Printer, TagTable, Theme, ThemeError},
};

/// Command registry and routing.
pub mod dispatcher;
/// One handler per command.
pub mod handlers;

/// consola: tokenize command lines and render inline style markup.
///
/// Clap only collects the raw arguments; tokenizing them is consola's own job.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// The command followed by its arguments and options, exactly as typed.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Everything a command handler needs: the parsed command line and a printer
/// bound to the shared ANSI switch.
#[derive(Debug)]
pub struct Session {
    input: ParsedInput,
    printer: Printer,
}

impl Session {
    /// Tokenizes `args`, applies the global options and loads the theme.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let input = ParsedInput::parse(args)?;

        let ansi = AnsiSwitch::from_env();
        if input.has_opt(NO_STYLE_OPTION) {
            log::debug!("--{} given, disabling ANSI rendering", NO_STYLE_OPTION);
            ansi.disable();
            colored::control::set_override(false);
        }

        let table = match theme_path(&input) {
            Some(path) => Theme::load(&path)
                .and_then(|theme| theme.table().map_err(ThemeError::from))
                .with_context(|| format!(t!("cli.error.theme"), path = path.display()))?,
            None => TagTable::builtin(),
        };

        let compiler = MarkupCompiler::new(table, ansi)?;
        Ok(Self {
            input,
            printer: Printer::new(compiler),
        })
    }

    /// The parsed command line.
    pub fn input(&self) -> &ParsedInput {
        &self.input
    }

    /// The printer bound to this session's switch and tags.
    pub fn printer(&self) -> &Printer {
        &self.printer
    }

    /// The tokens after the command, as typed and joined by spaces, with the
    /// global options left out.
    pub fn text(&self) -> String {
        let tokens = self.input.tokens();
        let start = tokens
            .iter()
            .position(|t| is_command_token(t))
            .map_or(tokens.len(), |i| i + 1);

        let mut words = Vec::new();
        let mut rest = tokens.iter().skip(start).map(String::as_str).peekable();
        while let Some(token) = rest.next() {
            if token == THEME_FLAG {
                rest.next_if(|next| is_value_token(next));
            } else if !is_global_option(token) {
                words.push(token);
            }
        }
        words.join(" ")
    }
}

const THEME_FLAG: &str = "--theme";

/// The first plain, unnamed token is the command.
fn is_command_token(token: &str) -> bool {
    !token.starts_with('-') && !token.contains('=')
}

/// `--no-style`, `--theme=<path>`, `-h` and `--help`.
fn is_global_option(token: &str) -> bool {
    let Some(name) = token.strip_prefix("--") else {
        return token.strip_prefix('-').is_some_and(|short| HELP_OPTIONS.contains(&short));
    };
    let key = name.split_once('=').map_or(name, |(key, _)| key);
    key == NO_STYLE_OPTION || key == THEME_OPTION || HELP_OPTIONS.contains(&name)
}

/// `--theme=<path>` wins over the environment. The path is read as typed, so
/// its case survives.
fn theme_path(input: &ParsedInput) -> Option<PathBuf> {
    if let Some(value) = input.raw_opt(THEME_OPTION) {
        return Some(PathBuf::from(value));
    }
    env::var_os(THEME_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// The help text, rendered through the session's compiler.
pub fn help_text(printer: &Printer) -> String {
    printer.compiler().render(t!("cli.help.template"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(args: &[&str]) -> Session {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        Session::from_args(&args).unwrap()
    }

    #[test]
    fn test_text_keeps_tokens_as_typed() {
        let s = session(&["render", "<red>x=1</red>", "-->", "Done", "--no-style"]);
        assert_eq!(s.text(), "<red>x=1</red> --> Done");
    }

    #[test]
    fn test_text_skips_global_options() {
        let s = session(&["strip", "-h", "a", "--help", "b", "--no-style"]);
        assert_eq!(s.text(), "a b");
    }

    #[test]
    fn test_global_options() {
        assert!(is_global_option("--no-style"));
        assert!(is_global_option("--theme=Dark.toml"));
        assert!(is_global_option("-h"));
        assert!(!is_global_option("--helpful"));
        assert!(!is_global_option("-> done"));
    }
}
