// src/input/arg_parser.rs

use super::{args::Positionals, options::OptionTable, value::OptionValue};
use std::iter::Peekable;
use thiserror::Error;

/// Errors raised while tokenizing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// An option token was seen before any command token.
    #[error("Options may not precede the command: '{option}' was given before any command.")]
    OptionBeforeCommand {
        /// The offending token, as typed.
        option: String,
    },
}

/// How a single dash-prefixed token was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionToken<'a> {
    /// `--key` or `--key=value`.
    Long { key: &'a str, inline: Option<&'a str> },
    /// `-k`, `-k=value` or `-kvalue`.
    Short { key: &'a str, inline: Option<&'a str> },
    /// `-abc`: every letter is its own flag.
    Cluster(&'a str),
}

/// Splits a command line (program name already removed) into positional
/// arguments and options.
///
/// # Logic:
/// - A token starting with `-` is an option. At least one plain positional
///   token (the command) must come before the first option.
/// - An option without an inline value takes the next token as its value when
///   that token is non-empty, does not start with `-` and contains no `=`.
///   Otherwise it is boolean `true`.
/// - Clustered short flags (`-abc`) are each boolean `true` and never take a value.
/// - A plain token containing `=` is a named positional; any other plain
///   token is the next indexed positional.
pub fn flag<S: AsRef<str>>(tokens: &[S]) -> Result<(Positionals, OptionTable), InputError> {
    let mut args = Positionals::new();
    let mut options = OptionTable::new();
    let mut has_command = false;
    let mut tokens = tokens.iter().map(S::as_ref).peekable();

    while let Some(token) = tokens.next() {
        let Some(body) = token.strip_prefix('-') else {
            if let Some((name, value)) = token.split_once('=') {
                args.insert_named(name, OptionValue::coerce(value));
            } else {
                let index = args.push(token);
                if !has_command {
                    log::debug!("Command token '{}' at index {}", token, index);
                    has_command = true;
                }
            }
            continue;
        };

        if !has_command {
            return Err(InputError::OptionBeforeCommand {
                option: token.to_string(),
            });
        }

        match classify(body) {
            OptionToken::Long { key, inline } => {
                let value = resolve_value(inline, &mut tokens);
                options.insert(key, value, true);
            }
            OptionToken::Short { key, inline } => {
                let value = resolve_value(inline, &mut tokens);
                options.insert(key, value, false);
            }
            OptionToken::Cluster(letters) => {
                log::trace!("Clustered short flags '{}'", letters);
                for letter in letters.chars() {
                    let mut buf = [0u8; 4];
                    options.insert(letter.encode_utf8(&mut buf), OptionValue::Bool(true), false);
                }
            }
        }
    }

    Ok((args, options))
}

fn classify(body: &str) -> OptionToken<'_> {
    if let Some(long) = body.strip_prefix('-') {
        return match long.split_once('=') {
            Some((key, value)) => OptionToken::Long {
                key,
                inline: Some(value),
            },
            None => OptionToken::Long {
                key: long,
                inline: None,
            },
        };
    }

    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return OptionToken::Short {
            key: body,
            inline: None,
        };
    };

    match chars.next() {
        None => OptionToken::Short {
            key: body,
            inline: None,
        },
        Some('=') => {
            let (key, rest) = body.split_at(first.len_utf8());
            OptionToken::Short {
                key,
                inline: rest.strip_prefix('='),
            }
        }
        Some(_) if is_cluster(body) => OptionToken::Cluster(body),
        Some(_) => {
            let (key, rest) = body.split_at(first.len_utf8());
            OptionToken::Short {
                key,
                inline: Some(rest),
            }
        }
    }
}

/// A run of distinct ASCII letters (`-abc`, `-xvf`, and also `-ofile`).
/// Anything else after a single dash is a key followed by its value
/// (`-ofoo`, `-n5`). A cluster never takes the next token as a value.
fn is_cluster(body: &str) -> bool {
    let mut seen = [false; 128];
    body.bytes().all(|b| {
        if !b.is_ascii_alphabetic() {
            return false;
        }
        let slot = usize::from(b);
        match seen.get_mut(slot) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    })
}

fn resolve_value<'a, I>(inline: Option<&'a str>, tokens: &mut Peekable<I>) -> OptionValue
where
    I: Iterator<Item = &'a str>,
{
    match inline.or_else(|| take_value(tokens)) {
        Some(raw) => OptionValue::coerce(raw),
        None => OptionValue::Bool(true),
    }
}

/// Consumes the next token if it can serve as an option value.
fn take_value<'a, I>(tokens: &mut Peekable<I>) -> Option<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    tokens.next_if(|next| is_value_token(next))
}

/// True if `token` can serve as the value of a preceding option: non-empty,
/// not dash-prefixed and free of `=`.
pub fn is_value_token(token: &str) -> bool {
    !token.is_empty() && !token.starts_with('-') && !token.contains('=')
}
