// src/input/mod.rs

//! Command-line tokenizing: raw argv in, positional arguments and options out.

/// The tokenizer itself.
pub mod arg_parser;
/// Positional arguments.
pub mod args;
/// The option table.
pub mod options;
/// Coerced values.
pub mod value;

pub use arg_parser::{InputError, flag, is_value_token};
pub use args::{ArgKey, ArgValue, Positionals};
pub use options::{OptionEntry, OptionTable};
pub use value::OptionValue;

use serde::Serialize;

/// The parsed view of one process invocation.
#[derive(Serialize, Debug, Clone)]
pub struct ParsedInput {
    /// Every token joined by a single space, as typed.
    raw: String,
    #[serde(skip)]
    tokens: Vec<String>,
    args: Positionals,
    options: OptionTable,
}

impl ParsedInput {
    /// Tokenizes `tokens` (program name already removed).
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, InputError> {
        let raw = tokens
            .iter()
            .map(S::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        let (args, options) = flag(tokens)?;
        let tokens = tokens.iter().map(S::as_ref).map(str::to_string).collect();
        log::debug!(
            "Parsed {} positional(s) and {} option key(s) from '{}'",
            args.len(),
            options.len(),
            raw
        );
        Ok(Self {
            raw,
            tokens,
            args,
            options,
        })
    }

    /// Every token joined by a single space.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The tokens exactly as given, before any coercion.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The command name: the first indexed positional.
    pub fn command(&self) -> Option<&str> {
        self.args.index(0)
    }

    /// All positional arguments, indexed and named.
    pub fn args(&self) -> &Positionals {
        &self.args
    }

    /// Positional value by index or name.
    pub fn arg(&self, key: impl Into<ArgKey>) -> Option<&ArgValue> {
        self.args.get(key)
    }

    /// Positional value as text, or `default` when absent.
    pub fn arg_or(&self, key: impl Into<ArgKey>, default: &str) -> String {
        self.args
            .get(key)
            .map(ArgValue::to_text)
            .unwrap_or_else(|| default.to_string())
    }

    /// The full option table.
    pub fn options(&self) -> &OptionTable {
        &self.options
    }

    /// Latest value given for `key`.
    pub fn opt(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Scalar-or-list view of `key`.
    pub fn opt_entry(&self, key: &str) -> Option<&OptionEntry> {
        self.options.entry(key)
    }

    /// Every value given for `key`, in order.
    pub fn opt_all(&self, key: &str) -> &[OptionValue] {
        self.options.all(key)
    }

    /// True if `key` was given at all.
    pub fn has_opt(&self, key: &str) -> bool {
        self.options.contains(key)
    }

    /// True if any of `keys` was given, e.g. `["h", "help"]`.
    pub fn has_any_opt<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        self.options.contains_any(keys)
    }

    /// Latest value of the long option `--key`, as typed, without coercion.
    ///
    /// Accepts `--key=value` and `--key value`, with the same value rules the
    /// tokenizer applies. A bare `--key` has no value.
    pub fn raw_opt(&self, key: &str) -> Option<&str> {
        let flag = format!("--{}", key);
        let mut latest = None;
        let mut tokens = self.tokens.iter().map(String::as_str).peekable();
        while let Some(token) = tokens.next() {
            if let Some(value) = token
                .strip_prefix(flag.as_str())
                .and_then(|rest| rest.strip_prefix('='))
            {
                latest = Some(value);
            } else if token == flag {
                latest = tokens.next_if(|next| is_value_token(next));
            }
        }
        latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parsed_input_queries() {
        let input =
            ParsedInput::parse(&["deploy", "api", "env=prod", "-v", "--tag", "v2"]).unwrap();
        assert_eq!(input.raw(), "deploy api env=prod -v --tag v2");
        assert_eq!(input.command(), Some("deploy"));
        assert_eq!(input.arg_or(1usize, ""), "api");
        assert_eq!(input.arg_or("env", ""), "prod");
        assert_eq!(input.arg_or(5usize, "none"), "none");
        assert!(input.has_opt("v"));
        assert!(input.has_any_opt(&["t", "tag"]));
        assert_eq!(input.opt("tag"), Some(&OptionValue::Str("v2".into())));
    }

    #[test]
    fn test_raw_opt_keeps_case() {
        let input = ParsedInput::parse(&[
            "render",
            "--theme=Themes/Dark.toml",
            "--theme",
            "My.toml",
            "--themes=x",
        ])
        .unwrap();
        assert_eq!(input.opt("theme"), Some(&OptionValue::Str("my.toml".into())));
        assert_eq!(input.raw_opt("theme"), Some("My.toml"));
        assert_eq!(input.raw_opt("missing"), None);

        let input = ParsedInput::parse(&["render", "--theme", "--no-style"]).unwrap();
        assert_eq!(input.raw_opt("theme"), None);
    }

    #[test]
    fn test_serializes_to_json() {
        let input = ParsedInput::parse(&["run", "-n", "1", "-n", "2", "x=on"]).unwrap();
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["args"]["0"], "run");
        assert_eq!(json["args"]["x"], true);
        assert_eq!(json["options"]["n"], serde_json::json!([1, 2]));
    }

    fn token() -> impl Strategy<Value = String> {
        "[-=a-zA-Z0-9]{0,6}"
    }

    proptest! {
        #[test]
        fn prop_plain_first_token_is_command(
            first in "[a-z][a-z0-9]{0,8}",
            rest in prop::collection::vec(token(), 0..8),
        ) {
            let mut tokens = vec![first.clone()];
            tokens.extend(rest);
            let input = ParsedInput::parse(&tokens).unwrap();
            prop_assert_eq!(input.command(), Some(first.as_str()));
        }

        #[test]
        fn prop_dash_first_token_fails(
            first in "-[-=a-z0-9]{0,6}",
            rest in prop::collection::vec(token(), 0..8),
        ) {
            let mut tokens = vec![first];
            tokens.extend(rest);
            let is_format_error = matches!(
                ParsedInput::parse(&tokens),
                Err(InputError::OptionBeforeCommand { .. })
            );
            prop_assert!(is_format_error);
        }

        #[test]
        fn prop_history_counts_occurrences(values in prop::collection::vec(1u32..1000, 1..6)) {
            let mut tokens = vec!["cmd".to_string()];
            for v in &values {
                tokens.push("--level".to_string());
                tokens.push(v.to_string());
            }
            let input = ParsedInput::parse(&tokens).unwrap();
            prop_assert_eq!(input.opt_all("level").len(), values.len());
        }
    }
}
