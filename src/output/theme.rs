// src/output/theme.rs

use super::tags::{StyleError, TagTable};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a theme file.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The file could not be read.
    #[error("Could not read theme file '{path}': {source}")]
    Io {
        /// The theme file.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for a theme.
    #[error("Failed to parse theme file '{path}': {source}")]
    TomlParse {
        /// The theme file.
        path: PathBuf,
        /// The parser's report.
        #[source]
        source: toml::de::Error,
    },
    /// A tag refers to an unknown name or has an invalid name.
    #[error(transparent)]
    Style(#[from] StyleError),
}

/// One custom tag: a single target or a list of them.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum TagTargets {
    /// `hint = "dim"`
    One(String),
    /// `error = ["bold", "light_red"]`
    Many(Vec<String>),
}

impl TagTargets {
    fn as_slice(&self) -> &[String] {
        match self {
            Self::One(target) => std::slice::from_ref(target),
            Self::Many(targets) => targets,
        }
    }
}

/// A theme file:
///
/// ```toml
/// [tags]
/// error = ["bold", "light_red"]
/// hint = "dim"
/// orange = "38;5;208"
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Theme {
    /// Custom tags, in file order.
    #[serde(default)]
    pub tags: IndexMap<String, TagTargets>,
}

impl Theme {
    /// Reads and parses a theme file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        log::debug!("Loading theme from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ThemeError::TomlParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Registers every custom tag, in file order, so later tags may build on earlier ones.
    pub fn apply(&self, table: &mut TagTable) -> Result<(), StyleError> {
        for (name, targets) in &self.tags {
            table.alias(name, targets.as_slice())?;
        }
        Ok(())
    }

    /// The built-in table extended with this theme.
    pub fn table(&self) -> Result<TagTable, StyleError> {
        let mut table = TagTable::builtin();
        self.apply(&mut table)?;
        Ok(table)
    }
}
