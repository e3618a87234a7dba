// src/input/args.rs

use super::value::OptionValue;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Key of a positional argument: its order of appearance or an explicit name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgKey {
    /// Position among the indexed arguments.
    Index(usize),
    /// Name from a `name=value` token.
    Name(String),
}

impl From<usize> for ArgKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for ArgKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl fmt::Display for ArgKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{}", i),
            Self::Name(n) => f.write_str(n),
        }
    }
}

impl Serialize for ArgKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A positional value: indexed ones are kept verbatim, `name=value` ones are coerced.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ArgValue {
    /// An indexed token, verbatim.
    Raw(String),
    /// The value of a `name=value` token.
    Coerced(OptionValue),
}

impl ArgValue {
    /// The value as text, regardless of how it was stored.
    pub fn to_text(&self) -> String {
        match self {
            Self::Raw(s) => s.clone(),
            Self::Coerced(v) => v.to_string(),
        }
    }
}

/// Ordered positional arguments. Iteration follows insertion order; lookup is by key.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Positionals {
    values: IndexMap<ArgKey, ArgValue>,
    #[serde(skip)]
    next_index: usize,
}

impl Positionals {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an indexed value and returns the index it was stored under.
    pub fn push(&mut self, value: &str) -> usize {
        let index = self.next_index;
        self.values
            .insert(ArgKey::Index(index), ArgValue::Raw(value.to_string()));
        self.next_index += 1;
        index
    }

    /// Stores a named value. A repeated name overwrites the earlier value in place.
    pub fn insert_named(&mut self, name: &str, value: OptionValue) {
        self.values
            .insert(ArgKey::Name(name.to_string()), ArgValue::Coerced(value));
    }

    /// Value by index or name.
    pub fn get(&self, key: impl Into<ArgKey>) -> Option<&ArgValue> {
        self.values.get(&key.into())
    }

    /// Indexed value as a string slice.
    pub fn index(&self, index: usize) -> Option<&str> {
        match self.values.get(&ArgKey::Index(index)) {
            Some(ArgValue::Raw(s)) => Some(s),
            _ => None,
        }
    }

    /// Indexed values only, in order.
    pub fn indexed(&self) -> Vec<&str> {
        self.values
            .values()
            .filter_map(|v| match v {
                ArgValue::Raw(s) => Some(s.as_str()),
                ArgValue::Coerced(_) => None,
            })
            .collect()
    }

    /// Every key and value, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ArgKey, &ArgValue)> {
        self.values.iter()
    }

    /// Number of indexed and named values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if nothing was stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
