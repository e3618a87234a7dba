// src/input/options.rs

use super::value::OptionValue;
use indexmap::IndexMap;
use serde::Serialize;

/// The scalar-or-list view of an option.
///
/// The first occurrence is stored as `Single`; a second occurrence turns it
/// into `Multiple` holding every value seen so far, in encounter order.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OptionEntry {
    /// Given once.
    Single(OptionValue),
    /// Given more than once; every value in order.
    Multiple(Vec<OptionValue>),
}

impl OptionEntry {
    fn push(&mut self, value: OptionValue) {
        match self {
            Self::Single(first) => {
                let first = std::mem::replace(first, OptionValue::Bool(false));
                *self = Self::Multiple(vec![first, value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }

    /// The most recently supplied value.
    pub fn latest(&self) -> Option<&OptionValue> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(values) => values.last(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct OptionRecord {
    entry: OptionEntry,
    history: Vec<OptionValue>,
    long: bool,
}

/// Every option supplied on the command line, keyed without dashes.
///
/// Both projections are kept in lockstep: a key present in one is present in
/// the other, and its history length equals the number of times it was given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionTable {
    records: IndexMap<String, OptionRecord>,
}

impl OptionTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `key`.
    pub fn insert(&mut self, key: &str, value: OptionValue, long: bool) {
        log::trace!("Option '{}' = {:?} (long: {})", key, value, long);
        match self.records.get_mut(key) {
            Some(record) => {
                record.history.push(value.clone());
                record.entry.push(value);
                record.long |= long;
            }
            None => {
                self.records.insert(
                    key.to_string(),
                    OptionRecord {
                        entry: OptionEntry::Single(value.clone()),
                        history: vec![value],
                        long,
                    },
                );
            }
        }
    }

    /// The latest (or only) value supplied for `key`.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.records.get(key).and_then(|r| r.entry.latest())
    }

    /// The scalar-or-list projection for `key`.
    pub fn entry(&self, key: &str) -> Option<&OptionEntry> {
        self.records.get(key).map(|r| &r.entry)
    }

    /// Every value supplied for `key`, in order. Empty when absent.
    pub fn all(&self, key: &str) -> &[OptionValue] {
        self.records
            .get(key)
            .map(|r| r.history.as_slice())
            .unwrap_or_default()
    }

    /// True if `key` was given at least once.
    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// True if any of the given aliases was supplied, e.g. `["h", "help"]`.
    pub fn contains_any<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        keys.iter().any(|k| self.records.contains_key(k.as_ref()))
    }

    /// True if `key` was given at least once in its long (`--key`) form.
    pub fn is_long(&self, key: &str) -> bool {
        self.records.get(key).is_some_and(|r| r.long)
    }

    /// Keys in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no option was given.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Serialize for OptionTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for (key, record) in &self.records {
            map.serialize_entry(key, &record.entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_occurrence_becomes_list() {
        let mut table = OptionTable::new();
        table.insert("n", OptionValue::Int(1), false);
        assert_eq!(table.entry("n"), Some(&OptionEntry::Single(OptionValue::Int(1))));

        table.insert("n", OptionValue::Int(2), false);
        table.insert("n", OptionValue::Int(3), false);
        assert_eq!(
            table.entry("n"),
            Some(&OptionEntry::Multiple(vec![
                OptionValue::Int(1),
                OptionValue::Int(2),
                OptionValue::Int(3),
            ]))
        );
        assert_eq!(table.get("n"), Some(&OptionValue::Int(3)));
        assert_eq!(table.all("n").len(), 3);
    }

    #[test]
    fn test_history_for_single_occurrence() {
        let mut table = OptionTable::new();
        table.insert("verbose", true.into(), true);
        assert_eq!(table.all("verbose"), &[OptionValue::Bool(true)]);
        assert!(table.is_long("verbose"));
        assert!(table.all("missing").is_empty());
    }

    #[test]
    fn test_contains_any_alias() {
        let mut table = OptionTable::new();
        table.insert("help", true.into(), true);
        assert!(table.contains_any(&["h", "help"]));
        assert!(!table.contains_any(&["v", "version"]));
        assert!(!table.contains_any::<&str>(&[]));
    }

    #[test]
    fn test_serializes_scalar_or_list() {
        let mut table = OptionTable::new();
        table.insert("a", true.into(), false);
        table.insert("n", OptionValue::Int(1), false);
        table.insert("n", OptionValue::Int(2), false);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"a":true,"n":[1,2]}"#);
    }
}
