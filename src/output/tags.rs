// src/output/tags.rs

use super::sgr::Sgr;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use thiserror::Error;

lazy_static! {
    static ref TAG_NAME_RE: Regex = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();
}

/// Text attributes.
pub const ATTRIBUTES: &[(&str, u8)] = &[
    ("bold", 1),
    ("dim", 2),
    ("italic", 3),
    ("underlined", 4),
    ("underline", 4),
    ("blink", 5),
    ("reverse", 7),
    ("hidden", 8),
];

/// Foreground colors.
pub const FOREGROUND: &[(&str, u8)] = &[
    ("default", 39),
    ("black", 30),
    ("red", 31),
    ("green", 32),
    ("yellow", 33),
    ("blue", 34),
    ("purple", 35),
    ("cyan", 36),
    ("light_gray", 37),
    ("dark_grey", 90),
    ("light_red", 91),
    ("light_green", 92),
    ("light_yellow", 93),
    ("light_blue", 94),
    ("light_purple", 95),
    ("light_cyan", 96),
    ("white", 97),
];

/// Background colors, keyed by the same names as [`FOREGROUND`].
pub const BACKGROUND: &[(&str, u8)] = &[
    ("default", 49),
    ("black", 40),
    ("red", 41),
    ("green", 42),
    ("yellow", 43),
    ("blue", 44),
    ("purple", 45),
    ("cyan", 46),
    ("light_gray", 47),
    ("dark_grey", 100),
    ("light_red", 101),
    ("light_green", 102),
    ("light_yellow", 103),
    ("light_blue", 104),
    ("light_purple", 105),
    ("light_cyan", 106),
    ("white", 107),
];

/// Prefix that turns a color name into its background tag.
pub const BACKGROUND_PREFIX: &str = "background_";

/// Which half of a color pair a name was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLayer {
    /// Text color, codes 30-39 and 90-97.
    Foreground,
    /// Background color, codes 40-49 and 100-107.
    Background,
}

impl fmt::Display for ColorLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Foreground => f.write_str("foreground"),
            Self::Background => f.write_str("background"),
        }
    }
}

/// Errors raised when styles are configured with names the table does not know.
#[derive(Error, Debug)]
pub enum StyleError {
    /// A tag name missing from the table.
    #[error("Unknown style tag '<{name}>'. [{known}]")]
    UnknownTag {
        /// The requested name.
        name: String,
        /// Every registered name, comma-separated.
        known: String,
    },
    /// A color name missing from its layer.
    #[error("Unsupported {layer} color '{name}'. [{known}]")]
    UnknownColor {
        /// Foreground or background.
        layer: ColorLayer,
        /// The requested name.
        name: String,
        /// Every color name of that layer, comma-separated.
        known: String,
    },
    /// An attribute name that does not exist.
    #[error("Unsupported attribute '{name}'. [{known}]")]
    UnknownAttribute {
        /// The requested name.
        name: String,
        /// Every attribute name, comma-separated.
        known: String,
    },
    /// A custom tag name that cannot appear in markup.
    #[error("Invalid tag name '{0}': use lowercase letters, digits and '_', starting with a letter.")]
    InvalidTagName(String),
    /// The tag pattern could not be compiled.
    #[error("Failed to build the tag pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub(crate) fn known_names(table: &[(&str, u8)]) -> String {
    table.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(",")
}

/// Looks up a foreground or background color code by name.
pub fn color_code(layer: ColorLayer, name: &str) -> Result<u8, StyleError> {
    let table = match layer {
        ColorLayer::Foreground => FOREGROUND,
        ColorLayer::Background => BACKGROUND,
    };
    let lowered = name.to_lowercase();
    table
        .iter()
        .find(|(n, _)| *n == lowered)
        .map(|(_, code)| *code)
        .ok_or_else(|| StyleError::UnknownColor {
            layer,
            name: name.to_string(),
            known: known_names(table),
        })
}

/// Looks up a text attribute code by name.
pub fn attribute_code(name: &str) -> Result<u8, StyleError> {
    let lowered = name.to_lowercase();
    ATTRIBUTES
        .iter()
        .find(|(n, _)| *n == lowered)
        .map(|(_, code)| *code)
        .ok_or_else(|| StyleError::UnknownAttribute {
            name: name.to_string(),
            known: known_names(ATTRIBUTES),
        })
}

/// Maps tag names to SGR codes. Names are stored and matched in lowercase.
#[derive(Debug, Clone, PartialEq)]
pub struct TagTable {
    tags: IndexMap<String, Sgr>,
}

impl TagTable {
    /// The built-in vocabulary: attributes, foreground colors and
    /// `background_`-prefixed background colors.
    pub fn builtin() -> Self {
        let mut tags = IndexMap::new();
        for (name, code) in ATTRIBUTES.iter().chain(FOREGROUND) {
            tags.insert((*name).to_string(), Sgr::code(*code));
        }
        for (name, code) in BACKGROUND {
            tags.insert(format!("{}{}", BACKGROUND_PREFIX, name), Sgr::code(*code));
        }
        Self { tags }
    }

    /// Registers `name` as a tag combining `targets`.
    ///
    /// Each target is an existing tag name or a raw parameter string such as
    /// `38;5;208`. Existing names, built-in ones included, are replaced.
    pub fn alias<S: AsRef<str>>(&mut self, name: &str, targets: &[S]) -> Result<(), StyleError> {
        let name = name.to_lowercase();
        if !TAG_NAME_RE.is_match(&name) {
            return Err(StyleError::InvalidTagName(name));
        }

        let mut parts = Vec::with_capacity(targets.len());
        for target in targets.iter().map(S::as_ref) {
            let sgr = match Sgr::raw(target) {
                Some(raw) => raw,
                None => self.code(target)?.clone(),
            };
            parts.push(sgr);
        }
        if parts.is_empty() {
            return Err(StyleError::UnknownTag {
                name,
                known: self.known(),
            });
        }

        let sgr = Sgr::merge(parts);
        log::debug!("Registered tag <{}> as '{}'", name, sgr.code_str());
        self.tags.insert(name, sgr);
        Ok(())
    }

    /// Codes for `name`, failing with `UnknownTag` when it is not registered.
    pub fn code(&self, name: &str) -> Result<&Sgr, StyleError> {
        self.get(name).ok_or_else(|| StyleError::UnknownTag {
            name: name.to_string(),
            known: self.known(),
        })
    }

    /// Codes for `name`, case-insensitive.
    pub fn get(&self, name: &str) -> Option<&Sgr> {
        self.tags.get(&name.to_lowercase())
    }

    /// True if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    /// Names and codes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Sgr)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True if no tag is registered.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn known(&self) -> String {
        self.names().collect::<Vec<_>>().join(",")
    }
}

impl Default for TagTable {
    fn default() -> Self {
        Self::builtin()
    }
}
