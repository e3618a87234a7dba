// src/output/sgr.rs

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    // Any SGR sequence: ESC [ n(;n)* m, plus the bare ESC [ m reset.
    static ref SGR_SEQUENCE_RE: Regex = Regex::new(r"\x1b\[(?:[0-9]+(?:;[0-9]+)*)?m").unwrap();
    static ref RAW_CODES_RE: Regex = Regex::new(r"^[0-9]+(?:;[0-9]+)*$").unwrap();
}

/// The SGR reset code.
pub const RESET: u8 = 0;

/// The SGR parameters a style tag stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sgr {
    /// Individual codes, emitted in ascending order.
    Codes(Vec<u8>),
    /// A pre-joined parameter string such as `38;5;208`, emitted verbatim.
    Raw(String),
}

impl Sgr {
    /// A single numeric code.
    pub fn code(code: u8) -> Self {
        Self::Codes(vec![code])
    }

    /// Accepts a pre-joined parameter string. Returns `None` unless it is
    /// digits separated by `;`.
    pub fn raw(codes: &str) -> Option<Self> {
        RAW_CODES_RE
            .is_match(codes)
            .then(|| Self::Raw(codes.to_string()))
    }

    /// Combines several code sets into one. Stays numeric unless a part is raw.
    pub fn merge(parts: Vec<Self>) -> Self {
        if parts.iter().all(|p| matches!(p, Self::Codes(_))) {
            let codes = parts
                .into_iter()
                .flat_map(|p| match p {
                    Self::Codes(c) => c,
                    Self::Raw(_) => Vec::new(),
                })
                .collect();
            Self::Codes(codes)
        } else {
            let joined = parts.iter().map(Self::code_str).collect::<Vec<_>>().join(";");
            Self::Raw(joined)
        }
    }

    /// The parameter string: sorted ascending and `;`-joined, or verbatim if raw.
    pub fn code_str(&self) -> String {
        match self {
            Self::Codes(codes) => join_sorted(codes.iter().copied()),
            Self::Raw(raw) => raw.clone(),
        }
    }
}

fn join_sorted(codes: impl Iterator<Item = u8>) -> String {
    let mut codes: Vec<u8> = codes.collect();
    codes.sort_unstable();
    codes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

/// Wraps a parameter string into an escape sequence.
pub fn wrap_codes(codes: &str) -> String {
    format!("\x1b[{}m", codes)
}

/// Escape sequence that switches `sgr` on.
pub fn open(sgr: &Sgr) -> String {
    wrap_codes(&sgr.code_str())
}

/// Escape sequence that resets, then re-applies every style still `active`.
/// Numeric codes are sorted together with the reset; raw parts follow in stack order.
pub fn close<'a>(active: impl IntoIterator<Item = &'a Sgr>) -> String {
    let mut codes = vec![RESET];
    let mut raws = Vec::new();
    for sgr in active {
        match sgr {
            Sgr::Codes(c) => codes.extend_from_slice(c),
            Sgr::Raw(r) => raws.push(r.as_str()),
        }
    }

    let mut params = join_sorted(codes.into_iter());
    for raw in raws {
        params.push(';');
        params.push_str(raw);
    }
    wrap_codes(&params)
}

/// The plain reset sequence.
pub fn reset() -> String {
    wrap_codes("0")
}

/// Removes every SGR escape sequence from already-rendered text.
pub fn clear_style(text: &str) -> Cow<'_, str> {
    SGR_SEQUENCE_RE.replace_all(text, "")
}

/// True if `text` contains at least one SGR escape sequence.
pub fn has_style(text: &str) -> bool {
    SGR_SEQUENCE_RE.is_match(text)
}
