// src/output/modifier.rs

use super::{
    sgr,
    switch::AnsiSwitch,
    tags::{self, ColorLayer, StyleError},
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Resets inside already-styled text: `ESC[0m` or the bare `ESC[m`.
    static ref INNER_RESET_RE: Regex = Regex::new(r"\x1b\[0?m").unwrap();
}

const END: &str = "\x1b[m";

/// Wraps whole strings in one style built from a color pair and attributes.
#[derive(Debug, Clone)]
pub struct Modifier {
    ansi: AnsiSwitch,
}

impl Modifier {
    /// A modifier bound to `ansi`.
    pub fn new(ansi: AnsiSwitch) -> Self {
        Self { ansi }
    }

    /// Styles `text` with a foreground color, a background color and attributes.
    ///
    /// With only a background, the foreground is set to `default`. With nothing
    /// at all, the text is wrapped in the default pair (`39;49`). If `text`
    /// already contains escape sequences, the style is re-applied after each
    /// inner reset so it covers the whole string.
    pub fn make(
        &self,
        text: &str,
        fg: Option<&str>,
        bg: Option<&str>,
        attributes: &[&str],
    ) -> Result<String, StyleError> {
        let codes = build_codes(fg, bg, attributes)?;
        if text.is_empty() || !self.ansi.is_enabled() {
            return Ok(text.to_string());
        }

        let params = if codes.is_empty() {
            let fg_default = tags::color_code(ColorLayer::Foreground, "default")?;
            let bg_default = tags::color_code(ColorLayer::Background, "default")?;
            format!("{};{}", fg_default, bg_default)
        } else {
            codes.iter().map(u8::to_string).collect::<Vec<_>>().join(";")
        };
        let head = sgr::wrap_codes(&params);

        if !sgr::has_style(text) {
            return Ok(format!("{}{}{}", head, text, END));
        }

        let body = INNER_RESET_RE.replace_all(text, |caps: &regex::Captures<'_>| {
            let reset = caps.get(0).map_or("", |m| m.as_str());
            format!("{}{}", reset, head)
        });
        Ok(format!("{}{}{}", head, body, END))
    }
}

/// Codes in the order given: foreground, background, then attributes.
fn build_codes(
    fg: Option<&str>,
    bg: Option<&str>,
    attributes: &[&str],
) -> Result<Vec<u8>, StyleError> {
    let fg_code = fg
        .map(|name| tags::color_code(ColorLayer::Foreground, name))
        .transpose()?;
    let bg_code = bg
        .map(|name| tags::color_code(ColorLayer::Background, name))
        .transpose()?;

    let mut codes = Vec::new();
    match (fg_code, bg_code) {
        (Some(f), Some(b)) => codes.extend([f, b]),
        (Some(f), None) => codes.push(f),
        (None, Some(b)) => {
            codes.push(tags::color_code(ColorLayer::Foreground, "default")?);
            codes.push(b);
        }
        (None, None) => {}
    }

    for attribute in attributes {
        codes.push(tags::attribute_code(attribute)?);
    }
    Ok(codes)
}

/// Foreground color names accepted by [`Modifier::make`].
pub fn foreground_colors() -> Vec<&'static str> {
    tags::FOREGROUND.iter().map(|(name, _)| *name).collect()
}

/// Background color names accepted by [`Modifier::make`].
pub fn background_colors() -> Vec<&'static str> {
    tags::BACKGROUND.iter().map(|(name, _)| *name).collect()
}

/// Attribute names accepted by [`Modifier::make`].
pub fn attributes() -> Vec<&'static str> {
    tags::ATTRIBUTES.iter().map(|(name, _)| *name).collect()
}
