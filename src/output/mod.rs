// src/output/mod.rs

//! Style markup, SGR codes and the shared ANSI switch.

/// Markup compiler and style stack.
pub mod markup;
/// Whole-string styling.
pub mod modifier;
/// Stream output.
pub mod printer;
/// SGR codes and escape sequences.
pub mod sgr;
/// The shared ANSI switch.
pub mod switch;
/// Tag vocabulary.
pub mod tags;
/// Theme files.
pub mod theme;

pub use markup::{MarkupCompiler, StyleStack};
pub use modifier::Modifier;
pub use printer::Printer;
pub use sgr::{Sgr, clear_style};
pub use switch::AnsiSwitch;
pub use tags::{ColorLayer, StyleError, TagTable};
pub use theme::{Theme, ThemeError};
