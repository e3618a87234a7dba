// src/output/markup.rs

//! # Markup
//!
//! Compiles bracket tags such as `<red>text</red>` into ANSI escape sequences.
//! A closing tag does not simply reset: it re-applies whatever styles are still
//! open, so `<red><bold>x</bold>y</red>` renders `y` in red.

use super::{
    sgr::{self, Sgr},
    switch::AnsiSwitch,
    tags::{StyleError, TagTable},
};
use regex::{Captures, Regex};

/// Codes currently in effect, innermost last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleStack {
    active: Vec<Sgr>,
}

impl StyleStack {
    /// An empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack that starts with `outer` already applied.
    pub fn seeded(outer: Option<Sgr>) -> Self {
        Self {
            active: outer.into_iter().collect(),
        }
    }

    /// Opens a span and returns the sequence that switches it on.
    pub fn push(&mut self, sgr: Sgr) -> String {
        let seq = sgr::open(&sgr);
        self.active.push(sgr);
        seq
    }

    /// Closes the innermost span and returns the sequence that restores the
    /// enclosing styles. Closing with nothing open is a plain reset.
    pub fn pop(&mut self) -> String {
        if self.active.pop().is_none() {
            log::trace!("Closing tag with no open tag; emitting a plain reset");
        }
        sgr::close(&self.active)
    }

    /// Number of open spans.
    pub fn depth(&self) -> usize {
        self.active.len()
    }

    /// Open spans, outermost first.
    pub fn active(&self) -> &[Sgr] {
        &self.active
    }
}

/// Renders style markup using a tag table and the shared ANSI switch.
#[derive(Debug, Clone)]
pub struct MarkupCompiler {
    table: TagTable,
    ansi: AnsiSwitch,
    tag_re: Regex,
    outer_re: Regex,
}

impl MarkupCompiler {
    /// Builds the tag patterns for every name in `table`.
    pub fn new(table: TagTable, ansi: AnsiSwitch) -> Result<Self, StyleError> {
        let mut names: Vec<String> = table.names().map(regex::escape).collect();
        // Longest first, so `red` never shadows `reverse` inside the alternation.
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = names.join("|");

        // Opening `<red>`, closing `</red>` and the escaped `<\/red>` form.
        let tag_re = Regex::new(&format!(r"(?i)<(?:\\*/)*({})>", alternation))?;
        // A single trailing newline may follow the closing tag.
        let outer_re = Regex::new(&format!(r"(?is)^<({0})>.*</({0})>\n?$", alternation))?;

        Ok(Self {
            table,
            ansi,
            tag_re,
            outer_re,
        })
    }

    /// Compiler over the built-in vocabulary.
    pub fn builtin(ansi: AnsiSwitch) -> Result<Self, StyleError> {
        Self::new(TagTable::builtin(), ansi)
    }

    /// The tag table in use.
    pub fn table(&self) -> &TagTable {
        &self.table
    }

    /// The switch read on every render.
    pub fn ansi(&self) -> &AnsiSwitch {
        &self.ansi
    }

    /// Renders `text` according to the switch: escape sequences when on,
    /// tags stripped when off.
    pub fn render(&self, text: &str) -> String {
        if self.ansi.is_enabled() {
            self.compile(text)
        } else {
            self.strip(text)
        }
    }

    /// Removes every recognised tag, repeating until none is left, so tags
    /// assembled by an earlier removal (`<<red>red>`) go too.
    pub fn strip(&self, text: &str) -> String {
        let mut current = text.to_string();
        while self.tag_re.is_match(&current) {
            current = self.tag_re.replace_all(&current, "").into_owned();
        }
        current
    }

    /// Replaces every tag with its escape sequence, regardless of the switch.
    pub fn compile(&self, text: &str) -> String {
        let outer = self.outer_code(text);
        let start = match &outer {
            Some(sgr) => sgr::open(sgr),
            None => sgr::open(&Sgr::code(sgr::RESET)),
        };

        let mut stack = StyleStack::seeded(outer);
        let body = self.tag_re.replace_all(text, |caps: &Captures<'_>| {
            let tag = caps.get(0).map_or("", |m| m.as_str());
            if tag.contains('/') {
                stack.pop()
            } else {
                let name = caps.get(1).map_or("", |m| m.as_str());
                match self.table.get(name) {
                    Some(code) => stack.push(code.clone()),
                    None => tag.to_string(),
                }
            }
        });

        log::trace!("Compiled markup, {} span(s) left open", stack.depth());
        format!("{}{}{}", start, body, sgr::reset())
    }

    /// Codes of the tag pair wrapping the whole input, if one does.
    fn outer_code(&self, text: &str) -> Option<Sgr> {
        let caps = self.outer_re.captures(text)?;
        let open = caps.get(1)?.as_str();
        let close = caps.get(2)?.as_str();
        if !open.eq_ignore_ascii_case(close) {
            return None;
        }
        self.table.get(open).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const RESET: &str = "\x1b[0m";

    fn compiler(enabled: bool) -> MarkupCompiler {
        MarkupCompiler::builtin(AnsiSwitch::new(enabled)).unwrap()
    }

    #[test]
    fn test_stack_push_pop() {
        let mut stack = StyleStack::new();
        assert_eq!(stack.push(Sgr::code(31)), "\x1b[31m");
        assert_eq!(stack.push(Sgr::code(1)), "\x1b[1m");
        assert_eq!(stack.pop(), "\x1b[0;31m");
        assert_eq!(stack.pop(), RESET);
        assert_eq!(stack.pop(), RESET);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_disabled_strips_tags() {
        assert_eq!(compiler(false).render("<red>x</red>"), "x");
        assert_eq!(compiler(false).render("a <Bold>b<\\/bold> c"), "a b c");
    }

    #[test]
    fn test_single_wrapped_tag() {
        let out = compiler(true).render("<red>x</red>");
        assert_eq!(out, "\x1b[31m\x1b[31mx\x1b[0;31m\x1b[0m");
        assert_eq!(sgr::clear_style(&out), "x");
    }

    #[test]
    fn test_nested_close_restores_enclosing_style() {
        let out = compiler(true).render("<red><bold>x</bold>y</red>");
        assert_eq!(out, "\x1b[31m\x1b[31m\x1b[1mx\x1b[0;31;31my\x1b[0;31m\x1b[0m");

        let after_bold = out.split("x").nth(1).unwrap();
        assert!(after_bold.starts_with("\x1b[0;31;31m"));
    }

    #[test]
    fn test_escaped_close_restores_enclosing_style() {
        let out = compiler(true).compile("<red><bold>x<\\/bold>y</red>");
        assert_eq!(out, "\x1b[31m\x1b[31m\x1b[1mx\x1b[0;31;31my\x1b[0;31m\x1b[0m");
    }

    #[test]
    fn test_outer_pair_before_trailing_newline() {
        let out = compiler(true).compile("<red>x</red>\n");
        assert_eq!(out, "\x1b[31m\x1b[31mx\x1b[0;31m\n\x1b[0m");
    }

    #[test]
    fn test_unwrapped_input_starts_from_reset() {
        let out = compiler(true).render("a <green>b</green> c");
        assert_eq!(out, "\x1b[0ma \x1b[32mb\x1b[0m c\x1b[0m");
    }

    #[test]
    fn test_mismatched_outer_pair_is_not_an_outer_code() {
        let out = compiler(true).render("<red>a</blue>");
        assert!(out.starts_with("\x1b[0m\x1b[31m"));
    }

    #[test]
    fn test_unmatched_close_is_plain_reset() {
        let out = compiler(true).render("a</red>b");
        assert_eq!(out, "\x1b[0ma\x1b[0mb\x1b[0m");
    }

    #[test]
    fn test_same_tag_nested() {
        let out = compiler(true).render("x<blue>1<blue>2</blue>3</blue>");
        assert_eq!(
            out,
            "\x1b[0mx\x1b[34m1\x1b[34m2\x1b[0;34m3\x1b[0m\x1b[0m"
        );
    }

    #[test]
    fn test_unknown_tags_are_left_alone() {
        let c = compiler(true);
        assert_eq!(c.strip("<orange>x</orange>"), "<orange>x</orange>");
        assert_eq!(c.strip("<reverse>x</reverse>"), "x");
    }

    #[test]
    fn test_background_and_case_insensitive() {
        let out = compiler(true).render("<BACKGROUND_GREEN>ok</background_green>");
        assert!(out.starts_with("\x1b[42m\x1b[42mok"));
    }

    #[test]
    fn test_custom_alias_with_raw_codes() {
        let mut table = TagTable::builtin();
        table.alias("orange", &["38;5;208"]).unwrap();
        table.alias("error", &["light_red", "bold"]).unwrap();
        let c = MarkupCompiler::new(table, AnsiSwitch::new(true)).unwrap();

        assert_eq!(
            c.render("x<orange>o</orange>"),
            "\x1b[0mx\x1b[38;5;208mo\x1b[0m\x1b[0m"
        );
        assert!(c.render("<error>e</error>").starts_with("\x1b[1;91m"));
    }

    #[test]
    fn test_switch_is_read_on_every_render() {
        let switch = AnsiSwitch::new(true);
        let c = MarkupCompiler::builtin(switch.clone()).unwrap();
        assert!(c.render("<red>x</red>").contains('\x1b'));
        switch.disable();
        assert_eq!(c.render("<red>x</red>"), "x");
    }

    proptest! {
        #[test]
        fn prop_strip_is_idempotent(text in "[a-z <>/\\\\]{0,40}") {
            let c = compiler(false);
            let once = c.strip(&text);
            prop_assert_eq!(c.strip(&once), once.clone());
        }

        #[test]
        fn prop_compiled_text_matches_stripped(words in prop::collection::vec("[a-z ]{0,5}", 1..5)) {
            let tags = ["red", "bold", "background_blue", "underline"];
            let mut markup = String::new();
            for (i, word) in words.iter().enumerate() {
                let tag = tags[i % tags.len()];
                markup.push_str(&format!("<{0}>{1}</{0}>", tag, word));
            }
            let c = compiler(true);
            let compiled = c.compile(&markup);
            prop_assert_eq!(sgr::clear_style(&compiled).into_owned(), c.strip(&markup));
        }
    }
}
