// src/output/printer.rs

use super::markup::MarkupCompiler;
use std::io::{self, Write};

/// Renders markup and writes it to a stream.
#[derive(Debug, Clone)]
pub struct Printer {
    compiler: MarkupCompiler,
}

impl Printer {
    /// A printer rendering through `compiler`.
    pub fn new(compiler: MarkupCompiler) -> Self {
        Self { compiler }
    }

    /// The compiler used for every write.
    pub fn compiler(&self) -> &MarkupCompiler {
        &self.compiler
    }

    /// Renders `message` and writes it to `out`, optionally followed by a newline.
    pub fn write_to<W: Write>(&self, out: &mut W, message: &str, newline: bool) -> io::Result<()> {
        let rendered = self.compiler.render(message);
        out.write_all(rendered.as_bytes())?;
        if newline {
            out.write_all(b"\n")?;
        }
        out.flush()
    }

    /// Writes to stdout, or stderr when `to_stderr` is set.
    pub fn write(&self, message: &str, newline: bool, to_stderr: bool) -> io::Result<()> {
        if to_stderr {
            self.write_to(&mut io::stderr().lock(), message, newline)
        } else {
            self.write_to(&mut io::stdout().lock(), message, newline)
        }
    }

    /// One line to stdout.
    pub fn line(&self, message: &str) -> io::Result<()> {
        self.write(message, true, false)
    }

    /// One green line to stdout.
    pub fn info(&self, message: &str) -> io::Result<()> {
        self.line(&format!("<green>{}</green>", message))
    }

    /// One yellow line to stderr.
    pub fn warning(&self, message: &str) -> io::Result<()> {
        self.write(&format!("<yellow>{}</yellow>", message), true, true)
    }

    /// One red line to stderr.
    pub fn error(&self, message: &str) -> io::Result<()> {
        self.write(&format!("<red>{}</red>", message), true, true)
    }
}
