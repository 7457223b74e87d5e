//! Lexical scanning over GLSL source text
//!
//! This module locates identifier tokens and preprocessor define lines
//! without building an AST. The engine is deliberately lexical: it pattern
//! matches byte runs and leaves grammar validation to the GLSL compiler
//! that eventually consumes the output.
//!
//! Identifier scanning is hand-rolled rather than regex-driven because the
//! classification needs a negative lookbehind (a run immediately preceded
//! by `#` is a directive keyword, not an identifier) which the `regex`
//! crate does not support.

/// An identifier token located in a source buffer
///
/// Half-open byte range `[start, end)` plus the matched text. Spans are
/// transient: they only live for the scan that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Identifier<'a> {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// The identifier text itself
    pub text: &'a str,
}

/// Iterator over the identifier tokens of a source buffer
///
/// Yields maximal `[A-Za-z_][A-Za-z0-9_]*` runs in left-to-right order.
/// A run whose first character directly follows a literal `#` byte is a
/// directive keyword (`#define`, `#ifdef`, ...) and is skipped as a whole.
#[derive(Debug)]
pub(crate) struct Identifiers<'a> {
    source: &'a str,
    pos: usize,
}

/// Returns an iterator over the identifier tokens of `source`
pub(crate) fn identifiers(source: &str) -> Identifiers<'_> {
    Identifiers { source, pos: 0 }
}

/// True for bytes that may start an identifier
fn is_ident_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

/// True for bytes that may continue an identifier
fn is_ident_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

impl<'a> Iterator for Identifiers<'a> {
    type Item = Identifier<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.source.as_bytes();

        while self.pos < bytes.len() {
            if !is_ident_start(bytes[self.pos]) {
                self.pos += 1;
                continue;
            }

            let start = self.pos;
            let mut end = start + 1;
            while end < bytes.len() && is_ident_continue(bytes[end]) {
                end += 1;
            }
            self.pos = end;

            // Adjacency to the literal '#' byte, not directive semantics:
            // `#define` and friends must never surface as rename candidates.
            if start > 0 && bytes[start - 1] == b'#' {
                continue;
            }

            return Some(Identifier {
                start,
                end,
                text: &self.source[start..end],
            });
        }

        None
    }
}

/// Returns true if `line` is a preprocessor macro definition
///
/// Matches `#\s*define` at the start of the line. Callers run this after
/// leading-space removal, so the `#` is expected in column zero, but
/// whitespace between `#` and `define` is still tolerated.
pub(crate) fn is_define_line(line: &str) -> bool {
    match line.strip_prefix('#') {
        Some(rest) => rest.trim_start().starts_with("define"),
        None => false,
    }
}
