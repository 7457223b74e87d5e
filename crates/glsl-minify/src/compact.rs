//! Whitespace and comment compaction for GLSL source
//!
//! This module implements the size-reduction stages that run before
//! identifier substitution: tab normalization, comment and indentation
//! removal, padding compaction around operators and punctuation, and
//! whitespace collapse. Each stage consumes and produces the whole buffer,
//! in a fixed order.

use regex::Regex;

use crate::scan::is_define_line;

/// Two-character operators whose padding is compacted
const WIDE_SYMBOLS: &str = r"==|!=|<=|>=|\+=|-=|\*=|/=|&&|\|\|";

/// Compiled rewrite stages for one engine instance
///
/// Holds the regular expressions for every compaction pass so repeated
/// [`Compactor::compact`] calls reuse the compiled automata.
#[derive(Debug)]
pub(crate) struct Compactor {
    /// Whether `#define` lines keep the space before `(`
    ///
    /// `#define FOO (x)` is an object-like macro; stripping that space
    /// would turn it into a function-like macro with a parameter `x`.
    define_keeps_space_before_paren: bool,
    /// Line comments, block comments (terminated or not), leading spaces
    re_strip: Regex,
    /// Leading spaces exposed by a removed comment at the head of a line
    re_leading: Regex,
    /// Spaces before a symbol, full symbol set
    re_pre: Regex,
    /// Spaces before a symbol, `#define`-line set (no `(`)
    re_pre_define: Regex,
    /// Spaces after a symbol, full set minus `)`
    re_post: Regex,
    /// Runs of two or more spaces/newlines, first character captured
    re_collapse: Regex,
}

impl Compactor {
    /// Compiles the rewrite stages
    pub fn new(define_keeps_space_before_paren: bool) -> Self {
        // An unterminated block comment falls through to the `/\*.*`
        // alternative and consumes to the end of the buffer; malformed
        // input is never a hard failure at this layer.
        let re_strip = Regex::new(r"(?ms)//.*?$|/\*.*?\*/|/\*.*|^ +").unwrap();
        let re_leading = Regex::new(r"(?m)^ +").unwrap();

        let re_pre = Regex::new(&format!(r" +({WIDE_SYMBOLS}|[-+*/=<>!#.,()?;:{{}}])")).unwrap();
        let re_pre_define = Regex::new(&format!(r" +({WIDE_SYMBOLS}|[-+*/=<>!#.,)?;:{{}}])")).unwrap();
        let re_post = Regex::new(&format!(r"({WIDE_SYMBOLS}|[-+*/=<>!#.,(?;:{{}}]) +")).unwrap();

        let re_collapse = Regex::new(r"([ \n])[ \n]+").unwrap();

        Self {
            define_keeps_space_before_paren,
            re_strip,
            re_leading,
            re_pre,
            re_pre_define,
            re_post,
            re_collapse,
        }
    }

    /// Runs the compaction stages over a whole source buffer
    ///
    /// Stage order is fixed: tab normalization, comment/indentation
    /// removal, line-wise pre-padding compaction, whole-buffer
    /// post-padding compaction, whitespace collapse. Identifier
    /// substitution runs separately, after this function, so generated
    /// short names are never re-matched by these passes.
    pub fn compact(&self, source: &str) -> String {
        // Stage 1: horizontal tabs become single spaces, carriage returns go
        let normalized = source.replace('\t', " ").replace('\r', "");

        // Stage 2: comments and leading indentation, one combined pass,
        // then a leading-space pass over the result so indentation exposed
        // by a removed comment is stripped as well
        let stripped = self.re_strip.replace_all(&normalized, "");
        let stripped = self.re_leading.replace_all(&stripped, "");

        // Stage 3a: per-line pre-padding; `#define` lines may keep the
        // space before `(` so macro parameter lists stay intact
        let lines: Vec<String> = stripped
            .split('\n')
            .map(|line| {
                let re_pre = if self.define_keeps_space_before_paren && is_define_line(line) {
                    &self.re_pre_define
                } else {
                    &self.re_pre
                };
                re_pre.replace_all(line, "${1}").into_owned()
            })
            .collect();

        // Stage 3b: whole-buffer post-padding, re-run after the line-wise
        // pass because some padding only becomes adjacent once spaces
        // before symbols are gone
        let joined = lines.join("\n");
        let padded = self.re_post.replace_all(&joined, "${1}");

        // Stage 4: any mixed run of spaces/newlines collapses to its first
        // character, so a blank-line run keeps one newline and an inline
        // space run keeps one space
        self.re_collapse.replace_all(&padded, "${1}").into_owned()
    }
}
