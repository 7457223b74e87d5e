//! The minification engine
//!
//! This module ties the rewrite pipeline together: compaction stages run
//! first over the whole buffer, identifier substitution runs last so that
//! generated short names are never re-matched by the padding or whitespace
//! rules. One engine instance owns one rename namespace; feed every shader
//! of a build through the same instance and shared identifiers come out
//! with identical short names in every file.

use crate::compact::Compactor;
use crate::names::NameGenerator;
use crate::options::MinifyOptions;
use crate::rename::{RenameTable, RenameWarning, substitute};

/// Result of minifying one source buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifiedShader {
    /// The minified source text
    pub code: String,
    /// Non-fatal anomalies encountered during substitution
    pub warnings: Vec<RenameWarning>,
}

/// A GLSL minification engine
///
/// Created once per logical scope (typically per build, not per file) so
/// the rename table persists across inputs. Minification itself is a total
/// function: any input text produces an output text, and malformed
/// constructs such as unterminated block comments are consumed
/// permissively rather than rejected.
#[derive(Debug)]
pub struct Minifier {
    /// Resolved configuration (empty prefixes already replaced)
    options: MinifyOptions,
    /// Compiled compaction stages
    compactor: Compactor,
    /// Identifier renames assigned so far, shared by all inputs
    table: RenameTable,
}

impl Minifier {
    /// Creates an engine from `options`
    ///
    /// Degenerate option values (empty prefixes) are resolved to their
    /// defaults here; construction never fails.
    pub fn new(options: MinifyOptions) -> Self {
        let options = options.normalized();
        let compactor = Compactor::new(options.define_keeps_space_before_paren);
        let table = RenameTable::new(NameGenerator::new(options.output_prefix.clone(), options.start_index));
        Self { options, compactor, table }
    }

    /// The configuration this engine was built with, after normalization
    pub fn options(&self) -> &MinifyOptions {
        &self.options
    }

    /// Minifies one source buffer
    ///
    /// Strips comments and insignificant whitespace, compacts padding
    /// around operators and punctuation, and renames every identifier that
    /// starts with the input prefix (and contains no `__`) to a short
    /// deterministic name. Identifiers already seen by this engine keep
    /// their previously assigned names.
    ///
    /// # Arguments
    /// * `source` - Complete GLSL source text of one shader
    ///
    /// # Returns
    /// The minified text plus any warnings raised during substitution
    pub fn minify(&mut self, source: &str) -> MinifiedShader {
        let compacted = self.compactor.compact(source);
        let mut warnings = Vec::new();
        let code = substitute(&mut self.table, &self.options.input_prefix, &compacted, &mut warnings);
        MinifiedShader { code, warnings }
    }

    /// Number of identifiers this engine has renamed so far
    pub fn rename_count(&self) -> usize {
        self.table.len()
    }

    /// The short name assigned to `identifier`, if it has been renamed
    pub fn short_name_for(&self, identifier: &str) -> Option<&str> {
        self.table.get(identifier)
    }
}

impl Default for Minifier {
    fn default() -> Self {
        Self::new(MinifyOptions::default())
    }
}
