//! Identifier renaming
//!
//! This module owns the mapping from original identifiers to generated
//! short names and applies it as the final rewrite pass over an already
//! compacted buffer. The table is append-only and lives as long as the
//! engine that owns it, so an identifier repeated across several inputs
//! always receives the same short name.

use std::collections::HashMap;

use crate::names::NameGenerator;
use crate::scan::identifiers;

/// A non-fatal anomaly reported during substitution
///
/// Raised for an identifier that ends with the input prefix without
/// starting with it, which usually means a misplaced prefix. The token is
/// passed through unchanged; processing never stops because of a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameWarning {
    /// The literal identifier text that triggered the warning
    pub identifier: String,
}

impl std::fmt::Display for RenameWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "identifier '{}' ends with the rename prefix but does not start with it; left unchanged",
            self.identifier
        )
    }
}

/// Append-only mapping from original identifiers to short names
#[derive(Debug)]
pub(crate) struct RenameTable {
    /// Assigned replacements, keyed by original identifier text
    entries: HashMap<String, String>,
    /// Generator for the next unassigned short name
    generator: NameGenerator,
}

impl RenameTable {
    /// Creates an empty table backed by `generator`
    pub fn new(generator: NameGenerator) -> Self {
        Self {
            entries: HashMap::new(),
            generator,
        }
    }

    /// Returns the short name for `identifier`, assigning one on first use
    ///
    /// Assignment order follows first-encounter order, so the mapping is
    /// deterministic for a given input sequence.
    pub fn resolve(&mut self, identifier: &str) -> &str {
        self.entries.entry(identifier.to_string()).or_insert_with(|| {
            let short = self.generator.next_name();
            tracing::debug!(identifier, short = %short, "assigned short name");
            short
        })
    }

    /// Returns the short name assigned to `identifier`, if any
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    /// Number of identifiers renamed so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Rewrites the qualifying identifiers of a compacted buffer
///
/// For every identifier token:
/// - starts with `input_prefix` and contains no `__`: replaced with its
///   short name from `table` (assigned on first encounter),
/// - starts with `input_prefix` but contains `__`: reserved-style name,
///   copied through untouched,
/// - ends with `input_prefix` without starting with it: copied through
///   and reported via a [`RenameWarning`],
/// - anything else: copied through untouched.
///
/// All bytes outside replaced tokens are emitted verbatim and in order.
pub(crate) fn substitute(table: &mut RenameTable, input_prefix: &str, source: &str, warnings: &mut Vec<RenameWarning>) -> String {
    let mut out = String::with_capacity(source.len());
    let mut copied = 0;

    for ident in identifiers(source) {
        if ident.text.starts_with(input_prefix) {
            // Double underscores mark reserved/driver-internal names that
            // must keep their spelling.
            if ident.text.contains("__") {
                continue;
            }
            out.push_str(&source[copied..ident.start]);
            out.push_str(table.resolve(ident.text));
            copied = ident.end;
        } else if ident.text.ends_with(input_prefix) {
            warnings.push(RenameWarning {
                identifier: ident.text.to_string(),
            });
        }
    }

    out.push_str(&source[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RenameTable {
        RenameTable::new(NameGenerator::new("_", 0))
    }

    fn rewrite(table: &mut RenameTable, source: &str) -> (String, Vec<RenameWarning>) {
        let mut warnings = Vec::new();
        let out = substitute(table, "_", source, &mut warnings);
        (out, warnings)
    }

    #[test]
    fn test_prefixed_identifiers_renamed_in_encounter_order() {
        let mut table = table();
        let (out, warnings) = rewrite(&mut table, "vec3 _normal=_normal*_scale;");
        assert_eq!(out, "vec3 _a=_a*_b;");
        assert!(warnings.is_empty());
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("_normal"), Some("_a"));
        assert_eq!(table.get("_scale"), Some("_b"));
    }

    #[test]
    fn test_unprefixed_identifiers_untouched() {
        let mut table = table();
        let (out, _) = rewrite(&mut table, "float radius=2.0;");
        assert_eq!(out, "float radius=2.0;");
        assert_eq!(table.len(), 0);
        assert_eq!(table.get("radius"), None);
    }

    #[test]
    fn test_double_underscore_excluded() {
        let mut table = table();
        let (out, warnings) = rewrite(&mut table, "int __reserved=1;int _x__y=2;");
        assert_eq!(out, "int __reserved=1;int _x__y=2;");
        // reserved names are skipped silently, without a warning
        assert!(warnings.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_suffix_prefix_warns_and_passes_through() {
        let mut table = table();
        let (out, warnings) = rewrite(&mut table, "int foo_=1;");
        assert_eq!(out, "int foo_=1;");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].identifier, "foo_");
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_directive_keywords_never_renamed() {
        let mut table = table();
        let (out, _) = rewrite(&mut table, "#define _W 2\nfloat x=_W;");
        assert_eq!(out, "#define _a 2\nfloat x=_a;");
        assert_eq!(table.get("define"), None);
    }

    #[test]
    fn test_table_persists_across_buffers() {
        let mut table = table();
        let (first, _) = rewrite(&mut table, "vec2 _uv;");
        let (second, _) = rewrite(&mut table, "vec2 _pos=_uv;");
        assert_eq!(first, "vec2 _a;");
        assert_eq!(second, "vec2 _b=_a;");
    }
}
