//! Engine configuration
//!
//! This module provides the [`MinifyOptions`] struct and its YAML manifest
//! loader. Options are resolved at engine construction; invalid values fall
//! back to defaults instead of failing, so configuration can never abort a
//! minification run.

use serde::{Deserialize, Serialize};

/// Default prefix for both rename candidates and generated names
const DEFAULT_PREFIX: &str = "_";

/// Configuration for one [`Minifier`](crate::Minifier) instance
///
/// All fields have defaults, so a manifest only needs to state what it
/// overrides:
///
/// ```yaml
/// input_prefix: "_"
/// output_prefix: "_"
/// start_index: 0
/// define_keeps_space_before_paren: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyOptions {
    /// Prefix an identifier must start with to be renamed
    pub input_prefix: String,
    /// Prefix prepended to every generated short name
    pub output_prefix: String,
    /// First value of the name counter (historically 0 or 1)
    pub start_index: u64,
    /// Keep the space before `(` on `#define` lines
    ///
    /// `#define FOO (x)` and `#define FOO(x)` mean different things to the
    /// preprocessor, so the default preserves that space.
    pub define_keeps_space_before_paren: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            input_prefix: DEFAULT_PREFIX.to_string(),
            output_prefix: DEFAULT_PREFIX.to_string(),
            start_index: 0,
            define_keeps_space_before_paren: true,
        }
    }
}

impl MinifyOptions {
    /// Creates the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from YAML manifest content
    ///
    /// # Arguments
    /// * `yaml_content` - YAML string containing the options
    pub fn from_yaml(yaml_content: &str) -> Result<Self, serde_norway::Error> {
        serde_norway::from_str(yaml_content)
    }

    /// Parses options from a YAML manifest file
    ///
    /// # Arguments
    /// * `path` - Path to the YAML manifest file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml(&content)?)
    }

    /// Resolves degenerate values to their defaults
    ///
    /// An empty prefix would turn every identifier into a rename candidate
    /// (or generate bare digit-run names); both fall back to `_` rather
    /// than erroring.
    pub(crate) fn normalized(mut self) -> Self {
        if self.input_prefix.is_empty() {
            self.input_prefix = DEFAULT_PREFIX.to_string();
        }
        if self.output_prefix.is_empty() {
            self.output_prefix = DEFAULT_PREFIX.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MinifyOptions::default();
        assert_eq!(options.input_prefix, "_");
        assert_eq!(options.output_prefix, "_");
        assert_eq!(options.start_index, 0);
        assert!(options.define_keeps_space_before_paren);
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
input_prefix: "m_"
start_index: 1
"#;
        let options = MinifyOptions::from_yaml(yaml).unwrap();
        assert_eq!(options.input_prefix, "m_");
        // unspecified fields keep their defaults
        assert_eq!(options.output_prefix, "_");
        assert_eq!(options.start_index, 1);
        assert!(options.define_keeps_space_before_paren);
    }

    #[test]
    fn test_empty_yaml_is_all_defaults() {
        let options = MinifyOptions::from_yaml("{}").unwrap();
        assert_eq!(options, MinifyOptions::default());
    }

    #[test]
    fn test_empty_prefixes_fall_back() {
        let options = MinifyOptions {
            input_prefix: String::new(),
            output_prefix: String::new(),
            ..MinifyOptions::default()
        }
        .normalized();
        assert_eq!(options.input_prefix, "_");
        assert_eq!(options.output_prefix, "_");
    }
}
