//! GLSL shader minification engine
//!
//! This crate reduces the size of GLSL shader source for embedding in
//! distributed applications: it strips comments and insignificant
//! whitespace, compacts padding around operators and punctuation, and
//! renames prefixed "internal" identifiers to short deterministic codes.
//!
//! The engine is purely lexical by design. It does not parse GLSL, build
//! an AST, or track scopes; it classifies and rewrites byte spans, which
//! keeps it total over arbitrary input text (malformed constructs are
//! consumed permissively, never rejected).
//!
//! Use one [`Minifier`] per build so identifiers shared between shaders
//! receive the same short name in every file:
//!
//! ```
//! use glsl_minify::Minifier;
//!
//! let mut minifier = Minifier::default();
//! let vertex = minifier.minify("attribute vec2 _pos; // clip space\n");
//! let fragment = minifier.minify("varying vec2 _pos;\n");
//! assert_eq!(vertex.code, "attribute vec2 _a;\n");
//! assert_eq!(fragment.code, "varying vec2 _a;\n");
//! ```

mod compact;
mod minifier;
mod names;
mod rename;
mod scan;

pub mod options;

pub use minifier::{MinifiedShader, Minifier};
pub use options::MinifyOptions;
pub use rename::RenameWarning;

/// Minifies one GLSL source text with default options
///
/// Convenience wrapper over a fresh default [`Minifier`], for callers that
/// process a single shader and do not need cross-file rename stability.
/// Warnings are forwarded to `tracing` instead of being returned.
///
/// # Arguments
/// * `source` - A string slice containing the GLSL shader source code.
///
/// # Returns
/// The minified GLSL source code as a `String`.
pub fn minify_glsl(source: &str) -> String {
    let mut minifier = Minifier::default();
    let MinifiedShader { code, warnings } = minifier.minify(source);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_glsl_one_shot() {
        let out = minify_glsl("void main() {\n    gl_FragColor = vec4(_c, 1.0); // output\n}\n");
        assert_eq!(out, "void main(){\ngl_FragColor=vec4(_a,1.0);\n}\n");
    }

    #[test]
    fn test_one_shot_is_stateless() {
        // each call starts a fresh namespace: repeated calls agree
        let source = "uniform float _time;\n";
        assert_eq!(minify_glsl(source), minify_glsl(source));
    }
}
