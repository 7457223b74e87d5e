//! GLSL minification tool
//!
//! This binary minifies one or more GLSL shader files and writes the
//! results to stdout. All files share a single engine instance, so an
//! identifier that appears in several files receives the same short name
//! in each of them. Warnings are reported on stderr and never stop the
//! run.

use glsl_minify::{Minifier, MinifyOptions};
use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut options = MinifyOptions::default();
    let mut inputs: &[String] = &args[1..];

    // Optional leading `--options <manifest.yaml>`
    if inputs.first().map(String::as_str) == Some("--options") {
        if inputs.len() < 2 {
            eprintln!("Error: --options requires a manifest path");
            process::exit(1);
        }
        match MinifyOptions::from_file(&inputs[1]) {
            Ok(parsed) => options = parsed,
            Err(e) => {
                eprintln!("Error loading options manifest '{}': {e}", inputs[1]);
                process::exit(1);
            }
        }
        inputs = &inputs[2..];
    }

    if inputs.is_empty() {
        eprintln!("Usage: {} [--options <manifest.yaml>] <shader.glsl>...", args[0]);
        eprintln!("Minifies the given shaders through one shared engine and writes the results to stdout");
        process::exit(1);
    }

    let mut minifier = Minifier::new(options);

    for input in inputs {
        if !Path::new(input).exists() {
            eprintln!("Error: Shader file '{input}' does not exist");
            process::exit(1);
        }

        let source = match fs::read_to_string(input) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error reading shader file '{input}': {e}");
                process::exit(1);
            }
        };

        let result = minifier.minify(&source);
        for warning in &result.warnings {
            eprintln!("Warning ({input}): {warning}");
        }
        print!("{}", result.code);
    }
}
