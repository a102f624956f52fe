//! Build script to generate the embedded sample vocabulary
//!
//! Reads `word count` lines and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_vocabulary(
        "data/sample_vocabulary.txt",
        &Path::new(&out_dir).join("sample.rs"),
        "SAMPLE",
        "Sample three-letter vocabulary with occurrence counts",
    );

    println!("cargo:rerun-if-changed=data/sample_vocabulary.txt");
}

fn generate_vocabulary(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, u64)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut parts = line.split_whitespace();
            let word = parts.next().unwrap();
            let count = parts
                .next()
                .map_or(1, |c| c.parse().unwrap_or_else(|e| panic!("Bad count in '{line}': {e}")));
            (word, count)
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated vocabulary").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, u64)] = &[").unwrap();

    for (word, occurrences) in entries {
        writeln!(output, "    (\"{word}\", {occurrences}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
