//! Build script to generate the embedded seed puzzle
//!
//! Reads the puzzle definition file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_seed_puzzle(
        "data/seed.puzzle",
        &Path::new(&out_dir).join("seed.rs"),
        "SEED_CLUES",
        "Clues of the built-in puzzle as (number, direction, row, col, answer, text)",
    );

    // Rebuild if the puzzle changes
    println!("cargo:rerun-if-changed=data/seed.puzzle");
}

fn generate_seed_puzzle(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<Vec<&str>> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.splitn(6, '|').map(str::trim).collect())
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated seed puzzle").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(
        output,
        "pub const {const_name}: &[(u32, char, usize, usize, &str, &str)] = &["
    )
    .unwrap();

    for fields in &entries {
        let [number, direction, row, col, answer, text] = fields.as_slice() else {
            panic!("Malformed line in {input_path}: {}", fields.join("|"));
        };
        let direction = direction
            .chars()
            .next()
            .unwrap_or_else(|| panic!("Missing direction for clue {number}"));
        writeln!(
            output,
            "    ({number}, {direction:?}, {row}, {col}, {answer:?}, {text:?}),"
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of clues in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", entries.len()).unwrap();
}
