//! Writes EQUATIONS.md from the equation registry.
//!
//! ```bash
//! cargo run --bin gen-equations [OUTPUT]
//! ```
//!
//! OUTPUT defaults to `uplift_core/src/equations/EQUATIONS.md`, relative to
//! the workspace root.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use uplift_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

const DEFAULT_OUTPUT: &str = "uplift_core/src/equations/EQUATIONS.md";

fn main() -> ExitCode {
    let output = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let markdown = generate_equations_markdown();
    if let Err(e) = fs::write(&output, &markdown) {
        eprintln!("Cannot write {}: {}", output.display(), e);
        return ExitCode::FAILURE;
    }

    println!("{} equations -> {}", ALL_EQUATIONS.len(), output.display());
    ExitCode::SUCCESS
}
