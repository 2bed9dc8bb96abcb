//! CLI Argument Structures

use clap::Parser;
use std::path::PathBuf;

/// Printed to stderr when no input file is given
pub const USAGE: &str = "❌ Usage: stubgen myfile.js";

/// Generate placeholder Jest tests for the functions in a JavaScript file
#[derive(Parser, Debug)]
#[command(name = "stubgen")]
#[command(version = stubgen::VERSION)]
#[command(about = "🧪 stubgen - scaffold Jest tests for a JavaScript module")]
#[command(long_about = "
Scan a JavaScript file for function declarations, function-valued variables and
`exports.name = ...` assignments, then write one placeholder test per function
next to it (math.js -> math.test.js).

Common Usage:

  # Generate src/math.test.js
  stubgen src/math.js

  # Show what would be generated without writing anything
  stubgen --dry-run src/math.js

  # Only treat function values assigned to exports as functions
  stubgen --strict-exports src/math.js
")]
pub struct Cli {
    /// JavaScript source file to generate tests for
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file (YAML, or JSON with a .json extension)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Require `exports.name = ...` to assign a function value
    #[arg(long)]
    pub strict_exports: bool,

    /// Infix for the generated file name: math.<SUFFIX>.js
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Print the generated tests instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}
