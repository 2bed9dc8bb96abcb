//! # stubgen: placeholder Jest tests for JavaScript modules
//!
//! stubgen parses a JavaScript file with tree-sitter, finds the functions it
//! defines or exports, and writes a sibling `*.test.js` file containing one
//! `describe`/`it` block per function. The generated assertions are left empty
//! on purpose: the output is scaffolding to be filled in by hand.
//!
//! Three constructs count as functions:
//!
//! - `function name() {}` declarations (including `export function` and `function*`)
//! - `const`/`let`/`var` bindings whose initializer is an arrow function or
//!   function expression
//! - `exports.name = ...` and `module.exports.name = ...` assignments
//!
//! ## Architecture
//!
//! ```text
//! source ─▶ FileReader ─▶ JavaScriptAdapter ─▶ walk_tree ─▶ BindingCollector
//!                                                                  │
//!                      write_suite ◀─ TestSuite ◀─ TestBlockRenderer
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use stubgen::{GenerationOutcome, StubgenConfig, StubgenEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = StubgenEngine::new(StubgenConfig::default())?;
//!     match engine.generate_tests(Path::new("src/math.js")).await? {
//!         GenerationOutcome::Written { output_path, .. } => {
//!             println!("wrote {}", output_path.display())
//!         }
//!         _ => println!("nothing to do"),
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Configuration, errors and file handling
pub mod core {
    //! Configuration, error types and file utilities.

    pub mod config;
    pub mod errors;
    pub mod file_utils;
}

// Tree-sitter integration
pub mod lang {
    //! JavaScript parsing and syntax tree traversal.

    pub mod javascript;
    pub mod registry;
    pub mod visitor;
}

// Binding collection, rendering and output
pub mod generator {
    //! Turning discovered bindings into a written test file.

    pub mod collector;
    pub mod renderer;
    pub mod writer;
}

// Public API and engine interface
pub mod api {
    //! High-level engine interface.

    pub mod engine;
}

pub use crate::api::engine::{GenerationOutcome, StubgenEngine};
pub use crate::core::config::StubgenConfig;
pub use crate::core::errors::{Result, StubgenError};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
