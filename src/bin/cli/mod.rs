//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: configuration loading and the generate command
//! - output: user-facing status lines

pub mod args;
pub mod commands;
pub mod output;

pub use args::*;
pub use commands::*;
