//! Command Execution Logic
//!
//! Loads configuration, applies CLI overrides and runs the engine.

use crate::cli::args::Cli;
use crate::cli::output::print_outcome;
use std::path::Path;
use stubgen::{StubgenConfig, StubgenEngine};
use tracing::debug;

/// Generate (or preview) the test file for `input`
pub async fn generate_command(args: &Cli, input: &Path) -> anyhow::Result<()> {
    let config = load_configuration(args)?;
    let engine = StubgenEngine::new(config)?;

    let outcome = if args.dry_run {
        engine.preview_tests(input).await?
    } else {
        engine.generate_tests(input).await?
    };

    print_outcome(&outcome);
    Ok(())
}

/// Load the config file if one was given, then apply flag overrides
pub fn load_configuration(args: &Cli) -> anyhow::Result<StubgenConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            StubgenConfig::from_file(path)?
        }
        None => StubgenConfig::default(),
    };

    if args.strict_exports {
        config.discovery.strict_exports = true;
    }
    if let Some(suffix) = &args.suffix {
        config.output.test_suffix = suffix.clone();
    }

    config.validate()?;
    Ok(config)
}
