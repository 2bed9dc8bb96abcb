//! stubgen CLI: scaffold a Jest test file for the functions in a JavaScript module.

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let Some(input) = cli.input.clone() else {
        eprintln!("{}", cli::USAGE.red());
        std::process::exit(1);
    };

    // the runtime reports the error chain and sets the exit code
    cli::generate_command(&cli, &input)
        .await
        .context("❌ Error generating tests")?;

    Ok(())
}
