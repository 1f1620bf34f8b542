//! CLI entry point for the Partridge puzzle enumeration

use clap::Parser;
use partridge::io::cli::{Cli, Runner};
use tracing_subscriber::EnvFilter;

fn main() -> partridge::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Runner::new(cli).process().map(|_| ())
}
