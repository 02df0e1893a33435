//! Axie Helper - Entry Point
//!
//! Loads configuration, installs logging, wires the services and runs one
//! subcommand. `axh serve` keeps the price board refreshed until Ctrl-C.

// Force-link axh-providers so linkme cache registrations are included
extern crate axh_providers;

use anyhow::Context;
use axh::cli::{Cli, run};
use axh::infrastructure::{ConfigLoader, init_app, init_logging};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;

    init_logging(config.logging.clone()).context("Failed to initialize logging")?;

    let context = init_app(config).context("Failed to initialize services")?;
    run(&context, cli.command).await
}
