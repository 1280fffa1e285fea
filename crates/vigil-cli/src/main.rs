// SPDX-License-Identifier: Apache-2.0

//! Vigil - keeps curated GitHub repository lists fresh.
//!
//! A CLI tool that searches GitHub for repositories matching a curated
//! query list and rewrites the bounded list section of a markdown document
//! with deduplicated, star-sorted entries.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;
mod table;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use vigil_core::load_config;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.output, cli.quiet);

    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);

    let config = load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    match commands::run(cli.command, output_ctx, &config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            Err(e)
        }
    }
}
