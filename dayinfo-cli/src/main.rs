//! Binary crate for the `dayinfo` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive date/city prompts
//! - Printing the day-info section cards

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
