//! Binary crate for the `metar` command-line bot.
//!
//! This crate focuses on:
//! - Parsing commands (`weather`, `help`, `man`, `configure`)
//! - Interactive configuration
//! - Delivering rendered embeds to the terminal

use clap::Parser;

mod cli;
mod manual;
mod transport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
