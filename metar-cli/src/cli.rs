use anyhow::Context;
use clap::{Parser, Subcommand};
use metar_core::{Config, Embed, Icao, WeatherError, fetch_report};

use crate::{manual, transport::Transport};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "metar",
    version,
    about = "Decoded METAR reports for airports",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show weather at desired airport.
    Weather {
        /// 4 symbols of ICAO airport code.
        icao: Icao,
    },

    /// Show help message.
    Help,

    /// Show command usage guide.
    Man {
        /// Guide for this command will be shown.
        command: String,
    },

    /// Store the CheckWX API key.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let mut transport = Transport::stdout(config.send_delay());

        let embed = match self.command {
            Command::Weather { icao } => weather_embed(&config, &icao).await?,
            Command::Help => manual::help_embed(),
            Command::Man { command } => manual::man_embed(&command),
            Command::Configure => configure(config)?,
        };

        transport.send(&embed).await
    }
}

async fn weather_embed(config: &Config, icao: &Icao) -> anyhow::Result<Embed> {
    let provider = config.provider()?;

    Ok(match fetch_report(&provider, icao).await {
        Ok(report) => Embed::from(&report),
        Err(err) => error_embed(&err),
    })
}

fn error_embed(err: &WeatherError) -> Embed {
    let action = err.action();
    tracing::error!(action, error = %err, "Weather request failed");

    match err {
        WeatherError::Render(_) => Embed::error(action, "report could not be rendered"),
        _ => Embed::error(action, err),
    }
}

fn configure(mut config: Config) -> anyhow::Result<Embed> {
    let api_key = inquire::Password::new("CheckWX API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    let path = Config::config_file_path()?;
    Ok(Embed::success(format!("API key saved to {}", path.display())))
}
