use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use mausam_core::{Config, Outcome, WeatherProvider, WeatherQuery, provider_from_config};
use tracing::{debug, warn};

use crate::view;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "mausam", version, about = "Mausam - your daily forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name; prompted for when omitted.
        city: Option<String>,

        /// Print the record as JSON instead of the card.
        #[arg(long)]
        json: bool,

        /// Directory holding the ambient sound files.
        #[arg(long)]
        assets: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json, assets } => show(city, json, assets).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: Option<String>, json: bool, assets: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load()?.with_env_overrides(|name| std::env::var(name).ok());

    let city = match city {
        Some(city) => city,
        None => Text::new("Enter city name")
            .with_placeholder("e.g., Lahore, New York, London")
            .prompt()
            .context("Failed to read city name")?,
    };

    let query = WeatherQuery::new(city);
    if query.is_blank() {
        debug!("blank city, nothing to fetch");
        return Ok(());
    }

    let provider = provider_from_config(&config)?;
    let outcome = provider.fetch(query.city.trim()).await;

    if let Outcome::Unavailable(kind) = &outcome {
        warn!(city = %query.city, %kind, "no weather data");
    }

    let assets_dir = assets.unwrap_or_else(|| config.assets_dir());
    let rendered =
        if json { view::render_json(&outcome)? } else { view::render(&outcome, &assets_dir) };

    print!("{rendered}");
    Ok(())
}
