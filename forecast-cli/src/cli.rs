use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use forecast_core::{Config, ForecastClient, ForecastDocument, ForecastQuery, average_temperature};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Yandex Weather forecast CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weather API key in the config file.
    Configure {
        /// API key; prompted for interactively when omitted.
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Fetch the forecast and print current and average temperatures.
    Fetch {
        /// Latitude in degrees, -90 to 90. Defaults to the configured value.
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude in degrees, -180 to 180. Defaults to the configured value.
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Number of forecast days to average, 1 to 7.
        #[arg(long)]
        days: Option<u8>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure { api_key } => configure(api_key),
            Command::Fetch { lat, lon, days } => fetch(lat, lon, days).await,
        }
    }
}

fn configure(api_key: Option<String>) -> Result<()> {
    let key = match api_key {
        Some(key) => key,
        None => inquire::Text::new("Weather API key:")
            .prompt()
            .context("Failed to read API key")?,
    };

    let mut config = Config::load()?;
    config.set_api_key(key);
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn fetch(lat: Option<f64>, lon: Option<f64>, days: Option<u8>) -> Result<()> {
    let config = Config::load()?;

    let query = ForecastQuery::build(
        lat.unwrap_or(config.defaults.lat),
        lon.unwrap_or(config.defaults.lon),
        days.unwrap_or(config.defaults.day_limit),
    )?;
    debug!(?query, "resolved forecast query");

    let client = ForecastClient::new(&config.base_url, config.api_key()?);
    let doc = client.fetch(&query).await?;

    print_report(&doc, query.day_limit())
}

fn print_report(doc: &ForecastDocument, day_limit: u8) -> Result<()> {
    println!("Full weather data:");
    println!("{}", doc.to_string_pretty());

    let current = doc
        .current_temp()
        .context("Weather response has no fact.temp field")?;
    println!("Current temperature: {current}°C");

    let dates = doc.forecast_dates(day_limit);
    if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
        println!(
            "Forecast period: {} to {}",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        );
    }

    let average = average_temperature(doc, day_limit);
    println!("Average temperature over {day_limit} day(s): {average:.1}°C");

    Ok(())
}
