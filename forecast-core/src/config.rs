use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Forecast endpoint used when neither the config file nor the environment
/// overrides it.
pub const DEFAULT_BASE_URL: &str = "https://api.weather.yandex.ru/v2/forecast";

/// Query parameters used when the CLI passes none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDefaults {
    pub lat: f64,
    pub lon: f64,
    pub day_limit: u8,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        // Moscow, three days.
        Self {
            lat: 55.76,
            lon: 37.62,
            day_limit: 3,
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// base_url = "https://api.weather.yandex.ru/v2/forecast"
/// api_key = "..."
///
/// [defaults]
/// lat = 55.76
/// lon = 37.62
/// day_limit = 3
/// ```
///
/// Environment variables override the file: `FORECAST_BASE_URL`,
/// `FORECAST_API_KEY`, `FORECAST_LAT`, `FORECAST_LON`, `FORECAST_DAY_LIMIT`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
    pub defaults: QueryDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            defaults: QueryDefaults::default(),
        }
    }
}

impl Config {
    /// Load config from disk (or defaults if no file exists yet), then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;

        let mut cfg = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;

            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            // First run: no config file.
            Self::default()
        };

        cfg.apply_env_overrides(|name| env::var(name).ok())?;
        Ok(cfg)
    }

    /// Apply environment overrides via a lookup function.
    ///
    /// Taking the lookup as a parameter keeps this testable without touching
    /// process-global environment state.
    pub fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = var("FORECAST_BASE_URL") {
            self.base_url = url;
        }
        if let Some(key) = var("FORECAST_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(lat) = var("FORECAST_LAT") {
            self.defaults.lat = lat
                .parse()
                .with_context(|| format!("FORECAST_LAT is not a number: {lat}"))?;
        }
        if let Some(lon) = var("FORECAST_LON") {
            self.defaults.lon = lon
                .parse()
                .with_context(|| format!("FORECAST_LON is not a number: {lon}"))?;
        }
        if let Some(limit) = var("FORECAST_DAY_LIMIT") {
            self.defaults.day_limit = limit
                .parse()
                .with_context(|| format!("FORECAST_DAY_LIMIT is not a day count: {limit}"))?;
        }

        Ok(())
    }

    /// Returns the configured API key, or an error explaining how to set one.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `forecast configure` or set FORECAST_API_KEY."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
