//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Forecast query building and validation
//! - The Yandex Weather HTTP client
//! - Temperature aggregation over the forecast document
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod aggregate;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod query;

pub use aggregate::average_temperature;
pub use client::{API_KEY_HEADER, ForecastClient};
pub use config::{Config, DEFAULT_BASE_URL, QueryDefaults};
pub use error::{FetchError, ValidationError};
pub use model::ForecastDocument;
pub use query::ForecastQuery;
