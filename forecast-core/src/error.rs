use reqwest::StatusCode;
use thiserror::Error;

/// Rejected query input. Raised before any network activity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("latitude {0} is out of range, expected -90..=90")]
    Latitude(f64),

    #[error("longitude {0} is out of range, expected -180..=180")]
    Longitude(f64),

    #[error("day limit {0} is out of range, expected 1..=7")]
    DayLimit(u8),
}

/// Failure while fetching or decoding the forecast.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-success status. Carries the raw body;
    /// the rendered message truncates it.
    #[error("weather API returned status {status}: {}", truncate_body(.body))]
    Status { status: StatusCode, body: String },

    /// The response body was not valid JSON.
    #[error("failed to decode weather API response as JSON")]
    Decode(#[source] serde_json::Error),

    /// The request never produced a response (DNS, TLS, connect, ...).
    #[error("failed to reach weather API")]
    Transport(#[from] reqwest::Error),
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let cut: String = body.chars().take(MAX).collect();
        format!("{cut}...")
    } else {
        body.to_string()
    }
}
