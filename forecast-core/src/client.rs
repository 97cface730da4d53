use reqwest::Client;
use tracing::debug;

use crate::{error::FetchError, model::ForecastDocument, query::ForecastQuery};

/// Request header carrying the API credential.
pub const API_KEY_HEADER: &str = "X-Yandex-Weather-Key";

/// Thin client for the Yandex Weather forecast endpoint.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl ForecastClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    /// Issue a single GET request for the query and decode the JSON body.
    ///
    /// A non-success status yields [`FetchError::Status`] with the raw body
    /// attached; the caller decides whether to abort. A body that is not
    /// valid JSON yields [`FetchError::Decode`], distinct from the
    /// HTTP-level failure.
    pub async fn fetch(&self, query: &ForecastQuery) -> Result<ForecastDocument, FetchError> {
        let url = query.url(&self.base_url);
        debug!(%url, "requesting forecast");

        let res = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body });
        }

        let value = serde_json::from_str(&body).map_err(FetchError::Decode)?;
        Ok(ForecastDocument::new(value))
    }
}
