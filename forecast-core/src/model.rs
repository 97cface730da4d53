use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded weather API response, kept as the raw JSON tree.
///
/// The API reports current conditions under `fact` and per-day forecasts
/// under `forecasts[i].parts.day`. Fields beyond the ones read here vary by
/// tariff, so the document stays untyped and is probed with accessors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastDocument(Value);

impl ForecastDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Current observed temperature, from `fact.temp`.
    pub fn current_temp(&self) -> Option<i64> {
        self.0.get("fact")?.get("temp")?.as_i64()
    }

    /// The `forecasts` array, or an empty slice when the response has none.
    pub fn forecast_days(&self) -> &[Value] {
        self.0
            .get("forecasts")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    /// Dates covered by the first `limit` forecast entries, in response
    /// order. Entries without a parseable `date` are omitted.
    pub fn forecast_dates(&self, limit: u8) -> Vec<NaiveDate> {
        self.forecast_days()
            .iter()
            .take(usize::from(limit))
            .filter_map(|day| day.get("date")?.as_str())
            .filter_map(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
            .collect()
    }

    /// Pretty-printed JSON for the raw document dump.
    pub fn to_string_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}
