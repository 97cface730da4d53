use serde_json::Value;
use tracing::warn;

use crate::model::ForecastDocument;

/// Mean of `parts.day.temp_avg` over the first `limit` forecast days.
///
/// The limit is clamped to the number of days the response actually carries.
/// Days missing the temperature path are skipped with a warning and do not
/// contribute to the sample; an empty sample yields `0.0`.
pub fn average_temperature(doc: &ForecastDocument, limit: u8) -> f64 {
    let days = doc.forecast_days();
    let take = usize::from(limit).min(days.len());

    let mut total = 0.0;
    let mut count = 0u32;

    for (index, day) in days.iter().take(take).enumerate() {
        let Some(day_part) = day.get("parts").and_then(|parts| parts.get("day")) else {
            warn!(index, "forecast entry has no parts.day object, skipping");
            continue;
        };

        match day_part.get("temp_avg").and_then(Value::as_f64) {
            Some(temp) => {
                total += temp;
                count += 1;
            }
            None => warn!(index, "forecast entry has no temp_avg, skipping"),
        }
    }

    if count > 0 {
        total / f64::from(count)
    } else {
        0.0
    }
}
