use crate::error::ValidationError;

/// Validated forecast request parameters.
///
/// Fields are private so a value can only exist after range checks pass;
/// anything out of range is rejected before a request is ever built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastQuery {
    lat: f64,
    lon: f64,
    day_limit: u8,
}

impl ForecastQuery {
    /// Validate the inputs and build a query.
    pub fn build(lat: f64, lon: f64, day_limit: u8) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::Latitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ValidationError::Longitude(lon));
        }
        if !(1..=7).contains(&day_limit) {
            return Err(ValidationError::DayLimit(day_limit));
        }

        Ok(Self { lat, lon, day_limit })
    }

    pub fn latitude(&self) -> f64 {
        self.lat
    }

    pub fn longitude(&self) -> f64 {
        self.lon
    }

    pub fn day_limit(&self) -> u8 {
        self.day_limit
    }

    /// Query string with coordinates fixed to two decimal places.
    ///
    /// `{:.2}` always uses `.` as the decimal separator, so the output does
    /// not depend on the process locale.
    pub fn query_string(&self) -> String {
        format!(
            "lat={:.2}&lon={:.2}&limit={}",
            self.lat, self.lon, self.day_limit
        )
    }

    /// Full request URL for the given endpoint.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}?{}", base_url.trim_end_matches('/'), self.query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_for_in_range_input() {
        let query = ForecastQuery::build(55.76, 37.62, 3).expect("valid input must build");

        assert_eq!(query.latitude(), 55.76);
        assert_eq!(query.longitude(), 37.62);
        assert_eq!(query.day_limit(), 3);
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(ForecastQuery::build(-90.0, -180.0, 1).is_ok());
        assert!(ForecastQuery::build(90.0, 180.0, 7).is_ok());
    }

    #[test]
    fn rejects_latitude_out_of_range() {
        assert_eq!(
            ForecastQuery::build(90.01, 0.0, 3).unwrap_err(),
            ValidationError::Latitude(90.01)
        );
        assert_eq!(
            ForecastQuery::build(-91.0, 0.0, 3).unwrap_err(),
            ValidationError::Latitude(-91.0)
        );
    }

    #[test]
    fn rejects_longitude_out_of_range() {
        assert_eq!(
            ForecastQuery::build(0.0, 180.5, 3).unwrap_err(),
            ValidationError::Longitude(180.5)
        );
        assert_eq!(
            ForecastQuery::build(0.0, -181.0, 3).unwrap_err(),
            ValidationError::Longitude(-181.0)
        );
    }

    #[test]
    fn rejects_day_limit_out_of_range() {
        assert_eq!(
            ForecastQuery::build(0.0, 0.0, 0).unwrap_err(),
            ValidationError::DayLimit(0)
        );
        assert_eq!(
            ForecastQuery::build(0.0, 0.0, 8).unwrap_err(),
            ValidationError::DayLimit(8)
        );
    }

    #[test]
    fn rejects_nan_coordinates() {
        assert!(ForecastQuery::build(f64::NAN, 0.0, 3).is_err());
        assert!(ForecastQuery::build(0.0, f64::NAN, 3).is_err());
    }

    #[test]
    fn query_string_uses_two_decimal_places() {
        let query = ForecastQuery::build(55.76, 37.62, 3).unwrap();
        assert_eq!(query.query_string(), "lat=55.76&lon=37.62&limit=3");

        let query = ForecastQuery::build(55.0, 37.5, 7).unwrap();
        assert_eq!(query.query_string(), "lat=55.00&lon=37.50&limit=7");
    }

    #[test]
    fn formatted_coordinates_roundtrip() {
        let query = ForecastQuery::build(55.76, 37.62, 3).unwrap();
        let rendered = query.query_string();

        let mut lat = None;
        let mut lon = None;
        for pair in rendered.split('&') {
            let (name, value) = pair.split_once('=').expect("pair must contain '='");
            match name {
                "lat" => lat = Some(value.parse::<f64>().unwrap()),
                "lon" => lon = Some(value.parse::<f64>().unwrap()),
                _ => {}
            }
        }

        assert_eq!(lat, Some(55.76));
        assert_eq!(lon, Some(37.62));
    }

    #[test]
    fn url_joins_base_and_query() {
        let query = ForecastQuery::build(55.76, 37.62, 3).unwrap();

        assert_eq!(
            query.url("https://api.weather.yandex.ru/v2/forecast"),
            "https://api.weather.yandex.ru/v2/forecast?lat=55.76&lon=37.62&limit=3"
        );
        // A trailing slash on the endpoint must not produce "//?".
        assert_eq!(
            query.url("http://localhost:8080/"),
            "http://localhost:8080?lat=55.76&lon=37.62&limit=3"
        );
    }
}
