use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::icon::IconCategory;

/// City name as typed by the user, trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    /// Trim and validate user input. Blank input never reaches the network.
    pub fn new(raw: impl Into<String>) -> Result<Self, FetchError> {
        let raw = raw.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(FetchError::Config("city name must not be blank".to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized result of one successful fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Location name as resolved by the provider, when it reports one.
    pub location: Option<String>,
    /// Full-precision Celsius value; rounding happens at display time.
    pub temperature_celsius: f64,
    /// Provider-defined classification of the current conditions.
    pub condition_code: i64,
    /// Human-readable description, first letter capitalized.
    pub description: String,
    /// Observation timestamp, when the provider reports one.
    pub observed_at: Option<DateTime<Utc>>,
}

impl WeatherReading {
    /// Temperature rounded to the nearest whole degree, e.g. "27°C".
    pub fn display_temperature(&self) -> String {
        format!("{:.0}°C", self.temperature_celsius)
    }

    pub fn icon(&self) -> IconCategory {
        IconCategory::from_code(self.condition_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temperature_celsius: f64, condition_code: i64) -> WeatherReading {
        WeatherReading {
            location: None,
            temperature_celsius,
            condition_code,
            description: "Light rain".to_string(),
            observed_at: None,
        }
    }

    #[test]
    fn city_query_trims_surrounding_whitespace() {
        let city = CityQuery::new("  London \n").expect("must accept non-blank input");
        assert_eq!(city.as_str(), "London");
    }

    #[test]
    fn blank_city_is_rejected() {
        for raw in ["", "   ", "\t\n"] {
            let err = CityQuery::new(raw).expect_err("blank input must be rejected");
            assert!(matches!(err, FetchError::Config(_)), "input {raw:?}");
        }
    }

    #[test]
    fn display_temperature_rounds_to_whole_degrees() {
        assert_eq!(reading(27.0, 800).display_temperature(), "27°C");
        assert_eq!(reading(7.0, 500).display_temperature(), "7°C");
        assert_eq!(reading(21.7, 800).display_temperature(), "22°C");
    }

    #[test]
    fn icon_is_derived_from_the_condition_code() {
        assert_eq!(reading(7.0, 500).icon(), IconCategory::Rain);
        assert_eq!(reading(7.0, 9999).icon(), IconCategory::Unknown);
    }
}
