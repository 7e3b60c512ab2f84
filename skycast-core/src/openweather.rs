use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::FetchError;
use crate::model::{CityQuery, WeatherReading};

/// OpenWeatherMap API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Application-level success sentinel embedded in the payload, distinct
/// from the HTTP status line.
const COD_OK: i64 = 200;

/// A fully-built outbound request: endpoint plus query pairs.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub url: String,
    pub query: Vec<(&'static str, String)>,
}

/// Build the current-weather request for a city.
pub fn current_weather_request(
    base_url: &str,
    city: &CityQuery,
    api_key: &str,
) -> Result<RequestSpec, FetchError> {
    if api_key.is_empty() {
        return Err(FetchError::Config("no API key configured".to_string()));
    }

    Ok(RequestSpec {
        url: format!("{}/weather", base_url.trim_end_matches('/')),
        query: vec![
            ("q", city.as_str().to_string()),
            ("appid", api_key.to_string()),
        ],
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    cod: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    dt: Option<i64>,
}

/// Parse a nominally successful current-weather payload.
///
/// Any missing or mistyped required field is a `MalformedResponse`, as is
/// an embedded application status other than 200. Temperatures arrive in
/// Kelvin and are stored in Celsius at full precision.
pub fn parse_current(body: &str) -> Result<WeatherReading, FetchError> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    if parsed.cod != COD_OK {
        return Err(FetchError::MalformedResponse(format!(
            "application status {} inside a successful response",
            parsed.cod
        )));
    }

    let current = parsed
        .weather
        .first()
        .ok_or_else(|| FetchError::MalformedResponse("weather array is empty".to_string()))?;

    Ok(WeatherReading {
        location: parsed.name.filter(|name| !name.is_empty()),
        temperature_celsius: kelvin_to_celsius(parsed.main.temp),
        condition_code: current.id,
        description: capitalize_first(&current.description),
        observed_at: parsed.dt.and_then(unix_to_utc),
    })
}

fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

/// Uppercase the first character, leave the rest verbatim.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}
