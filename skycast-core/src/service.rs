use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{FetchError, truncate_body};
use crate::model::{CityQuery, WeatherReading};
use crate::openweather;

/// Fetches current weather for a city and classifies every outcome.
///
/// Holds no state between calls apart from the in-flight flag: at most
/// one fetch per service instance may be outstanding at a time.
#[derive(Debug)]
pub struct WeatherService {
    http: Client,
    api_key: String,
    base_url: String,
    in_flight: AtomicBool,
}

impl WeatherService {
    /// Build a service from validated configuration.
    ///
    /// A missing credential fails here, before any fetch is possible.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            in_flight: AtomicBool::new(false),
        })
    }

    /// True while a fetch is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Fetch current weather for `city`.
    ///
    /// Performs exactly one round trip, no retry. A second call while one
    /// is outstanding is rejected with [`FetchError::Busy`]. The busy flag
    /// clears on every outcome, success or failure.
    pub async fn fetch(&self, city: &str) -> Result<WeatherReading, FetchError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(FetchError::Busy);
        }

        let result = self.fetch_inner(city).await;
        self.in_flight.store(false, Ordering::SeqCst);

        result
    }

    async fn fetch_inner(&self, city: &str) -> Result<WeatherReading, FetchError> {
        let city = CityQuery::new(city)?;
        let spec = openweather::current_weather_request(&self.base_url, &city, &self.api_key)?;

        debug!(%city, "requesting current weather");

        let res = self
            .http
            .get(&spec.url)
            .query(&spec.query)
            .send()
            .await
            .map_err(FetchError::from_transport)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::from_transport)?;

        if !status.is_success() {
            warn!(%status, "weather request failed");
            return Err(FetchError::Http {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        openweather::parse_current(&body)
    }
}
