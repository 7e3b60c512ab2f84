//! Core library for the `skycast` weather client.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Building and parsing OpenWeatherMap current-weather requests
//! - Classification of HTTP outcomes into user-facing error states
//! - Classification of condition codes into display categories
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries
//! or services.

pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod openweather;
pub mod service;

pub use config::Config;
pub use error::{ErrorState, FetchError, TransportFailure};
pub use icon::IconCategory;
pub use model::{CityQuery, WeatherReading};
pub use service::WeatherService;
