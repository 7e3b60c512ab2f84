use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::openweather::DEFAULT_BASE_URL;

/// Environment variable consulted before the stored config file.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeatherMap API key.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the weather API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Budget for one request round trip, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load config from disk and the environment.
    ///
    /// Reads a `.env` file when present, then lets `WEATHER_API_KEY`
    /// override the stored key.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut cfg = Self::load_file()?;

        if let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.is_empty()
        {
            cfg.api_key = key;
        }

        Ok(cfg)
    }

    fn load_file() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Fail before any fetch when no credential is available.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(anyhow!(
                "No API key configured.\n\
                 Hint: run `skycast configure`, or set the {API_KEY_ENV} environment variable."
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_openweather_with_a_bounded_timeout() {
        let cfg = Config::default();

        assert_eq!(cfg.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(cfg.timeout_secs, 10);
        assert!(cfg.api_key.is_empty());
    }

    #[test]
    fn validate_errors_when_api_key_is_missing() {
        let cfg = Config::default();
        let err = cfg.validate().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("Hint: run `skycast configure`"));
    }

    #[test]
    fn validate_rejects_whitespace_only_keys() {
        let cfg = Config { api_key: "   ".to_string(), ..Config::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_a_present_key() {
        let cfg = Config { api_key: "KEY".to_string(), ..Config::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_config_files_fall_back_to_defaults() {
        let cfg: Config = toml::from_str(r#"api_key = "KEY""#).expect("partial TOML must parse");

        assert_eq!(cfg.api_key, "KEY");
        assert_eq!(cfg.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(cfg.timeout_secs, 10);
    }
}
