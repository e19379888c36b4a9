//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then environment variables, then command-line flags (applied by the
//! binary through the `with_*` builders).
//!
//! ```toml
//! data_path = "data/congestion_data.csv"
//! golden_horizon_hours = 3
//!
//! [seoul]
//! subway_key = "..."
//! general_key = "..."
//!
//! [weather]
//! temperature = -5.2
//! humidity = 35.0
//! ```

use crate::constants::{
    DEFAULT_GOLDEN_HORIZON_HOURS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TABLE_PATH,
    DEFAULT_WEATHER_HUMIDITY, DEFAULT_WEATHER_TEMPERATURE,
};
use crate::error::{AirSubwayError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable overriding the subway arrival API key
pub const ENV_SUBWAY_KEY: &str = "AIR_SUBWAY_SUBWAY_KEY";
/// Environment variable overriding the general open-data API key
pub const ENV_GENERAL_KEY: &str = "AIR_SUBWAY_GENERAL_KEY";
/// Environment variable overriding the congestion table path
pub const ENV_DATA_PATH: &str = "AIR_SUBWAY_DATA";

/// Seoul open-data credentials
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoulConfig {
    /// Key for swopenapi.seoul.go.kr (realtime arrivals)
    pub subway_key: Option<String>,
    /// Key for openapi.seoul.go.kr (realtime air quality)
    pub general_key: Option<String>,
}

/// Fixed weather sample
///
/// Without a `[weather]` table the winter default applies; inside the table
/// an omitted field is reported as unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherConfig {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            temperature: Some(DEFAULT_WEATHER_TEMPERATURE),
            humidity: Some(DEFAULT_WEATHER_HUMIDITY),
        }
    }
}

/// Global configuration for the diagnosis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Congestion statistics CSV
    pub data_path: PathBuf,

    /// Look-ahead for the golden window, in hours
    pub golden_horizon_hours: u32,

    /// HTTP timeout for the live data fetchers
    pub request_timeout_secs: u64,

    pub seoul: SeoulConfig,

    pub weather: WeatherConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_TABLE_PATH),
            golden_horizon_hours: DEFAULT_GOLDEN_HORIZON_HOURS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            seoul: SeoulConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default config file location (`<config_dir>/air-subway/config.toml`)
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("air-subway").join("config.toml"))
    }

    /// Load configuration from file and environment
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present and built-in defaults otherwise.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path().filter(|path| path.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        let config = config.with_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AirSubwayError::Configuration {
                message: format!("Config file not found: {}", path.display()),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents).map_err(|source| AirSubwayError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from an environment lookup
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(ENV_SUBWAY_KEY).filter(|v| !v.is_empty()) {
            self.seoul.subway_key = Some(key);
        }
        if let Some(key) = lookup(ENV_GENERAL_KEY).filter(|v| !v.is_empty()) {
            self.seoul.general_key = Some(key);
        }
        if let Some(path) = lookup(ENV_DATA_PATH).filter(|v| !v.is_empty()) {
            self.data_path = PathBuf::from(path);
        }
        self
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(AirSubwayError::Configuration {
                message: "request_timeout_secs must be greater than 0".to_string(),
            });
        }
        if self.golden_horizon_hours > 24 {
            return Err(AirSubwayError::Configuration {
                message: format!(
                    "golden_horizon_hours must be at most 24, got {}",
                    self.golden_horizon_hours
                ),
            });
        }
        Ok(())
    }

    /// Use a different congestion table
    pub fn with_data_path(mut self, data_path: PathBuf) -> Self {
        self.data_path = data_path;
        self
    }

    /// Set the golden-window look-ahead
    pub fn with_golden_horizon(mut self, hours: u32) -> Self {
        self.golden_horizon_hours = hours;
        self
    }

    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
