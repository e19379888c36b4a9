//! Fixed weather source.
//!
//! No weather API is wired up yet, so the sample comes from configuration
//! (defaulting to a typical winter morning).

use crate::config::WeatherConfig;
use crate::models::WeatherSample;

#[derive(Debug, Clone, Copy)]
pub struct FixedWeather {
    sample: WeatherSample,
}

impl FixedWeather {
    pub fn new(temperature: Option<f64>, humidity: Option<f64>) -> Self {
        Self {
            sample: WeatherSample {
                temperature,
                humidity,
            },
        }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(config.temperature, config.humidity)
    }

    pub fn sample(&self) -> WeatherSample {
        self.sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_sample() {
        let weather = FixedWeather::from_config(&WeatherConfig::default());
        assert_eq!(weather.sample(), WeatherSample::new(-5.2, 35.0));
    }

    #[test]
    fn test_partial_sample() {
        let weather = FixedWeather::new(Some(12.0), None);
        assert_eq!(weather.sample().humidity, None);
    }
}
