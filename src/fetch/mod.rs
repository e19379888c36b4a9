//! Live data collaborators: realtime arrivals, district air quality, weather.
//!
//! Every call returns a [`FetchResult`] so that the reason for a missing
//! value survives until it is logged. The diagnosis treats any error as
//! "no data".

pub mod seoul;
pub mod weather;

pub use seoul::SeoulOpenApi;
pub use weather::FixedWeather;

use crate::error::{FetchError, FetchResult};
use crate::models::{AirQualityRecord, ArrivalInfo, WeatherSample};

/// Source of the live inputs of a diagnosis
#[allow(async_fn_in_trait)]
pub trait LiveDataSource {
    /// Realtime arrivals at a station
    async fn arrivals(&self, station: &str) -> FetchResult<Vec<ArrivalInfo>>;

    /// First air-quality record whose district name contains `district`
    async fn air_quality(&self, district: &str) -> FetchResult<Option<AirQualityRecord>>;

    /// Temperature and humidity near a station
    async fn weather(&self, station: &str) -> FetchResult<WeatherSample>;
}

/// Seoul open-data services for arrivals and air quality, fixed weather
pub struct SeoulLiveData {
    api: SeoulOpenApi,
    weather: FixedWeather,
}

impl SeoulLiveData {
    pub fn new(api: SeoulOpenApi, weather: FixedWeather) -> Self {
        Self { api, weather }
    }
}

impl LiveDataSource for SeoulLiveData {
    async fn arrivals(&self, station: &str) -> FetchResult<Vec<ArrivalInfo>> {
        self.api.realtime_arrivals(station).await
    }

    async fn air_quality(&self, district: &str) -> FetchResult<Option<AirQualityRecord>> {
        self.api.district_air_quality(district).await
    }

    async fn weather(&self, _station: &str) -> FetchResult<WeatherSample> {
        Ok(self.weather.sample())
    }
}

/// No network access; only the fixed weather sample is available
pub struct OfflineSource {
    weather: FixedWeather,
}

impl OfflineSource {
    pub fn new(weather: FixedWeather) -> Self {
        Self { weather }
    }
}

impl LiveDataSource for OfflineSource {
    async fn arrivals(&self, _station: &str) -> FetchResult<Vec<ArrivalInfo>> {
        Err(FetchError::Offline)
    }

    async fn air_quality(&self, _district: &str) -> FetchResult<Option<AirQualityRecord>> {
        Err(FetchError::Offline)
    }

    async fn weather(&self, _station: &str) -> FetchResult<WeatherSample> {
        Ok(self.weather.sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_source() {
        let source = OfflineSource::new(FixedWeather::new(Some(21.0), Some(40.0)));

        assert!(matches!(source.arrivals("강남").await, Err(FetchError::Offline)));
        assert!(matches!(source.air_quality("강남구").await, Err(FetchError::Offline)));
        assert_eq!(
            source.weather("강남").await.unwrap(),
            WeatherSample::new(21.0, 40.0)
        );
    }
}
