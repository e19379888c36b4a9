//! Diagnosis pipeline.
//!
//! Runs the derivation for one station query: table lookups, district
//! mapping, live data, discomfort index, tier classification and the daily
//! briefing. Collaborator failures are logged and degraded to "no data";
//! a diagnosis always produces a report.

use crate::constants::DEFAULT_GOLDEN_HORIZON_HOURS;
use crate::discomfort;
use crate::error::FetchResult;
use crate::fetch::LiveDataSource;
use crate::models::WeatherSample;
use crate::report::{self, CongestionDiagnosis, DailyBriefing, HealthReport};
use crate::station::{lookup_district, normalize_station_name};
use crate::table::CongestionTable;
use chrono::{NaiveDateTime, Timelike};
use tracing::{debug, info, warn};

pub struct Diagnoser<'a, S> {
    table: &'a CongestionTable,
    source: S,
    horizon_hours: u32,
}

impl<'a, S: LiveDataSource> Diagnoser<'a, S> {
    pub fn new(table: &'a CongestionTable, source: S) -> Self {
        Self {
            table,
            source,
            horizon_hours: DEFAULT_GOLDEN_HORIZON_HOURS,
        }
    }

    pub fn with_horizon(mut self, horizon_hours: u32) -> Self {
        self.horizon_hours = horizon_hours;
        self
    }

    /// Build the health report for `station` as of `now`
    pub async fn diagnose(&self, station: &str, now: NaiveDateTime) -> HealthReport {
        let normalized = normalize_station_name(station);
        info!("Diagnosing '{}' at {}", normalized, now.format("%Y-%m-%d %H:%M"));

        let reading = self.table.current_congestion(station, &now);
        debug!("Congestion reading: {:?}", reading);
        let congestion = CongestionDiagnosis::from_reading(reading);

        let series = self.table.daily_series(station, &now);
        let briefing = DailyBriefing::from_series(series, now.hour(), self.horizon_hours);

        let district = lookup_district(station);
        let air_quality = degrade(
            "air quality",
            self.source.air_quality(&district).await,
        )
        .flatten();
        let air = report::air::assess(air_quality.as_ref());

        let arrivals = degrade("arrivals", self.source.arrivals(station).await).unwrap_or_default();

        let weather = degrade("weather", self.source.weather(station).await)
            .unwrap_or_else(WeatherSample::absent);
        let discomfort = discomfort::compute(weather.temperature, weather.humidity);

        HealthReport {
            station: normalized.to_string(),
            district,
            evaluated_at: now,
            congestion,
            weather,
            discomfort,
            air_quality,
            air,
            arrivals,
            briefing,
        }
    }
}

fn degrade<T>(what: &str, result: FetchResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("No {} data: {}", what, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::models::{AirQualityRecord, ArrivalInfo, DayType, TimeSlot};
    use crate::report::CongestionTier;
    use crate::table::CongestionRow;
    use chrono::NaiveDate;

    struct StubSource {
        fail: bool,
    }

    impl LiveDataSource for StubSource {
        async fn arrivals(&self, station: &str) -> FetchResult<Vec<ArrivalInfo>> {
            if self.fail {
                return Err(FetchError::Offline);
            }
            Ok(vec![ArrivalInfo {
                line_name: format!("{} 방면", station),
                message: "전역 출발".to_string(),
                received_at: "2026-10-14 08:00:00".to_string(),
            }])
        }

        async fn air_quality(&self, district: &str) -> FetchResult<Option<AirQualityRecord>> {
            if self.fail {
                return Err(FetchError::MissingCredential { service: "stub" });
            }
            Ok(Some(AirQualityRecord {
                district: district.to_string(),
                pm10: Some(25.0),
                pm25: Some(9.0),
                status: "좋음".to_string(),
            }))
        }

        async fn weather(&self, _station: &str) -> FetchResult<WeatherSample> {
            if self.fail {
                return Err(FetchError::Offline);
            }
            Ok(WeatherSample::new(30.0, 80.0))
        }
    }

    fn table() -> CongestionTable {
        let slots = ["8시00분", "8시30분", "9시00분", "10시00분"]
            .iter()
            .map(|l| TimeSlot::parse(l).unwrap())
            .collect();
        CongestionTable::new(
            slots,
            vec![CongestionRow {
                station: "강남".to_string(),
                day_type: DayType::Weekday,
                line: None,
                direction: None,
                values: vec![Some(70.0), Some(48.0), Some(36.0), Some(20.0)],
            }],
        )
    }

    fn wednesday(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_full_diagnosis() {
        let table = table();
        let diagnoser = Diagnoser::new(&table, StubSource { fail: false });
        let report = diagnoser.diagnose("강남역", wednesday(8, 40)).await;

        assert_eq!(report.station, "강남");
        assert_eq!(report.district, "강남구");
        assert_eq!(report.congestion.reading.value(), Some(48.0));
        assert_eq!(report.congestion.tier, Some(CongestionTier::Moderate));
        assert_eq!(report.air_quality.unwrap().district, "강남구");
        assert_eq!(report.air.grade, report::AirGrade::Good);
        assert_eq!(report.arrivals.len(), 1);
        assert_eq!(report.discomfort.level, discomfort::DiscomfortLevel::VeryBad);

        let briefing = report.briefing.unwrap();
        assert_eq!(briefing.peak.slot.as_str(), "8시00분");
        assert_eq!(briefing.golden.unwrap().slot.as_str(), "10시00분");
    }

    #[tokio::test]
    async fn test_collaborator_failures_degrade_to_no_data() {
        let table = table();
        let diagnoser = Diagnoser::new(&table, StubSource { fail: true });
        let report = diagnoser.diagnose("강남", wednesday(9, 0)).await;

        assert_eq!(report.congestion.tier, Some(CongestionTier::Moderate));
        assert!(report.air_quality.is_none());
        assert_eq!(report.air.pm10, 0.0);
        assert!(report.arrivals.is_empty());
        assert_eq!(report.weather, WeatherSample::absent());
        assert_eq!(report.discomfort.level, discomfort::DiscomfortLevel::Unknown);
    }

    #[tokio::test]
    async fn test_unknown_station() {
        let table = table();
        let diagnoser = Diagnoser::new(&table, StubSource { fail: false }).with_horizon(1);
        let report = diagnoser.diagnose("영통역", wednesday(8, 0)).await;

        assert_eq!(report.district, "영통");
        assert_eq!(report.congestion.tier, None);
        assert_eq!(report.congestion.reference, "데이터 없음");
        assert!(report.briefing.is_none());
    }

    #[tokio::test]
    async fn test_horizon_limits_golden_window() {
        let table = table();
        let diagnoser = Diagnoser::new(&table, StubSource { fail: false }).with_horizon(0);
        let report = diagnoser.diagnose("강남", wednesday(8, 0)).await;

        let golden = report.briefing.unwrap().golden.unwrap();
        assert_eq!(golden.slot.as_str(), "8시30분");
        assert_eq!(golden.value, 48.0);
    }
}
