//! Daily congestion briefing: worst slot, best slot and golden window.

use super::golden::find_best_upcoming;
use crate::models::{DailySeries, SlotReading};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBriefing {
    /// Busiest slot of the day
    pub peak: SlotReading,
    /// Quietest slot of the day
    pub trough: SlotReading,
    /// Recommended departure within the look-ahead horizon
    pub golden: Option<SlotReading>,
    pub horizon_hours: u32,
    pub series: DailySeries,
}

impl DailyBriefing {
    /// Build the briefing; an empty series has nothing to brief
    pub fn from_series(series: DailySeries, current_hour: u32, horizon_hours: u32) -> Option<Self> {
        let peak = series.peak()?.clone();
        let trough = series.trough()?.clone();
        let golden = find_best_upcoming(&series, current_hour, horizon_hours);

        Some(Self {
            peak,
            trough,
            golden,
            horizon_hours,
            series,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlot;

    fn reading(label: &str, value: f64) -> SlotReading {
        SlotReading {
            slot: TimeSlot::parse(label).unwrap(),
            value,
        }
    }

    #[test]
    fn test_briefing_from_series() {
        let series = DailySeries::new(vec![
            reading("7시00분", 45.0),
            reading("8시00분", 120.0),
            reading("9시00분", 70.0),
            reading("10시00분", 30.0),
            reading("23시30분", 5.0),
        ]);

        let briefing = DailyBriefing::from_series(series, 8, 3).unwrap();
        assert_eq!(briefing.peak, reading("8시00분", 120.0));
        assert_eq!(briefing.trough, reading("23시30분", 5.0));
        assert_eq!(briefing.golden, Some(reading("10시00분", 30.0)));
        assert_eq!(briefing.series.len(), 5);
    }

    #[test]
    fn test_no_briefing_for_empty_series() {
        assert!(DailyBriefing::from_series(DailySeries::default(), 8, 3).is_none());
    }
}
