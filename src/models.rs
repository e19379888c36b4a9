//! Core data structures for the congestion diagnosis.
//!
//! Defines day types, half-hour time slots, congestion readings and the
//! records consumed from the live data collaborators.

use chrono::{Datelike, NaiveDateTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Day classification used by the congestion statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Weekday,
    Saturday,
    Sunday,
}

impl DayType {
    /// Derive the day type from a weekday ordinal (Monday = 0)
    pub fn from_weekday_index(index: u32) -> Self {
        match index {
            0..=4 => DayType::Weekday,
            5 => DayType::Saturday,
            _ => DayType::Sunday,
        }
    }

    pub fn from_datetime(now: &NaiveDateTime) -> Self {
        Self::from_weekday_index(now.weekday().num_days_from_monday())
    }

    /// Label as it appears in the `요일구분` column
    pub fn label(&self) -> &'static str {
        match self {
            DayType::Weekday => "평일",
            DayType::Saturday => "토요일",
            DayType::Sunday => "일요일",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "평일" => Some(DayType::Weekday),
            "토요일" => Some(DayType::Saturday),
            "일요일" => Some(DayType::Sunday),
            _ => None,
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

static SLOT_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})시(00|30)분$").expect("slot label pattern is valid")
});

/// Half-hour slot label such as `8시30분` or `0시00분`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot(String);

impl TimeSlot {
    /// Slot containing the given wall-clock time
    pub fn from_time(hour: u32, minute: u32) -> Self {
        let half = if minute < 30 { "00" } else { "30" };
        Self(format!("{}시{}분", hour, half))
    }

    pub fn from_datetime(now: &NaiveDateTime) -> Self {
        Self::from_time(now.hour(), now.minute())
    }

    /// Recognise a column name as a slot label
    ///
    /// Zero-padded hours (`05시30분`) are stored in the unpadded form that
    /// [`TimeSlot::from_time`] produces.
    pub fn parse(label: &str) -> Option<Self> {
        let caps = SLOT_LABEL.captures(label)?;
        let hour: u32 = caps[1].parse().ok()?;
        Some(Self(format!("{}시{}분", hour, &caps[2])))
    }

    /// Leading hour number of the label
    pub fn hour(&self) -> u32 {
        SLOT_LABEL
            .captures(&self.0)
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of looking up the congestion for the current slot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CongestionReading {
    Measured {
        value: f64,
        day_type: DayType,
        slot: TimeSlot,
    },
    /// The current slot is not a column of the table
    OutOfServiceHours { day_type: DayType, slot: TimeSlot },
    /// No row matches the station and day type
    NoData,
}

impl CongestionReading {
    /// Human-readable basis of the reading
    pub fn reference_label(&self) -> String {
        match self {
            CongestionReading::Measured { day_type, slot, .. } => {
                format!("{} {} 기준", day_type, slot)
            }
            CongestionReading::OutOfServiceHours { day_type, slot } => {
                format!("{} {} (운행종료)", day_type, slot)
            }
            CongestionReading::NoData => "데이터 없음".to_string(),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            CongestionReading::Measured { value, .. } => Some(*value),
            _ => None,
        }
    }

}

/// Congestion value observed for one slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotReading {
    pub slot: TimeSlot,
    pub value: f64,
}

/// Per-slot congestion for one station and day type, in table column order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DailySeries {
    points: Vec<SlotReading>,
}

impl DailySeries {
    pub fn new(points: Vec<SlotReading>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[SlotReading] {
        &self.points
    }

    pub fn get(&self, slot: &str) -> Option<f64> {
        self.points
            .iter()
            .find(|point| point.slot.as_str() == slot)
            .map(|point| point.value)
    }

    /// First slot holding the maximum value
    pub fn peak(&self) -> Option<&SlotReading> {
        self.points.iter().fold(None, |best, point| match best {
            Some(current) if current.value >= point.value => Some(current),
            _ => Some(point),
        })
    }

    /// First slot holding the minimum value
    pub fn trough(&self) -> Option<&SlotReading> {
        self.points.iter().fold(None, |best, point| match best {
            Some(current) if current.value <= point.value => Some(current),
            _ => Some(point),
        })
    }
}

/// District air-quality measurement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQualityRecord {
    pub district: String,
    pub pm10: Option<f64>,
    pub pm25: Option<f64>,
    pub status: String,
}

/// Temperature (°C) and relative humidity (%) near a station
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

impl WeatherSample {
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature: Some(temperature),
            humidity: Some(humidity),
        }
    }

    pub fn absent() -> Self {
        Self::default()
    }
}

/// One realtime arrival row, used for display only
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrivalInfo {
    pub line_name: String,
    pub message: String,
    pub received_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_day_type_from_weekday() {
        // 2026-10-12 is a Monday
        assert_eq!(DayType::from_datetime(&at(2026, 10, 12, 8, 0)), DayType::Weekday);
        assert_eq!(DayType::from_datetime(&at(2026, 10, 16, 8, 0)), DayType::Weekday);
        assert_eq!(DayType::from_datetime(&at(2026, 10, 17, 8, 0)), DayType::Saturday);
        assert_eq!(DayType::from_datetime(&at(2026, 10, 18, 8, 0)), DayType::Sunday);
    }

    #[test]
    fn test_day_type_labels_round_trip() {
        for day_type in [DayType::Weekday, DayType::Saturday, DayType::Sunday] {
            assert_eq!(DayType::from_label(day_type.label()), Some(day_type));
        }
        assert_eq!(DayType::from_label("공휴일"), None);
    }

    #[test]
    fn test_time_slot_half_hour_boundary() {
        assert_eq!(TimeSlot::from_time(8, 29).as_str(), "8시00분");
        assert_eq!(TimeSlot::from_time(8, 30).as_str(), "8시30분");
        assert_eq!(TimeSlot::from_time(0, 0).as_str(), "0시00분");
        assert_eq!(TimeSlot::from_time(23, 59).as_str(), "23시30분");
    }

    #[test]
    fn test_time_slot_covers_whole_day() {
        for hour in 0..24 {
            for minute in 0..60 {
                let slot = TimeSlot::from_time(hour, minute);
                assert!(TimeSlot::parse(slot.as_str()).is_some());
                assert_eq!(slot.hour(), hour);
            }
        }
    }

    #[test]
    fn test_time_slot_parse_rejects_other_columns() {
        assert!(TimeSlot::parse("출발역").is_none());
        assert!(TimeSlot::parse("5시15분").is_none());
        assert!(TimeSlot::parse("05시30분 ").is_none());
        assert_eq!(TimeSlot::parse("05시30분").map(|s| s.hour()), Some(5));
    }

    #[test]
    fn test_time_slot_parse_drops_zero_padding() {
        let padded = TimeSlot::parse("00시00분").unwrap();
        assert_eq!(padded.as_str(), "0시00분");
        assert_eq!(padded, TimeSlot::from_time(0, 10));
        assert_eq!(TimeSlot::parse("05시30분").unwrap(), TimeSlot::from_time(5, 45));
        assert_eq!(TimeSlot::parse("18시30분").unwrap().as_str(), "18시30분");
    }

    #[test]
    fn test_reference_labels_are_distinct() {
        let slot = TimeSlot::from_time(1, 10);
        let ended = CongestionReading::OutOfServiceHours {
            day_type: DayType::Weekday,
            slot: slot.clone(),
        };
        let measured = CongestionReading::Measured {
            value: 42.0,
            day_type: DayType::Sunday,
            slot,
        };

        assert_eq!(ended.reference_label(), "평일 1시00분 (운행종료)");
        assert_eq!(measured.reference_label(), "일요일 1시00분 기준");
        assert_eq!(CongestionReading::NoData.reference_label(), "데이터 없음");

        assert_eq!(measured.value(), Some(42.0));
        assert_eq!(ended.value(), None);
    }

    #[test]
    fn test_series_extremes_keep_first_occurrence() {
        let series = DailySeries::new(vec![
            SlotReading { slot: TimeSlot::from_time(7, 0), value: 50.0 },
            SlotReading { slot: TimeSlot::from_time(8, 0), value: 90.0 },
            SlotReading { slot: TimeSlot::from_time(9, 0), value: 10.0 },
            SlotReading { slot: TimeSlot::from_time(18, 0), value: 90.0 },
            SlotReading { slot: TimeSlot::from_time(22, 0), value: 10.0 },
        ]);

        assert_eq!(series.peak().unwrap().slot.as_str(), "8시00분");
        assert_eq!(series.trough().unwrap().slot.as_str(), "9시00분");
        assert_eq!(series.get("18시00분"), Some(90.0));
        assert!(DailySeries::default().peak().is_none());
    }
}
