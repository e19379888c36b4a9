//! In-memory congestion statistics and their queries.
//!
//! The table holds one row per (station, day type, line, direction) with a
//! value for each half-hour slot column. It is built once by the loader and
//! only read afterwards.

use crate::models::{CongestionReading, DailySeries, DayType, SlotReading, TimeSlot};
use crate::station::normalize_station_name;
use chrono::NaiveDateTime;
use tracing::debug;

/// One direction of one line at one station for one day type
#[derive(Debug, Clone, PartialEq)]
pub struct CongestionRow {
    pub station: String,
    pub day_type: DayType,
    pub line: Option<String>,
    pub direction: Option<String>,
    /// Aligned with [`CongestionTable::slots`]; `None` for a missing cell
    pub values: Vec<Option<f64>>,
}

/// Congestion statistics keyed by station, day type and slot
#[derive(Debug, Clone, Default)]
pub struct CongestionTable {
    slots: Vec<TimeSlot>,
    rows: Vec<CongestionRow>,
}

impl CongestionTable {
    /// Build a table; rows shorter than the slot list are padded with gaps
    pub fn new(slots: Vec<TimeSlot>, rows: Vec<CongestionRow>) -> Self {
        let width = slots.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.values.resize(width, None);
                row
            })
            .collect();
        Self { slots, rows }
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn rows(&self) -> &[CongestionRow] {
        &self.rows
    }

    fn slot_index(&self, slot: &TimeSlot) -> Option<usize> {
        self.slots.iter().position(|candidate| candidate == slot)
    }

    /// Name the rows are keyed by: normalized first, then as entered
    ///
    /// Mirrors `lookup_district`, so a table listing `서울역` is still found.
    fn station_key<'s>(&self, station: &'s str) -> &'s str {
        let normalized = normalize_station_name(station);
        let known = |name: &str| self.rows.iter().any(|row| row.station == name);
        if !known(normalized) && known(station) {
            station
        } else {
            normalized
        }
    }

    fn matching_rows<'a>(
        &'a self,
        station: &'a str,
        day_type: DayType,
    ) -> impl Iterator<Item = &'a CongestionRow> + 'a {
        self.rows
            .iter()
            .filter(move |row| row.station == station && row.day_type == day_type)
    }

    /// Maximum of the present values in one column across the given rows
    fn column_max<'a>(rows: impl Iterator<Item = &'a CongestionRow>, index: usize) -> Option<f64> {
        rows.filter_map(|row| row.values.get(index).copied().flatten())
            .fold(None, |max, value| match max {
                Some(current) if current >= value => Some(current),
                _ => Some(value),
            })
    }

    /// Congestion for the slot containing `now`
    ///
    /// Several rows match when a station serves more than one line or
    /// direction; the busiest one is reported.
    pub fn current_congestion(&self, station: &str, now: &NaiveDateTime) -> CongestionReading {
        let day_type = DayType::from_datetime(now);
        let slot = TimeSlot::from_datetime(now);

        let Some(index) = self.slot_index(&slot) else {
            debug!("Slot {} is outside service hours", slot);
            return CongestionReading::OutOfServiceHours { day_type, slot };
        };

        let station = self.station_key(station);
        let mut rows = self.matching_rows(station, day_type).peekable();
        if rows.peek().is_none() {
            debug!("No congestion rows for '{}' on {}", station, day_type);
            return CongestionReading::NoData;
        }

        match Self::column_max(rows, index) {
            Some(value) => CongestionReading::Measured {
                value,
                day_type,
                slot,
            },
            None => {
                debug!("Every {} cell for '{}' on {} is empty", slot, station, day_type);
                CongestionReading::NoData
            }
        }
    }

    /// Per-slot congestion for the whole day containing `now`
    pub fn daily_series(&self, station: &str, now: &NaiveDateTime) -> DailySeries {
        let day_type = DayType::from_datetime(now);
        let station = self.station_key(station);

        let rows: Vec<&CongestionRow> = self.matching_rows(station, day_type).collect();
        if rows.is_empty() {
            return DailySeries::default();
        }

        let points = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                Self::column_max(rows.iter().copied(), index).map(|value| SlotReading {
                    slot: slot.clone(),
                    value,
                })
            })
            .collect();

        DailySeries::new(points)
    }
}
