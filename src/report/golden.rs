//! Least-congested upcoming slot ("golden window").

use crate::constants::GOLDEN_WINDOW_CEILING;
use crate::models::{DailySeries, SlotReading};

/// Hour used for horizon comparison; midnight slots sort after 23시
fn comparable_hour(reading: &SlotReading) -> u32 {
    match reading.slot.hour() {
        0 => 24,
        hour => hour,
    }
}

/// Least-congested slot whose hour lies in `[current_hour, current_hour + horizon_hours]`
///
/// Only slots below the 100% ceiling qualify. Ties keep the earliest slot in
/// table order. `None` means there is nothing to recommend.
pub fn find_best_upcoming(
    series: &DailySeries,
    current_hour: u32,
    horizon_hours: u32,
) -> Option<SlotReading> {
    let limit_hour = current_hour.saturating_add(horizon_hours);

    series
        .points()
        .iter()
        .filter(|reading| (current_hour..=limit_hour).contains(&comparable_hour(reading)))
        .filter(|reading| reading.value < GOLDEN_WINDOW_CEILING)
        .fold(None::<&SlotReading>, |best, reading| match best {
            Some(current) if current.value <= reading.value => Some(current),
            _ => Some(reading),
        })
        .cloned()
}
