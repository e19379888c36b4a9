//! Health report assembly
//!
//! Turns a congestion reading, the day's series and the live data into the
//! pieces of the "health diagnosis":
//!
//! - [`classifier`]: congestion tiers and their fixed narrative
//! - [`golden`]: least-congested upcoming slot
//! - [`briefing`]: worst/best/golden summary of the day
//! - [`air`]: PM10 grading

pub mod air;
pub mod briefing;
pub mod classifier;
pub mod golden;

pub use air::{AirAssessment, AirGrade};
pub use briefing::DailyBriefing;
pub use classifier::{CongestionTier, TierNarrative, classify};
pub use golden::find_best_upcoming;

use crate::discomfort::DiscomfortIndex;
use crate::models::{AirQualityRecord, ArrivalInfo, CongestionReading, WeatherSample};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Congestion reading with its tier, if it has one
///
/// Only measured readings are classified. Service-ended and no-data readings
/// carry no tier so they are never reported as comfortable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CongestionDiagnosis {
    pub reading: CongestionReading,
    pub reference: String,
    pub tier: Option<CongestionTier>,
    pub narrative: Option<&'static TierNarrative>,
}

impl CongestionDiagnosis {
    pub fn from_reading(reading: CongestionReading) -> Self {
        let tier = reading.value().map(classify);
        Self {
            reference: reading.reference_label(),
            narrative: tier.map(|t| t.narrative()),
            tier,
            reading,
        }
    }
}

/// Everything rendered for one station query
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub station: String,
    pub district: String,
    pub evaluated_at: NaiveDateTime,
    pub congestion: CongestionDiagnosis,
    pub weather: WeatherSample,
    pub discomfort: DiscomfortIndex,
    pub air_quality: Option<AirQualityRecord>,
    pub air: AirAssessment,
    pub arrivals: Vec<ArrivalInfo>,
    pub briefing: Option<DailyBriefing>,
}
