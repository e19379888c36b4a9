//! PM10 grading for the report header.

use crate::constants::pm10_grades;
use crate::models::AirQualityRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AirGrade {
    Good,
    Normal,
    Bad,
}

impl AirGrade {
    pub fn from_pm10(pm10: f64) -> Self {
        if pm10 >= pm10_grades::BAD_FROM {
            AirGrade::Bad
        } else if pm10 <= pm10_grades::GOOD_UP_TO {
            AirGrade::Good
        } else {
            AirGrade::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AirGrade::Good => "좋음",
            AirGrade::Normal => "보통",
            AirGrade::Bad => "나쁨",
        }
    }
}

/// PM10 reading and grade; no record grades as normal with PM10 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AirAssessment {
    pub pm10: f64,
    pub grade: AirGrade,
}

pub fn assess(record: Option<&AirQualityRecord>) -> AirAssessment {
    match record.and_then(|r| r.pm10) {
        Some(pm10) => AirAssessment {
            pm10,
            grade: AirGrade::from_pm10(pm10),
        },
        None => AirAssessment {
            pm10: 0.0,
            grade: AirGrade::Normal,
        },
    }
}
