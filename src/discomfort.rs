//! Discomfort index from temperature and relative humidity.

use crate::constants::discomfort_levels;
use serde::Serialize;
use std::fmt;

/// Severity band of a discomfort index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscomfortLevel {
    /// Everyone feels uncomfortable
    VeryBad,
    /// About half of people feel uncomfortable
    Bad,
    /// About one in ten feels uncomfortable
    Moderate,
    Comfortable,
    /// Temperature or humidity unavailable
    Unknown,
}

impl DiscomfortLevel {
    pub fn label(&self) -> &'static str {
        match self {
            DiscomfortLevel::VeryBad => "매우 나쁨 (전원 불쾌)",
            DiscomfortLevel::Bad => "나쁨 (50% 불쾌)",
            DiscomfortLevel::Moderate => "보통 (10% 불쾌)",
            DiscomfortLevel::Comfortable => "좋음 (쾌적)",
            DiscomfortLevel::Unknown => "정보 없음",
        }
    }

    fn from_index(value: f64) -> Self {
        if value >= discomfort_levels::VERY_BAD {
            DiscomfortLevel::VeryBad
        } else if value >= discomfort_levels::BAD {
            DiscomfortLevel::Bad
        } else if value >= discomfort_levels::MODERATE {
            DiscomfortLevel::Moderate
        } else {
            DiscomfortLevel::Comfortable
        }
    }
}

impl fmt::Display for DiscomfortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscomfortIndex {
    pub value: f64,
    pub level: DiscomfortLevel,
}

/// Compute the discomfort index; either input missing yields `Unknown` with value 0
pub fn compute(temperature: Option<f64>, humidity: Option<f64>) -> DiscomfortIndex {
    let (Some(t), Some(h)) = (temperature, humidity) else {
        return DiscomfortIndex {
            value: 0.0,
            level: DiscomfortLevel::Unknown,
        };
    };

    let value = 0.81 * t + 0.01 * h * (0.99 * t - 14.3) + 46.3;
    DiscomfortIndex {
        value,
        level: DiscomfortLevel::from_index(value),
    }
}
