//! Application constants for the air-subway diagnosis
//!
//! Column names of the congestion table, classification thresholds,
//! Seoul open-data endpoints and the static station → district table.

use std::collections::HashMap;
use std::sync::LazyLock;

// =============================================================================
// Congestion Table Layout
// =============================================================================

/// Origin station column
pub const STATION_COLUMN: &str = "출발역";

/// Day-type column (평일 / 토요일 / 일요일)
pub const DAY_TYPE_COLUMN: &str = "요일구분";

/// Optional subway line column
pub const LINE_COLUMN: &str = "호선";

/// Optional travel direction column (상선 / 하선 / 내선 / 외선)
pub const DIRECTION_COLUMN: &str = "상하구분";

/// Suffix users commonly append to station names
pub const STATION_SUFFIX: &str = "역";

/// Default location of the congestion CSV, relative to the working directory
pub const DEFAULT_TABLE_PATH: &str = "data/congestion_data.csv";

// =============================================================================
// Classification Thresholds
// =============================================================================

/// Congestion tier lower bounds (inclusive, percent)
pub mod congestion_tiers {
    pub const HIGH: f64 = 55.0;
    pub const MODERATE: f64 = 35.0;
}

/// Discomfort index severity lower bounds (inclusive)
pub mod discomfort_levels {
    pub const VERY_BAD: f64 = 80.0;
    pub const BAD: f64 = 75.0;
    pub const MODERATE: f64 = 68.0;
}

/// PM10 grading bounds (µg/m³)
pub mod pm10_grades {
    /// At or above this value the air is graded bad
    pub const BAD_FROM: f64 = 81.0;
    /// At or below this value the air is graded good
    pub const GOOD_UP_TO: f64 = 30.0;
}

/// Default look-ahead for the golden window, in hours
pub const DEFAULT_GOLDEN_HORIZON_HOURS: u32 = 3;

/// A slot must be strictly below this value to be recommended
pub const GOLDEN_WINDOW_CEILING: f64 = 100.0;

/// Label shown when no golden window exists
pub const NO_RECOMMENDATION_LABEL: &str = "-";

// =============================================================================
// Live Data Sources
// =============================================================================

/// Realtime station arrival endpoint (key, start, end, station)
pub const ARRIVAL_API_BASE: &str = "http://swopenapi.seoul.go.kr/api/subway";

/// Realtime district air-quality endpoint
pub const AIR_QUALITY_API_BASE: &str = "http://openapi.seoul.go.kr:8088";

/// Number of arrival rows requested per station
pub const ARRIVAL_ROW_LIMIT: usize = 5;

/// Seoul has 25 districts, all returned in one page
pub const AIR_QUALITY_ROW_LIMIT: usize = 25;

/// Default HTTP timeout for the live data fetchers
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Fixed winter weather sample used until a weather API is wired up
pub const DEFAULT_WEATHER_TEMPERATURE: f64 = -5.2;
pub const DEFAULT_WEATHER_HUMIDITY: f64 = 35.0;

// =============================================================================
// Station → District Mapping
// =============================================================================

/// Normalized station name → administrative district (구)
pub const STATION_DISTRICTS: &[(&str, &str)] = &[
    ("강남", "강남구"),
    ("역삼", "강남구"),
    ("삼성", "강남구"),
    ("신사", "강남구"),
    ("압구정", "강남구"),
    ("청담", "강남구"),
    ("종각", "종로구"),
    ("종로3가", "종로구"),
    ("종로5가", "종로구"),
    ("혜화", "종로구"),
    ("광화문", "종로구"),
    ("시청", "중구"),
    ("서울역", "중구"),
    ("을지로", "중구"),
    ("명동", "중구"),
    ("충무로", "중구"),
    ("동대문", "중구"),
    ("홍대입구", "마포구"),
    ("합정", "마포구"),
    ("신촌", "서대문구"),
    ("이대", "서대문구"),
    ("여의도", "영등포구"),
    ("영등포", "영등포구"),
    ("당산", "영등포구"),
    ("잠실", "송파구"),
    ("가락시장", "송파구"),
    ("잠실나루", "송파구"),
    ("건대입구", "광진구"),
    ("성수", "성동구"),
    ("왕십리", "성동구"),
    ("고속터미널", "서초구"),
    ("교대", "서초구"),
    ("서초", "서초구"),
    ("양재", "서초구"),
    ("사당", "동작구"),
    ("노량진", "동작구"),
    ("이수", "동작구"),
    ("구로디지털단지", "구로구"),
    ("신도림", "구로구"),
    ("용산", "용산구"),
    ("이태원", "용산구"),
    ("한남", "용산구"),
];

/// Indexed view of [`STATION_DISTRICTS`]
pub static STATION_DISTRICT_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| STATION_DISTRICTS.iter().copied().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_index_matches_table() {
        assert_eq!(STATION_DISTRICT_INDEX.len(), STATION_DISTRICTS.len());
        assert_eq!(STATION_DISTRICT_INDEX.get("강남"), Some(&"강남구"));
        assert_eq!(STATION_DISTRICT_INDEX.get("한남"), Some(&"용산구"));
    }

    #[test]
    fn test_thresholds_are_ordered() {
        assert!(congestion_tiers::HIGH > congestion_tiers::MODERATE);
        assert!(discomfort_levels::VERY_BAD > discomfort_levels::BAD);
        assert!(discomfort_levels::BAD > discomfort_levels::MODERATE);
        assert!(pm10_grades::BAD_FROM > pm10_grades::GOOD_UP_TO);
    }
}
