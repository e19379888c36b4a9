//! Station name normalization and district lookup.

use crate::constants::{STATION_DISTRICT_INDEX, STATION_SUFFIX};
use tracing::debug;

/// Strip a trailing `역` from a user-entered station name
///
/// The remainder is returned untouched: no trimming, no other rewriting.
/// `"강남역"` becomes `"강남"`, `"역삼"` stays `"역삼"`.
pub fn normalize_station_name(name: &str) -> &str {
    name.strip_suffix(STATION_SUFFIX).unwrap_or(name)
}

/// Administrative district (구) used to query air quality for a station
///
/// Unmapped stations fall back to their normalized name so that the
/// air-quality lookup still has a search term. Names whose suffix is part
/// of the station name itself (`서울역`) are matched as entered.
pub fn lookup_district(station: &str) -> String {
    let normalized = normalize_station_name(station);
    let mapped = STATION_DISTRICT_INDEX
        .get(normalized)
        .or_else(|| STATION_DISTRICT_INDEX.get(station));
    match mapped {
        Some(district) => district.to_string(),
        None => {
            debug!("No district mapping for '{}', using name as-is", normalized);
            normalized.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_suffix() {
        assert_eq!(normalize_station_name("강남역"), "강남");
        assert_eq!(normalize_station_name("강남"), "강남");
        assert_eq!(normalize_station_name("역삼"), "역삼");
        assert_eq!(normalize_station_name("역삼역"), "역삼");
        assert_eq!(normalize_station_name("역"), "");
        assert_eq!(normalize_station_name(""), "");
    }

    #[test]
    fn test_normalize_does_not_trim() {
        assert_eq!(normalize_station_name(" 강남역"), " 강남");
        assert_eq!(normalize_station_name("강남역 "), "강남역 ");
    }

    #[test]
    fn test_lookup_district() {
        assert_eq!(lookup_district("강남역"), "강남구");
        assert_eq!(lookup_district("홍대입구"), "마포구");
        assert_eq!(lookup_district("서울역"), "중구");
    }

    #[test]
    fn test_lookup_district_falls_back_to_name() {
        assert_eq!(lookup_district("영통"), "영통");
        assert_eq!(lookup_district("영통역"), "영통");
        assert_eq!(lookup_district("마포구"), "마포구");
    }
}
