//! Seoul open-data API client (realtime arrivals, realtime district air quality).

use crate::config::SeoulConfig;
use crate::constants::{
    AIR_QUALITY_API_BASE, AIR_QUALITY_ROW_LIMIT, ARRIVAL_API_BASE, ARRIVAL_ROW_LIMIT,
};
use crate::error::{AirSubwayError, FetchError, FetchResult, Result};
use crate::models::{AirQualityRecord, ArrivalInfo};
use crate::station::normalize_station_name;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const ARRIVAL_SERVICE: &str = "subway arrival API";
const AIR_QUALITY_SERVICE: &str = "air quality API";

pub struct SeoulOpenApi {
    client: reqwest::Client,
    subway_key: Option<String>,
    general_key: Option<String>,
}

impl SeoulOpenApi {
    pub fn new(config: &SeoulConfig, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AirSubwayError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            subway_key: config.subway_key.clone(),
            general_key: config.general_key.clone(),
        })
    }

    pub async fn realtime_arrivals(&self, station: &str) -> FetchResult<Vec<ArrivalInfo>> {
        let key = self
            .subway_key
            .as_deref()
            .ok_or(FetchError::MissingCredential {
                service: ARRIVAL_SERVICE,
            })?;

        let url = format!(
            "{}/{}/json/realtimeStationArrival/0/{}/{}",
            ARRIVAL_API_BASE,
            key,
            ARRIVAL_ROW_LIMIT,
            normalize_station_name(station)
        );

        let body = self.get_json(&url, ARRIVAL_SERVICE).await?;
        parse_arrivals(&body)
    }

    pub async fn district_air_quality(&self, district: &str) -> FetchResult<Option<AirQualityRecord>> {
        let key = self
            .general_key
            .as_deref()
            .ok_or(FetchError::MissingCredential {
                service: AIR_QUALITY_SERVICE,
            })?;

        let url = format!(
            "{}/{}/json/RealtimeCityAir/1/{}/",
            AIR_QUALITY_API_BASE, key, AIR_QUALITY_ROW_LIMIT
        );

        let body = self.get_json(&url, AIR_QUALITY_SERVICE).await?;
        parse_air_quality(&body, district)
    }

    async fn get_json(&self, url: &str, service: &'static str) -> FetchResult<Value> {
        debug!("Requesting {}", service);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport { service, source })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                service,
                status: response.status(),
            });
        }

        response.json::<Value>().await.map_err(|e| FetchError::Decode {
            service,
            reason: e.to_string(),
        })
    }
}

/// Error message the services embed in a failed response body
fn service_message(body: &Value) -> String {
    body.pointer("/RESULT/MESSAGE")
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("unexpected response shape")
        .to_string()
}

fn text_field(row: &Value, name: &str) -> String {
    match row.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Numeric field that may be encoded as a number or a string
fn number_field(row: &Value, name: &str) -> Option<f64> {
    match row.get(name)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn parse_arrivals(body: &Value) -> FetchResult<Vec<ArrivalInfo>> {
    let rows = body
        .get("realtimeArrivalList")
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::Decode {
            service: ARRIVAL_SERVICE,
            reason: service_message(body),
        })?;

    Ok(rows
        .iter()
        .map(|row| ArrivalInfo {
            line_name: text_field(row, "trainLineNm"),
            message: text_field(row, "arvlMsg2"),
            received_at: text_field(row, "recptnDt"),
        })
        .collect())
}

pub fn parse_air_quality(body: &Value, district: &str) -> FetchResult<Option<AirQualityRecord>> {
    let rows = body
        .pointer("/RealtimeCityAir/row")
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::Decode {
            service: AIR_QUALITY_SERVICE,
            reason: service_message(body),
        })?;

    let record = rows
        .iter()
        .find(|row| text_field(row, "MSRSTN_NM").contains(district))
        .map(|row| AirQualityRecord {
            district: text_field(row, "MSRSTN_NM"),
            pm10: number_field(row, "PM"),
            pm25: number_field(row, "FPM"),
            status: text_field(row, "CAI_GRD"),
        });

    if record.is_none() {
        debug!("No air quality row matches '{}'", district);
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_arrivals() {
        let body = json!({
            "errorMessage": { "status": 200, "code": "INFO-000" },
            "realtimeArrivalList": [
                {
                    "trainLineNm": "성수행 - 역삼방면",
                    "arvlMsg2": "전역 도착",
                    "recptnDt": "2026-10-14 08:11:02",
                    "statnNm": "강남"
                },
                {
                    "trainLineNm": "신도림행 - 교대방면",
                    "arvlMsg2": "3분 후 (서초)",
                    "recptnDt": "2026-10-14 08:10:48"
                }
            ]
        });

        let arrivals = parse_arrivals(&body).unwrap();
        assert_eq!(arrivals.len(), 2);
        assert_eq!(arrivals[0].line_name, "성수행 - 역삼방면");
        assert_eq!(arrivals[1].message, "3분 후 (서초)");
        assert_eq!(arrivals[1].received_at, "2026-10-14 08:10:48");
    }

    #[test]
    fn test_parse_arrivals_error_body() {
        let body = json!({ "status": 500, "code": "INFO-200", "message": "해당하는 데이터가 없습니다." });
        let err = parse_arrivals(&body).unwrap_err();
        assert!(matches!(err, FetchError::Decode { ref reason, .. } if reason == "해당하는 데이터가 없습니다."));
    }

    #[test]
    fn test_parse_air_quality_matches_district() {
        let body = json!({
            "RealtimeCityAir": {
                "list_total_count": 3,
                "row": [
                    { "MSRSTN_NM": "종로구", "PM": 41, "FPM": 22, "CAI_GRD": "보통" },
                    { "MSRSTN_NM": "강남구", "PM": "88", "FPM": "35", "CAI_GRD": "나쁨" },
                    { "MSRSTN_NM": "강동구", "PM": null, "FPM": "-", "CAI_GRD": "점검중" }
                ]
            }
        });

        let record = parse_air_quality(&body, "강남구").unwrap().unwrap();
        assert_eq!(record.district, "강남구");
        assert_eq!(record.pm10, Some(88.0));
        assert_eq!(record.pm25, Some(35.0));
        assert_eq!(record.status, "나쁨");

        let record = parse_air_quality(&body, "종로구").unwrap().unwrap();
        assert_eq!(record.pm10, Some(41.0));

        let record = parse_air_quality(&body, "강동").unwrap().unwrap();
        assert_eq!(record.pm10, None);
        assert_eq!(record.pm25, None);

        assert_eq!(parse_air_quality(&body, "영통").unwrap(), None);
    }

    #[test]
    fn test_parse_air_quality_error_body() {
        let body = json!({ "RESULT": { "CODE": "INFO-100", "MESSAGE": "인증키가 유효하지 않습니다." } });
        let err = parse_air_quality(&body, "강남구").unwrap_err();
        assert!(matches!(err, FetchError::Decode { ref reason, .. } if reason == "인증키가 유효하지 않습니다."));
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let api = SeoulOpenApi::new(&SeoulConfig::default(), Duration::from_secs(1)).unwrap();

        assert!(matches!(
            api.realtime_arrivals("강남").await,
            Err(FetchError::MissingCredential { .. })
        ));
        assert!(matches!(
            api.district_air_quality("강남구").await,
            Err(FetchError::MissingCredential { .. })
        ));
    }
}
