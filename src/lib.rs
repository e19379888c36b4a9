//! Air-Subway Library
//!
//! Subway congestion "health diagnosis" for Seoul stations: looks up
//! half-hourly congestion statistics, combines them with realtime arrival,
//! district air-quality and weather data, and derives a report.
//!
//! This library provides tools for:
//! - Loading the congestion CSV (UTF-8 or CP949) into an immutable table
//! - Querying congestion by station, day type and half-hour slot
//! - Mapping stations to districts for air-quality lookup
//! - Computing the discomfort index from temperature and humidity
//! - Classifying congestion into tiers with fixed narrative
//! - Finding the least-congested upcoming slot (golden window)

pub mod cli;
pub mod config;
pub mod constants;
pub mod diagnosis;
pub mod discomfort;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod models;
pub mod render;
pub mod report;
pub mod station;
pub mod table;

pub use config::AppConfig;
pub use diagnosis::Diagnoser;
pub use error::{AirSubwayError, FetchError, Result};
pub use loader::load_congestion_table;
pub use models::{CongestionReading, DailySeries, DayType, TimeSlot};
pub use report::HealthReport;
pub use table::CongestionTable;
