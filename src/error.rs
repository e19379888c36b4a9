//! Error handling for congestion table loading and live data fetching.
//!
//! Derivation outcomes (service ended, no data, missing weather) are not
//! errors and never appear here; these types cover I/O, table shape,
//! configuration and collaborator failures only.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AirSubwayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Congestion table not found at path: {path}")]
    TableNotFound { path: PathBuf },

    #[error("Could not decode congestion table {path} as UTF-8 or CP949")]
    UndecodableTable { path: PathBuf },

    #[error("Congestion table {path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid evaluation time '{input}': expected YYYY-MM-DD HH:MM")]
    InvalidTime { input: String },
}

pub type Result<T> = std::result::Result<T, AirSubwayError>;

/// Failure reasons for the live data collaborators.
///
/// The diagnosis treats every variant as "no data"; the reason is kept so
/// that it can be logged.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("No API key configured for {service}")]
    MissingCredential { service: &'static str },

    #[error("Request to {service} failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} responded with HTTP {status}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Could not decode {service} response: {reason}")]
    Decode {
        service: &'static str,
        reason: String,
    },

    #[error("Live data fetching is disabled")]
    Offline,
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;
