//! Command-line interface components.

use crate::error::{AirSubwayError, Result};
use chrono::NaiveDateTime;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "air-subway")]
#[command(about = "Subway congestion health diagnosis for Seoul stations")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Station to diagnose (with or without the trailing 역)
    #[arg(value_name = "STATION")]
    pub station: String,

    /// Congestion statistics CSV (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Config file (default: <config_dir>/air-subway/config.toml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Evaluate at a fixed local time, e.g. "2026-10-14 08:15"
    #[arg(long, value_name = "YYYY-MM-DD HH:MM")]
    pub at: Option<String>,

    /// Golden-window look-ahead in hours (overrides the config file)
    #[arg(long, value_name = "HOURS")]
    pub horizon: Option<u32>,

    /// Skip the live arrival and air-quality requests
    #[arg(long)]
    pub offline: bool,

    /// Output format for the report
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format options for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Evaluation time requested with `--at`, if any
    pub fn evaluation_time(&self) -> Result<Option<NaiveDateTime>> {
        self.at.as_deref().map(parse_evaluation_time).transpose()
    }
}

pub fn parse_evaluation_time(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), "%Y-%m-%d %H:%M").map_err(|_| {
        AirSubwayError::InvalidTime {
            input: input.to_string(),
        }
    })
}
