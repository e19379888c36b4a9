//! Congestion table loading.
//!
//! Reads the congestion CSV with Polars and materialises it into a
//! [`CongestionTable`]. Public data exports of this table are published in
//! both UTF-8 and CP949, so the bytes are decoded before parsing: UTF-8 is
//! tried first (BOM stripped) and CP949 is the fallback.

use crate::constants::{DAY_TYPE_COLUMN, DIRECTION_COLUMN, LINE_COLUMN, STATION_COLUMN};
use crate::error::{AirSubwayError, Result};
use crate::models::{DayType, TimeSlot};
use crate::table::{CongestionRow, CongestionTable};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info, warn};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Load the congestion table from a CSV file
pub fn load_congestion_table(path: &Path) -> Result<CongestionTable> {
    if !path.exists() {
        return Err(AirSubwayError::TableNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path)?;
    let text = decode_table_bytes(&bytes).ok_or_else(|| AirSubwayError::UndecodableTable {
        path: path.to_path_buf(),
    })?;

    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(Cursor::new(text.into_bytes()))
        .finish()?;

    debug!(
        "Read {} rows x {} columns from {}",
        frame.height(),
        frame.width(),
        path.display()
    );

    let table = table_from_frame(&frame, path)?;
    info!(
        "Loaded {} congestion rows with {} time slots from {}",
        table.rows().len(),
        table.slots().len(),
        path.display()
    );

    Ok(table)
}

/// Decode as UTF-8, falling back to CP949; `None` if neither fits
pub fn decode_table_bytes(bytes: &[u8]) -> Option<String> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match std::str::from_utf8(body) {
        Ok(text) => Some(text.to_string()),
        Err(_) => {
            debug!("Table is not valid UTF-8, trying CP949");
            // encoding_rs's EUC-KR is the WHATWG definition, i.e. windows-949
            let (text, _, had_errors) = encoding_rs::EUC_KR.decode(body);
            (!had_errors).then(|| text.into_owned())
        }
    }
}

/// Build a table from a frame with station, day-type and slot columns
pub fn table_from_frame(frame: &DataFrame, path: &Path) -> Result<CongestionTable> {
    let stations = string_values(frame, STATION_COLUMN, path)?;
    let day_types = string_values(frame, DAY_TYPE_COLUMN, path)?;
    let lines = optional_string_values(frame, LINE_COLUMN)?;
    let directions = optional_string_values(frame, DIRECTION_COLUMN)?;

    let mut slots = Vec::new();
    let mut slot_values = Vec::new();
    for column in frame.get_columns() {
        let Some(slot) = TimeSlot::parse(column.name().as_str()) else {
            continue;
        };
        slot_values.push(numeric_values(column)?);
        slots.push(slot);
    }

    if slots.is_empty() {
        warn!("No time-slot columns found in {}", path.display());
    }

    let mut rows = Vec::with_capacity(frame.height());
    let mut skipped = 0usize;

    for index in 0..frame.height() {
        let (Some(station), Some(day_label)) = (&stations[index], &day_types[index]) else {
            skipped += 1;
            continue;
        };
        let Some(day_type) = DayType::from_label(day_label) else {
            warn!("Skipping row {}: unknown day type '{}'", index, day_label);
            skipped += 1;
            continue;
        };

        rows.push(CongestionRow {
            station: station.clone(),
            day_type,
            line: lines.as_ref().and_then(|values| values[index].clone()),
            direction: directions.as_ref().and_then(|values| values[index].clone()),
            values: slot_values.iter().map(|column| column[index]).collect(),
        });
    }

    if skipped > 0 {
        debug!("Skipped {} incomplete rows in {}", skipped, path.display());
    }

    Ok(CongestionTable::new(slots, rows))
}

fn string_values(frame: &DataFrame, name: &str, path: &Path) -> Result<Vec<Option<String>>> {
    let column = frame
        .column(name)
        .map_err(|_| AirSubwayError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })?;
    column_strings(column)
}

fn optional_string_values(frame: &DataFrame, name: &str) -> Result<Option<Vec<Option<String>>>> {
    match frame.column(name) {
        Ok(column) => Ok(Some(column_strings(column)?)),
        Err(_) => Ok(None),
    }
}

fn column_strings(column: &Column) -> Result<Vec<Option<String>>> {
    let column = column.cast(&DataType::String)?;
    let values = column
        .as_materialized_series()
        .str()?
        .into_iter()
        .map(|value| {
            value
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
        .collect();
    Ok(values)
}

/// Slot cells as floats; blanks and non-numeric cells become gaps
fn numeric_values(column: &Column) -> Result<Vec<Option<f64>>> {
    let column = column.cast(&DataType::Float64)?;
    let values = column
        .as_materialized_series()
        .f64()?
        .into_iter()
        .map(|value| value.filter(|v| !v.is_nan()))
        .collect();
    Ok(values)
}
