//! Value normalization for raw archive rows
//!
//! The archive reports every value as text. Besides plain numbers it uses a
//! handful of codes:
//!
//! - `M` - missing, for any field
//! - `T` - trace of precipitation
//! - `S` - precipitation included in a subsequent observation (treated as missing)
//! - trailing `A` on a precipitation amount - accumulated over several days
//!
//! Anything else that does not parse is an error, so new archive quirks
//! surface instead of being silently coerced.

use crate::app::models::{Metric, Observation, Precipitation, RawDailyRow};
use crate::constants::value_codes;
use crate::{Error, Result};
use chrono::Datelike;

/// Normalize a raw temperature value
///
/// # Arguments
///
/// * `raw` - Value as returned by the archive
/// * `year` - Year of the observation, for error context
/// * `metric` - Field being normalized, for error context
///
/// # Returns
///
/// `None` for a missing value, the integer temperature otherwise
pub fn normalize_temperature(raw: &str, year: i32, metric: Metric) -> Result<Option<i32>> {
    let value = raw.trim();

    if value == value_codes::MISSING {
        return Ok(None);
    }

    value
        .parse::<i32>()
        .map(Some)
        .map_err(|_| Error::value_normalization(metric.to_string(), year, raw))
}

/// Normalize a raw precipitation value
///
/// A trailing accumulation flag is stripped before interpretation. Trace
/// becomes [`Precipitation::Trace`]; missing and subsequent codes become
/// `None`.
pub fn normalize_precipitation(raw: &str, year: i32) -> Result<Option<Precipitation>> {
    let trimmed = raw.trim();
    let value = trimmed
        .strip_suffix(value_codes::ACCUMULATED_SUFFIX)
        .unwrap_or(trimmed);

    match value {
        value_codes::TRACE => Ok(Some(Precipitation::Trace)),
        value_codes::MISSING | value_codes::SUBSEQUENT => Ok(None),
        _ => {
            let amount = value.parse::<f64>().map_err(|_| {
                Error::value_normalization(Metric::Precipitation.to_string(), year, raw)
            })?;

            // Rejects NaN and infinities spelled out in the text
            if !amount.is_finite() || amount < 0.0 {
                return Err(Error::value_normalization(
                    Metric::Precipitation.to_string(),
                    year,
                    raw,
                ));
            }

            Ok(Some(Precipitation::Measured(amount)))
        }
    }
}

/// Normalize one raw archive row into an [`Observation`]
pub fn normalize_row(row: &RawDailyRow) -> Result<Observation> {
    let year = row.date.year();

    Ok(Observation::new(
        year,
        normalize_temperature(&row.high_temp, year, Metric::HighTemp)?,
        normalize_temperature(&row.low_temp, year, Metric::LowTemp)?,
        normalize_precipitation(&row.precipitation, year)?,
    ))
}

/// Normalize every row, failing on the first unrecognized value
pub fn normalize_rows(rows: &[RawDailyRow]) -> Result<Vec<Observation>> {
    rows.iter().map(normalize_row).collect()
}
