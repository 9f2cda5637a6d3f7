//! Data models for daily record processing
//!
//! This module contains the core data structures for representing raw archive
//! rows, normalized observations, extracted records and the reference values
//! (normals, monthly records) the report is annotated with.

use crate::constants::{MIN_MEASURABLE_PRECIPITATION, TRACE_AMOUNT};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// Archive Rows and Queries
// =============================================================================

/// One row of the daily series exactly as the archive returned it
///
/// Values are kept as text: the archive mixes numbers with single-letter
/// codes and the meaning of a code depends on the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDailyRow {
    pub date: NaiveDate,
    pub high_temp: String,
    pub low_temp: String,
    pub precipitation: String,
}

impl RawDailyRow {
    pub fn new(
        date: NaiveDate,
        high_temp: impl Into<String>,
        low_temp: impl Into<String>,
        precipitation: impl Into<String>,
    ) -> Self {
        Self {
            date,
            high_temp: high_temp.into(),
            low_temp: low_temp.into(),
            precipitation: precipitation.into(),
        }
    }
}

/// Request for one calendar day across a window of years at one station
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesQuery {
    pub station_id: String,
    pub month: u32,
    pub day: u32,
    /// First year requested (inclusive)
    pub start_year: i32,
    /// Last year requested (inclusive)
    pub end_year: i32,
}

impl SeriesQuery {
    /// Number of years covered by the query window
    pub fn year_span(&self) -> usize {
        (self.end_year - self.start_year + 1).max(0) as usize
    }
}

// =============================================================================
// Normalized Observations
// =============================================================================

/// A normalized precipitation reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precipitation {
    /// Precipitation fell but too little to measure
    Trace,
    /// Measured amount in inches
    Measured(f64),
}

impl Precipitation {
    /// Numeric amount used for ordering; a trace counts as [`TRACE_AMOUNT`]
    pub fn amount(&self) -> f64 {
        match self {
            Self::Trace => TRACE_AMOUNT,
            Self::Measured(amount) => *amount,
        }
    }

    pub fn is_trace(&self) -> bool {
        matches!(self, Self::Trace)
    }

    /// Total ordering by amount: 0.00 < trace < 0.01
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.amount().total_cmp(&other.amount())
    }

    /// True if the amount reached the smallest measurable value
    pub fn is_measurable(&self) -> bool {
        !self.is_trace() && self.amount() >= MIN_MEASURABLE_PRECIPITATION
    }
}

impl fmt::Display for Precipitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "Trace"),
            Self::Measured(amount) => write!(f, "{:.2}", amount),
        }
    }
}

/// One year's observation for the target calendar day
///
/// `None` marks a value the archive did not record. It is never a reading
/// and never takes part in a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub year: i32,
    pub high_temp: Option<i32>,
    pub low_temp: Option<i32>,
    pub precipitation: Option<Precipitation>,
}

impl Observation {
    pub fn new(
        year: i32,
        high_temp: Option<i32>,
        low_temp: Option<i32>,
        precipitation: Option<Precipitation>,
    ) -> Self {
        Self {
            year,
            high_temp,
            low_temp,
            precipitation,
        }
    }

    /// True if no field is missing
    pub fn is_complete(&self) -> bool {
        self.high_temp.is_some() && self.low_temp.is_some() && self.precipitation.is_some()
    }
}

/// Field of an observation a record is computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    HighTemp,
    LowTemp,
    Precipitation,
}

impl Metric {
    /// Short field name as used by the archive request
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::HighTemp => "maxt",
            Self::LowTemp => "mint",
            Self::Precipitation => "pcpn",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighTemp => write!(f, "daily high temperature"),
            Self::LowTemp => write!(f, "daily low temperature"),
            Self::Precipitation => write!(f, "precipitation"),
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// Render a set of record years most-recent-first
///
/// A single year renders bare (`"1998"`), several are comma separated
/// (`"2001, 1950"`).
pub fn display_years(years: &BTreeSet<i32>) -> String {
    years
        .iter()
        .rev()
        .map(|year| year.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// An extremal value and every year in which it occurred
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordEntry<T> {
    pub value: T,
    pub years: BTreeSet<i32>,
}

impl<T> RecordEntry<T> {
    pub fn new(value: T, years: impl IntoIterator<Item = i32>) -> Self {
        Self {
            value,
            years: years.into_iter().collect(),
        }
    }

    /// Years rendered most-recent-first
    pub fn display_years(&self) -> String {
        display_years(&self.years)
    }

    /// Latest year in which the value occurred
    pub fn most_recent_year(&self) -> Option<i32> {
        self.years.last().copied()
    }

    pub fn is_tied(&self) -> bool {
        self.years.len() > 1
    }
}

/// Lowest and highest value on record for one temperature field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureRecords {
    pub lowest: RecordEntry<i32>,
    pub highest: RecordEntry<i32>,
}

/// Rainiest day on record
///
/// Holds exactly one year unless the tie policy keeps every tied year.
pub type PrecipitationRecord = RecordEntry<Precipitation>;

/// Every record for one calendar day at one station
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecordSet {
    pub month: u32,
    pub day: u32,
    pub max_temp: TemperatureRecords,
    pub min_temp: TemperatureRecords,
    pub precipitation: PrecipitationRecord,
    /// Number of observations the records were computed from
    pub years_considered: usize,
}

// =============================================================================
// Reference Values
// =============================================================================

/// Climatological normal high and low for a date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateNormals {
    pub high: f64,
    pub low: f64,
}

/// All-time records for a whole month, maintained outside the daily series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Month number (1-12)
    pub month: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_high: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowest_low: Option<i32>,
}
