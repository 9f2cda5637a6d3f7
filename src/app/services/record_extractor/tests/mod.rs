//! Tests for the record extractor module
//!
//! Shared fixture builders live here; each component has its own test file.

pub mod normalization_tests;

use crate::app::models::{Observation, Precipitation, RawDailyRow, SeriesQuery};
use chrono::NaiveDate;

/// Create a raw archive row
pub fn create_raw_row(year: i32, month: u32, day: u32, high: &str, low: &str, pcpn: &str) -> RawDailyRow {
    RawDailyRow::new(
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        high,
        low,
        pcpn,
    )
}

/// Create a normalized observation with every field present
pub fn create_observation(year: i32, high: i32, low: i32, pcpn: f64) -> Observation {
    Observation::new(
        year,
        Some(high),
        Some(low),
        Some(Precipitation::Measured(pcpn)),
    )
}

/// Query for June 15 over the given years
pub fn create_june_15_query(start_year: i32, end_year: i32) -> SeriesQuery {
    SeriesQuery {
        station_id: "047772".to_string(),
        month: 6,
        day: 15,
        start_year,
        end_year,
    }
}

/// Three years of June 15 data with ties on both temperature fields
pub fn create_june_15_rows() -> Vec<RawDailyRow> {
    vec![
        create_raw_row(1990, 6, 15, "80", "55", "0.00"),
        create_raw_row(1995, 6, 15, "65", "55", "T"),
        create_raw_row(2000, 6, 15, "80", "50", "1.2"),
    ]
}
