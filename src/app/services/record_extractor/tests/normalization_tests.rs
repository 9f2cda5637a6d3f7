//! Tests for archive value normalization

use super::*;
use crate::Error;
use crate::app::models::Metric;
use crate::app::services::record_extractor::normalization::{
    normalize_precipitation, normalize_row, normalize_rows, normalize_temperature,
};

#[test]
fn test_normalize_temperature_values() {
    assert_eq!(normalize_temperature("80", 1990, Metric::HighTemp).unwrap(), Some(80));
    assert_eq!(normalize_temperature("-4", 1990, Metric::LowTemp).unwrap(), Some(-4));
    assert_eq!(normalize_temperature(" 62 ", 1990, Metric::LowTemp).unwrap(), Some(62));
    assert_eq!(normalize_temperature("M", 1990, Metric::HighTemp).unwrap(), None);
}

#[test]
fn test_normalize_temperature_rejects_unknown_codes() {
    let error = normalize_temperature("X", 1982, Metric::HighTemp).unwrap_err();
    match error {
        Error::ValueNormalization { field, year, value } => {
            assert_eq!(field, "daily high temperature");
            assert_eq!(year, 1982);
            assert_eq!(value, "X");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Fractional temperatures are not part of the daily series format
    assert!(normalize_temperature("61.5", 1982, Metric::HighTemp).is_err());
    assert!(normalize_temperature("", 1982, Metric::HighTemp).is_err());
}

#[test]
fn test_normalize_precipitation_codes() {
    assert_eq!(
        normalize_precipitation("1.20", 2000).unwrap(),
        Some(Precipitation::Measured(1.2))
    );
    assert_eq!(
        normalize_precipitation("0.00", 2000).unwrap(),
        Some(Precipitation::Measured(0.0))
    );
    assert_eq!(normalize_precipitation("T", 2000).unwrap(), Some(Precipitation::Trace));
    assert_eq!(normalize_precipitation("M", 2000).unwrap(), None);
    // February 6th 1982 at the default station carries an "S"
    assert_eq!(normalize_precipitation("S", 1982).unwrap(), None);
}

#[test]
fn test_normalize_precipitation_strips_accumulation_flag() {
    assert_eq!(
        normalize_precipitation("0.45A", 1950).unwrap(),
        Some(Precipitation::Measured(0.45))
    );
    assert_eq!(normalize_precipitation("TA", 1950).unwrap(), Some(Precipitation::Trace));
    assert_eq!(normalize_precipitation("MA", 1950).unwrap(), None);
}

#[test]
fn test_normalize_precipitation_rejects_anomalies() {
    for raw in ["A", "Q", "1.2.3", "-0.50", "NaN", "inf", "0.1AA"] {
        assert!(
            normalize_precipitation(raw, 1950).is_err(),
            "expected '{raw}' to be rejected"
        );
    }
}

#[test]
fn test_trace_sorts_between_zero_and_measurable() {
    let zero = Precipitation::Measured(0.0);
    let trace = Precipitation::Trace;
    let hundredth = Precipitation::Measured(0.01);

    assert_eq!(zero.total_cmp(&trace), std::cmp::Ordering::Less);
    assert_eq!(trace.total_cmp(&hundredth), std::cmp::Ordering::Less);
    assert!(!trace.is_measurable());
    assert!(hundredth.is_measurable());
}

#[test]
fn test_normalize_row() {
    let row = create_raw_row(1995, 6, 15, "65", "M", "T");
    let observation = normalize_row(&row).unwrap();

    assert_eq!(observation.year, 1995);
    assert_eq!(observation.high_temp, Some(65));
    assert_eq!(observation.low_temp, None);
    assert_eq!(observation.precipitation, Some(Precipitation::Trace));
    assert!(!observation.is_complete());
}

#[test]
fn test_normalize_rows_fails_on_first_anomaly() {
    let rows = vec![
        create_raw_row(1990, 6, 15, "80", "55", "0.00"),
        create_raw_row(1991, 6, 15, "80", "55", "Z"),
    ];

    let error = normalize_rows(&rows).unwrap_err();
    assert!(error.is_upstream_data_error());
    assert!(error.to_string().contains("1991"));
}
