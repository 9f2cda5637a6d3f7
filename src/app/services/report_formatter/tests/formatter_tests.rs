//! Tests for the report template

use super::*;
use crate::app::models::MonthlyRecord;
use crate::app::services::report_formatter::format_report;

#[test]
fn test_format_report_june_15() {
    let text = format_report(&create_june_15_records(), create_normals(), None, june_15());

    let expected = "Daily Records for June 15th:\n\
                    \n\
                    Highs\n\
                    80 (2000, 1990) / 65 (1995) / Normal: 77\n\
                    \n\
                    Lows\n\
                    55 (1995, 1990) / 50 (2000) / Normal: 54\n\
                    \n\
                    Most Precipitation\n\
                    1.20 inches (2000)";
    assert_eq!(text, expected);
}

#[test]
fn test_format_report_fractional_normals() {
    let normals = ClimateNormals {
        high: 68.4,
        low: 53.9,
    };
    let text = format_report(&create_june_15_records(), normals, None, june_15());

    assert!(text.contains("65 (1995) / Normal: 68.4\n"));
    assert!(text.contains("50 (2000) / Normal: 53.9\n"));
}

#[test]
fn test_format_report_marks_monthly_record_high() {
    let monthly = MonthlyRecord {
        month: 6,
        highest_high: Some(80),
        lowest_low: Some(40),
    };
    let text = format_report(
        &create_june_15_records(),
        create_normals(),
        Some(&monthly),
        june_15(),
    );

    assert!(text.contains("Highs\n80* (2000, 1990) / 65 (1995)"));
    assert!(text.contains("Lows\n55 (1995, 1990) / 50 (2000)"));
    assert!(text.ends_with("\n\n* Also the record for the month of June"));
}

#[test]
fn test_format_report_marks_monthly_record_low() {
    let monthly = MonthlyRecord {
        month: 6,
        highest_high: None,
        lowest_low: Some(50),
    };
    let text = format_report(
        &create_june_15_records(),
        create_normals(),
        Some(&monthly),
        june_15(),
    );

    assert!(text.contains("Highs\n80 (2000, 1990)"));
    assert!(text.contains("/ 50* (2000) / Normal: 54"));
    assert!(text.ends_with("* Also the record for the month of June"));
}

#[test]
fn test_format_report_no_legend_without_match() {
    let monthly = MonthlyRecord {
        month: 6,
        highest_high: Some(103),
        lowest_low: Some(41),
    };
    let text = format_report(
        &create_june_15_records(),
        create_normals(),
        Some(&monthly),
        june_15(),
    );

    assert!(!text.contains('*'));
    assert!(text.ends_with("1.20 inches (2000)"));
}

#[test]
fn test_format_report_trace_precipitation() {
    let mut records = create_june_15_records();
    records.precipitation = RecordEntry::new(Precipitation::Trace, [1995]);

    let text = format_report(&records, create_normals(), None, june_15());
    assert!(text.ends_with("Most Precipitation\nTrace (1995)"));
}

#[test]
fn test_format_report_header_ordinals() {
    let records = create_june_15_records();
    let cases = [
        (NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), "Daily Records for February 29th:"),
        (NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(), "Daily Records for September 1st:"),
        (NaiveDate::from_ymd_opt(2023, 12, 22).unwrap(), "Daily Records for December 22nd:"),
        (NaiveDate::from_ymd_opt(2023, 3, 13).unwrap(), "Daily Records for March 13th:"),
    ];

    for (date, header) in cases {
        let text = format_report(&records, create_normals(), None, date);
        assert!(text.starts_with(header), "{text}");
    }
}
