//! Tests for ordinal day rendering

use crate::app::services::report_formatter::ordinal::{ordinal_suffix, ordinalize};

#[test]
fn test_ordinalize_first_days() {
    assert_eq!(ordinalize(1), "1st");
    assert_eq!(ordinalize(2), "2nd");
    assert_eq!(ordinalize(3), "3rd");
    assert_eq!(ordinalize(4), "4th");
}

#[test]
fn test_ordinalize_teens() {
    for day in 10..=14 {
        assert_eq!(ordinal_suffix(day), "th", "day {day}");
    }
    assert_eq!(ordinalize(11), "11th");
    assert_eq!(ordinalize(12), "12th");
    assert_eq!(ordinalize(13), "13th");
}

#[test]
fn test_ordinalize_twenties_and_thirties() {
    assert_eq!(ordinalize(21), "21st");
    assert_eq!(ordinalize(22), "22nd");
    assert_eq!(ordinalize(23), "23rd");
    assert_eq!(ordinalize(29), "29th");
    assert_eq!(ordinalize(30), "30th");
    assert_eq!(ordinalize(31), "31st");
}
