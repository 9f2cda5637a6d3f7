//! Fixed-template rendering of a day's records

use super::ordinal::ordinalize;
use crate::app::models::{
    ClimateNormals, DailyRecordSet, MonthlyRecord, Precipitation, RecordEntry,
};
use chrono::{Datelike, NaiveDate};

/// Marker appended to a daily record that equals the monthly record
pub const MONTHLY_RECORD_MARKER: &str = "*";

/// Everything the report template is filled from
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub records: &'a DailyRecordSet,
    pub normals: ClimateNormals,
    pub monthly_record: Option<&'a MonthlyRecord>,
    pub date: NaiveDate,
}

fn temperature(entry: &RecordEntry<i32>, marked: bool) -> String {
    let marker = if marked { MONTHLY_RECORD_MARKER } else { "" };
    format!("{}{} ({})", entry.value, marker, entry.display_years())
}

fn precipitation(entry: &RecordEntry<Precipitation>) -> String {
    match entry.value {
        Precipitation::Trace => format!("Trace ({})", entry.display_years()),
        Precipitation::Measured(_) => {
            format!("{} inches ({})", entry.value, entry.display_years())
        }
    }
}

/// Render the report text
///
/// The highest daily high is marked when it equals the monthly record high,
/// the lowest daily low when it equals the monthly record low. A legend line
/// follows when either marker is present.
pub fn render(input: &ReportInput<'_>) -> String {
    let records = input.records;
    let month_name = input.date.format("%B").to_string();

    let high_marked = input
        .monthly_record
        .and_then(|record| record.highest_high)
        .is_some_and(|high| high == records.max_temp.highest.value);
    let low_marked = input
        .monthly_record
        .and_then(|record| record.lowest_low)
        .is_some_and(|low| low == records.min_temp.lowest.value);

    let mut text = format!(
        "Daily Records for {} {}:\n\n",
        month_name,
        ordinalize(input.date.day())
    );

    text.push_str(&format!(
        "Highs\n{} / {} / Normal: {}\n\n",
        temperature(&records.max_temp.highest, high_marked),
        temperature(&records.max_temp.lowest, false),
        input.normals.high
    ));

    text.push_str(&format!(
        "Lows\n{} / {} / Normal: {}\n\n",
        temperature(&records.min_temp.highest, false),
        temperature(&records.min_temp.lowest, low_marked),
        input.normals.low
    ));

    text.push_str(&format!(
        "Most Precipitation\n{}",
        precipitation(&records.precipitation)
    ));

    if high_marked || low_marked {
        text.push_str(&format!(
            "\n\n{} Also the record for the month of {}",
            MONTHLY_RECORD_MARKER, month_name
        ));
    }

    text
}
