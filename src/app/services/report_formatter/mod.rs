//! Report formatting for a day's records
//!
//! Renders a [`DailyRecordSet`] into the text posted by the bot:
//!
//! ```text
//! Daily Records for June 15th:
//!
//! Highs
//! 80 (2000, 1990) / 65 (1995) / Normal: 77
//!
//! Lows
//! 55 (1995, 1990) / 50 (2000) / Normal: 54
//!
//! Most Precipitation
//! 1.20 inches (2000)
//! ```
//!
//! Formatting is pure and trusts its input: records always carry at least
//! one year, which the extractor guarantees.

pub mod formatter;
pub mod ordinal;

#[cfg(test)]
pub mod tests;

pub use formatter::{MONTHLY_RECORD_MARKER, ReportInput, render};
pub use ordinal::{ordinal_suffix, ordinalize};

use crate::app::models::{ClimateNormals, DailyRecordSet, MonthlyRecord};
use chrono::NaiveDate;

/// Render the report for `date`
pub fn format_report(
    records: &DailyRecordSet,
    normals: ClimateNormals,
    monthly_record: Option<&MonthlyRecord>,
    date: NaiveDate,
) -> String {
    render(&ReportInput {
        records,
        normals,
        monthly_record,
        date,
    })
}
