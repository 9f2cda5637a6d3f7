//! Archive query window for a calendar day
//!
//! Builds the [`SeriesQuery`] for a target date and drops rows the archive
//! returns for a different day than the one asked for. February 29 is the
//! only day where that happens in practice: for non-leap years the archive
//! answers with the February 28 observation.

use crate::app::models::{RawDailyRow, SeriesQuery};
use crate::config::Config;
use crate::constants::leap_day;
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// True if the calendar day is February 29
pub fn is_leap_day(month: u32, day: u32) -> bool {
    month == leap_day::MONTH && day == leap_day::DAY
}

/// Build the archive query for the calendar day of `date`
///
/// The window runs from the configured start year to the configured end year
/// (or the target year). Leap-day queries are narrowed to the years in which
/// the archive's leap-day series is reliable.
pub fn series_query(config: &Config, date: NaiveDate) -> Result<SeriesQuery> {
    let (month, day) = (date.month(), date.day());
    let mut start_year = config.archive.start_year;
    let mut end_year = config.archive.end_year_for(date.year());

    if is_leap_day(month, day) {
        start_year = start_year.max(leap_day::EARLIEST_YEAR);
        end_year = end_year.min(leap_day::LATEST_YEAR);
        debug!(
            "Leap-day query narrowed to {}-{}",
            start_year, end_year
        );
    }

    if end_year < start_year {
        return Err(Error::configuration(format!(
            "Empty year window {}-{} for {:02}-{:02}",
            start_year, end_year, month, day
        )));
    }

    Ok(SeriesQuery {
        station_id: config.station.id.clone(),
        month,
        day,
        start_year,
        end_year,
    })
}

/// Keep only rows dated on the queried calendar day
///
/// Returns the kept rows and the number of rows discarded.
pub fn discard_aliased_rows(rows: Vec<RawDailyRow>, query: &SeriesQuery) -> (Vec<RawDailyRow>, usize) {
    let total = rows.len();
    let kept: Vec<RawDailyRow> = rows
        .into_iter()
        .filter(|row| {
            let matches = row.date.month() == query.month && row.date.day() == query.day;
            if !matches {
                debug!(
                    "Discarding row dated {} (queried {:02}-{:02})",
                    row.date, query.month, query.day
                );
            }
            matches
        })
        .collect();

    let discarded = total - kept.len();
    (kept, discarded)
}
