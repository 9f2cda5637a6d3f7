//! Record extraction for one calendar day
//!
//! This module turns the raw daily series returned by the archive (one row
//! per year for a fixed month and day) into the day's records: highest and
//! lowest daily high, highest and lowest daily low, and the rainiest day.
//!
//! # Architecture
//!
//! - [`window`] - Archive query window, leap-day narrowing and aliased-row removal
//! - [`normalization`] - Archive value codes to typed, optional values
//! - [`extraction`] - Tie-aware extremum computation per field
//! - [`stats`] - Counters for logging
//!
//! # Pipeline
//!
//! 1. **Window**: drop rows dated on a different day than queried
//! 2. **Normalization**: parse temperatures and precipitation, mapping codes to `None`/trace
//! 3. **Extraction**: compute each record from the observations that have its field
//!
//! The whole pipeline is pure: identical rows always give identical records.
//!
//! # Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daily_records::app::models::{RawDailyRow, SeriesQuery};
//! use daily_records::app::services::record_extractor::RecordExtractor;
//! use daily_records::config::PrecipitationTies;
//!
//! # fn example() -> daily_records::Result<()> {
//! let query = SeriesQuery {
//!     station_id: "047772".to_string(),
//!     month: 6,
//!     day: 15,
//!     start_year: 1990,
//!     end_year: 1991,
//! };
//! let rows = vec![
//!     RawDailyRow::new(NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(), "80", "55", "0.00"),
//!     RawDailyRow::new(NaiveDate::from_ymd_opt(1991, 6, 15).unwrap(), "72", "51", "T"),
//! ];
//!
//! let result = RecordExtractor::new(PrecipitationTies::MostRecent).extract(&query, rows)?;
//! assert_eq!(result.records.max_temp.highest.value, 80);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod extraction;
pub mod normalization;
pub mod stats;
pub mod window;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use extraction::{Extreme, extract_records, extreme_record};
pub use normalization::{normalize_precipitation, normalize_row, normalize_temperature};
pub use stats::ExtractionStats;
pub use window::{discard_aliased_rows, is_leap_day, series_query};

use crate::app::models::{DailyRecordSet, RawDailyRow, SeriesQuery};
use crate::config::PrecipitationTies;
use crate::{Error, Result};
use tracing::{debug, info};

/// Records for one day plus the statistics of the series they came from
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub records: DailyRecordSet,
    pub stats: ExtractionStats,
}

/// Computes the records of one calendar day from raw archive rows
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordExtractor {
    precipitation_ties: PrecipitationTies,
}

impl RecordExtractor {
    pub fn new(precipitation_ties: PrecipitationTies) -> Self {
        Self { precipitation_ties }
    }

    /// Run window filtering, normalization and extraction over `rows`
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySeries`] if no row remains for the queried day
    /// - [`Error::ValueNormalization`] on an unrecognized value code
    /// - [`Error::MissingMetric`] if a field is missing in every year
    pub fn extract(&self, query: &SeriesQuery, rows: Vec<RawDailyRow>) -> Result<ExtractionResult> {
        let rows_received = rows.len();
        let (rows, rows_discarded) = discard_aliased_rows(rows, query);

        if rows_discarded > 0 {
            debug!(
                "Discarded {} rows not dated {:02}-{:02}",
                rows_discarded, query.month, query.day
            );
        }

        if rows.is_empty() {
            return Err(Error::empty_series(
                query.station_id.clone(),
                query.month,
                query.day,
            ));
        }

        let observations = normalization::normalize_rows(&rows)?;

        let mut stats = ExtractionStats::new(rows_received, rows_discarded);
        stats.record_observations(&observations);

        let records = extract_records(
            &observations,
            query.month,
            query.day,
            self.precipitation_ties,
        )?;

        info!("{}", stats.summary());

        Ok(ExtractionResult { records, stats })
    }
}
