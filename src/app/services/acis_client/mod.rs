//! Observation archive access
//!
//! The [`DataSource`] trait is the seam between the record pipeline and the
//! remote archive. [`AcisClient`] implements it over the RCC-ACIS `StnData`
//! web service; tests substitute in-memory sources.
//!
//! - [`request`] - Request bodies and response parsing
//! - [`client`] - reqwest-based HTTP client

pub mod client;
pub mod request;

#[cfg(test)]
pub mod tests;

pub use client::AcisClient;
pub use request::{StnDataRequest, StnDataResponse};

use crate::Result;
use crate::app::models::{ClimateNormals, RawDailyRow, SeriesQuery};
use chrono::NaiveDate;
use std::future::Future;

/// Supplier of daily series and climatological normals
pub trait DataSource {
    /// Raw rows for one calendar day, one per year in the query window
    fn fetch_daily_series(
        &self,
        query: &SeriesQuery,
    ) -> impl Future<Output = Result<Vec<RawDailyRow>>> + Send;

    /// Normal high and low for a station on a date
    fn fetch_normals(
        &self,
        station_id: &str,
        date: NaiveDate,
    ) -> impl Future<Output = Result<ClimateNormals>> + Send;
}
