//! Tests for the daily report pipeline
//!
//! In-memory collaborators stand in for the archive and the publisher.


use crate::app::models::{ClimateNormals, RawDailyRow, SeriesQuery};
use crate::app::services::acis_client::DataSource;
use crate::app::services::publisher::{PublishReceipt, Publisher};
use crate::{Error, Result};
use chrono::NaiveDate;
use std::sync::Mutex;

/// Data source answering from fixed rows
pub struct FakeSource {
    pub rows: Vec<RawDailyRow>,
    pub normals: Option<ClimateNormals>,
    pub queries: Mutex<Vec<SeriesQuery>>,
}

impl FakeSource {
    pub fn new(rows: Vec<RawDailyRow>) -> Self {
        Self {
            rows,
            normals: Some(ClimateNormals {
                high: 77.0,
                low: 54.0,
            }),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn without_normals(mut self) -> Self {
        self.normals = None;
        self
    }

    pub fn recorded_queries(&self) -> Vec<SeriesQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl DataSource for FakeSource {
    async fn fetch_daily_series(&self, query: &SeriesQuery) -> Result<Vec<RawDailyRow>> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.rows.clone())
    }

    async fn fetch_normals(&self, _station_id: &str, _date: NaiveDate) -> Result<ClimateNormals> {
        self.normals
            .ok_or_else(|| Error::archive_response("normals unavailable"))
    }
}

/// Publisher that keeps what it was given
#[derive(Default)]
pub struct RecordingPublisher {
    pub published: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingPublisher {
    pub fn failing() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.published.lock().unwrap().clone()
    }
}

impl Publisher for RecordingPublisher {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn publish(&self, text: &str) -> Result<PublishReceipt> {
        if self.fail {
            return Err(Error::publishing("instance unavailable"));
        }
        self.published.lock().unwrap().push(text.to_string());
        Ok(PublishReceipt {
            id: Some("1".to_string()),
            url: None,
        })
    }
}

/// The June 15 rows used across the pipeline tests
pub fn create_june_15_rows() -> Vec<RawDailyRow> {
    vec![
        create_row(1990, 6, 15, "80", "55", "0.00"),
        create_row(1995, 6, 15, "65", "55", "T"),
        create_row(2000, 6, 15, "80", "50", "1.2"),
    ]
}

pub fn create_row(
    year: i32,
    month: u32,
    day: u32,
    high: &str,
    low: &str,
    precipitation: &str,
) -> RawDailyRow {
    RawDailyRow::new(
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        high,
        low,
        precipitation,
    )
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
