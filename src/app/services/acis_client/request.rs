//! RCC-ACIS `StnData` request and response bodies
//!
//! The same endpoint serves both the daily series (a date range with one
//! value per day) and the climatological normals (a single date with
//! `normal` elements). Response cells are usually strings but numbers are
//! accepted too.

use crate::app::models::{ClimateNormals, Metric, RawDailyRow, SeriesQuery};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One requested element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementSpec {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<[u8; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<&'static str>,
}

impl ElementSpec {
    /// Daily value repeated once a year (`interval` of one year)
    pub fn yearly(metric: Metric) -> Self {
        Self {
            name: metric.element_name(),
            interval: Some([1, 0, 0]),
            duration: Some("dly"),
            normal: None,
        }
    }

    /// Climatological normal for the element
    pub fn normal(metric: Metric) -> Self {
        Self {
            name: metric.element_name(),
            interval: None,
            duration: None,
            normal: Some("1"),
        }
    }
}

/// Body POSTed to `StnData`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StnDataRequest {
    pub sid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub elems: Vec<ElementSpec>,
}

/// Response of `StnData`; the archive reports failures in `error`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StnDataResponse {
    #[serde(default)]
    pub data: Vec<Vec<Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

fn format_day(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Request for the daily series of a calendar day across the query window
pub fn daily_series_request(query: &SeriesQuery) -> StnDataRequest {
    StnDataRequest {
        sid: query.station_id.clone(),
        sdate: Some(format_day(query.start_year, query.month, query.day)),
        edate: Some(format_day(query.end_year, query.month, query.day)),
        date: None,
        elems: vec![
            ElementSpec::yearly(Metric::HighTemp),
            ElementSpec::yearly(Metric::LowTemp),
            ElementSpec::yearly(Metric::Precipitation),
        ],
    }
}

/// Request for the normal high and low of a date
pub fn normals_request(station_id: &str, date: NaiveDate) -> StnDataRequest {
    StnDataRequest {
        sid: station_id.to_string(),
        sdate: None,
        edate: None,
        date: Some(date.format("%Y-%m-%d").to_string()),
        elems: vec![
            ElementSpec::normal(Metric::HighTemp),
            ElementSpec::normal(Metric::LowTemp),
        ],
    }
}

fn check_error(response: &StnDataResponse) -> Result<()> {
    match &response.error {
        Some(message) => Err(Error::archive_response(message.clone())),
        None => Ok(()),
    }
}

fn cell_text(row: &[Value], index: usize) -> Result<String> {
    match row.get(index) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(Value::Number(number)) => Ok(number.to_string()),
        Some(other) => Err(Error::archive_response(format!(
            "Unexpected value {} in column {}",
            other, index
        ))),
        None => Err(Error::archive_response(format!(
            "Row has {} columns, expected at least {}",
            row.len(),
            index + 1
        ))),
    }
}

/// Convert a daily series response into raw rows
pub fn parse_daily_series(response: StnDataResponse) -> Result<Vec<RawDailyRow>> {
    check_error(&response)?;

    response
        .data
        .iter()
        .map(|row| {
            let date_text = cell_text(row, 0)?;
            let date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d").map_err(|e| {
                Error::datetime_parsing(format!("Invalid archive date '{}'", date_text), e)
            })?;

            Ok(RawDailyRow {
                date,
                high_temp: cell_text(row, 1)?,
                low_temp: cell_text(row, 2)?,
                precipitation: cell_text(row, 3)?,
            })
        })
        .collect()
}

fn parse_normal(text: &str, metric: Metric) -> Result<f64> {
    text.trim().parse::<f64>().map_err(|_| {
        Error::archive_response(format!("No usable normal {} ('{}')", metric, text))
    })
}

/// Convert a normals response into the normal high and low
pub fn parse_normals(response: StnDataResponse) -> Result<ClimateNormals> {
    check_error(&response)?;

    let row = response
        .data
        .first()
        .ok_or_else(|| Error::archive_response("Normals response has no data"))?;

    Ok(ClimateNormals {
        high: parse_normal(&cell_text(row, 1)?, Metric::HighTemp)?,
        low: parse_normal(&cell_text(row, 2)?, Metric::LowTemp)?,
    })
}
