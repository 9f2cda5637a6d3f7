//! HTTP client for the RCC-ACIS web services

use super::DataSource;
use super::request::{
    StnDataRequest, StnDataResponse, daily_series_request, normals_request, parse_daily_series,
    parse_normals,
};
use crate::app::models::{ClimateNormals, RawDailyRow, SeriesQuery};
use crate::config::ArchiveConfig;
use crate::constants::STATION_DATA_ENDPOINT;
use crate::{Error, Result};
use chrono::NaiveDate;
use reqwest::header::ACCEPT;
use tracing::{debug, info};

/// [`DataSource`] backed by the ACIS `StnData` endpoint
#[derive(Debug, Clone)]
pub struct AcisClient {
    client: reqwest::Client,
    base_url: String,
}

impl AcisClient {
    /// Create a client with the configured base URL and timeout
    pub fn new(config: &ArchiveConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("daily-records/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::http("Failed to build archive HTTP client", e))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the station data endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, STATION_DATA_ENDPOINT)
    }

    async fn post(&self, body: &StnDataRequest) -> Result<StnDataResponse> {
        let url = self.endpoint();
        debug!("POST {} for station {}", url, body.sid);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| Error::http(format!("Archive request to {} failed", url), e))?
            .error_for_status()
            .map_err(|e| Error::http("Archive returned an error status", e))?;

        let text = response
            .text()
            .await
            .map_err(|e| Error::http("Failed to read archive response", e))?;

        serde_json::from_str(&text).map_err(|e| Error::json("Malformed archive response", e))
    }
}

impl DataSource for AcisClient {
    async fn fetch_daily_series(&self, query: &SeriesQuery) -> Result<Vec<RawDailyRow>> {
        info!(
            "Fetching {:02}-{:02} for station {} ({}-{})",
            query.month, query.day, query.station_id, query.start_year, query.end_year
        );

        let response = self.post(&daily_series_request(query)).await?;
        let rows = parse_daily_series(response)?;

        debug!("Archive returned {} rows", rows.len());
        Ok(rows)
    }

    async fn fetch_normals(&self, station_id: &str, date: NaiveDate) -> Result<ClimateNormals> {
        info!("Fetching normals for station {} on {}", station_id, date);

        let response = self.post(&normals_request(station_id, date)).await?;
        parse_normals(response)
    }
}
