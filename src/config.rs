//! Configuration management and validation.
//!
//! Provides the configuration for one bot deployment: which station to
//! report on, the archive window, report annotations, publisher credentials
//! and logging. Configuration is layered: built-in defaults, then an optional
//! TOML file, then `DAILY_RECORDS__*` environment variables, then CLI
//! overrides applied by the command layer.

use crate::app::models::MonthlyRecord;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_ARCHIVE_BASE_URL, DEFAULT_INSTANCE_URL,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_START_YEAR, DEFAULT_STATION_ID, DEFAULT_VISIBILITY,
    ENV_PREFIX, ENV_SEPARATOR, known_station_name,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub station: StationConfig,
    pub archive: ArchiveConfig,
    pub report: ReportConfig,
    pub publisher: PublisherConfig,
    pub logging: LoggingConfig,
}

/// Station the records are computed for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    /// Archive station identifier (e.g. "047772")
    pub id: String,

    /// Display name used in logs; looked up from the known stations if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_STATION_ID.to_string(),
            name: None,
        }
    }
}

impl StationConfig {
    /// Name for logging: configured name, known station name, or the id
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| known_station_name(&self.id).map(str::to_string))
            .unwrap_or_else(|| self.id.clone())
    }
}

/// Remote archive settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Base URL of the RCC-ACIS services
    pub base_url: String,

    /// First year requested (inclusive)
    pub start_year: i32,

    /// Last year requested (inclusive); the target date's year if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ARCHIVE_BASE_URL.to_string(),
            start_year: DEFAULT_START_YEAR,
            end_year: None,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ArchiveConfig {
    /// Last year to request for a report on a date in `target_year`
    pub fn end_year_for(&self, target_year: i32) -> i32 {
        self.end_year.unwrap_or(target_year)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// How a tie for the rainiest day is attributed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecipitationTies {
    /// Keep the single year that ranks first among the tied years: highest
    /// low temperature, then highest high temperature, then latest year
    #[default]
    FirstYearWins,
    /// Keep only the most recent of the tied years
    MostRecent,
    /// Keep every tied year, like the temperature records
    All,
}

/// Report content settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Year attribution policy for the rainiest day
    pub precipitation_ties: PrecipitationTies,

    /// All-time monthly records used to flag daily records with an asterisk
    pub monthly_records: Vec<MonthlyRecord>,
}

impl ReportConfig {
    /// Monthly record thresholds for a month, if configured
    pub fn monthly_record(&self, month: u32) -> Option<&MonthlyRecord> {
        self.monthly_records.iter().find(|record| record.month == month)
    }
}

/// Mastodon publisher settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    /// Base URL of the Mastodon instance
    pub instance_url: String,

    /// Application access token; required to publish
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Status visibility (public, unlisted, private, direct)
    pub visibility: String,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            instance_url: DEFAULT_INSTANCE_URL.to_string(),
            access_token: None,
            visibility: DEFAULT_VISIBILITY.to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

const VISIBILITIES: &[&str] = &["public", "unlisted", "private", "direct"];

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

impl Config {
    /// Default configuration file location (`<config dir>/daily-records/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from defaults, an optional file and the environment
    ///
    /// A file passed explicitly must exist. Environment variables use the
    /// `DAILY_RECORDS__` prefix with `__` between nested keys, for example
    /// `DAILY_RECORDS__PUBLISHER__ACCESS_TOKEN`.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let defaults = ::config::Config::try_from(&Config::default())?;
        let mut builder = ::config::Config::builder().add_source(defaults);

        if let Some(path) = config_file {
            debug!("Reading configuration file {}", path.display());
            builder = builder.add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR),
        );

        let config: Config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Override the station id
    pub fn with_station(mut self, station_id: impl Into<String>) -> Self {
        self.station.id = station_id.into();
        self.station.name = None;
        self
    }

    /// Override the archive year window
    pub fn with_year_window(mut self, start_year: Option<i32>, end_year: Option<i32>) -> Self {
        if let Some(start_year) = start_year {
            self.archive.start_year = start_year;
        }
        if end_year.is_some() {
            self.archive.end_year = end_year;
        }
        self
    }

    /// Override the precipitation tie policy
    pub fn with_precipitation_ties(mut self, policy: PrecipitationTies) -> Self {
        self.report.precipitation_ties = policy;
        self
    }

    /// Validate settings needed to fetch and format a report
    pub fn validate(&self) -> Result<()> {
        if self.station.id.trim().is_empty() {
            return Err(Error::configuration("Station id cannot be empty"));
        }

        if self.archive.base_url.trim().is_empty() {
            return Err(Error::configuration("Archive base URL cannot be empty"));
        }

        if let Some(end_year) = self.archive.end_year {
            if end_year < self.archive.start_year {
                return Err(Error::configuration(format!(
                    "Archive end year {} is before start year {}",
                    end_year, self.archive.start_year
                )));
            }
        }

        if self.archive.timeout_secs == 0 {
            return Err(Error::configuration(
                "Archive timeout must be greater than 0 seconds",
            ));
        }

        for record in &self.report.monthly_records {
            if !(1..=12).contains(&record.month) {
                return Err(Error::configuration(format!(
                    "Monthly record month {} is not between 1 and 12",
                    record.month
                )));
            }
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}'. Expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Validate settings needed to post to Mastodon, on top of [`Config::validate`]
    pub fn validate_for_publishing(&self) -> Result<()> {
        self.validate()?;

        if self.publisher.instance_url.trim().is_empty() {
            return Err(Error::configuration("Publisher instance URL cannot be empty"));
        }

        match &self.publisher.access_token {
            Some(token) if !token.trim().is_empty() => {}
            _ => {
                return Err(Error::configuration(format!(
                    "No publisher access token configured (set publisher.access_token or {}{}PUBLISHER{}ACCESS_TOKEN)",
                    ENV_PREFIX, ENV_SEPARATOR, ENV_SEPARATOR
                )));
            }
        }

        if !VISIBILITIES.contains(&self.publisher.visibility.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown status visibility '{}'. Expected one of: {}",
                self.publisher.visibility,
                VISIBILITIES.join(", ")
            )));
        }

        Ok(())
    }
}
