//! Daily Records Library
//!
//! A Rust library for computing the historical weather records of a single
//! calendar day at one observing station, and for rendering them into the
//! short text summary posted by the `daily-records` bot.
//!
//! This library provides tools for:
//! - Fetching the daily series of one calendar day across every archived year (RCC-ACIS)
//! - Normalizing archive value codes (missing, trace, accumulated, subsequent)
//! - Extracting temperature extremes and the rainiest day, with tie-aware year attribution
//! - Formatting the summary with climatological normals and monthly-record annotations
//! - Publishing the summary to a Mastodon instance (or stdout in debug mode)
//! - Comprehensive error handling that never publishes a partial report

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod acis_client;
        pub mod daily_report;
        pub mod publisher;
        pub mod record_extractor;
        pub mod report_formatter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use crate::app::models::{DailyRecordSet, Observation, Precipitation, RecordEntry};
pub use crate::config::Config;

/// Result type alias for daily record operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for fetching, extracting, formatting and publishing daily records
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request to a remote collaborator failed
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// JSON (de)serialization failed
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The archive answered with an error payload or a malformed row
    #[error("Archive response error: {message}")]
    ArchiveResponse { message: String },

    /// The archive returned no rows for the requested day
    #[error("No observations for station {station_id} on {month:02}-{day:02}")]
    EmptySeries {
        station_id: String,
        month: u32,
        day: u32,
    },

    /// Every year is missing the field a record is computed from
    #[error("Every observation is missing {metric}; no record can be computed")]
    MissingMetric { metric: String },

    /// A metric was passed to a computation that does not apply to it
    #[error("Cannot compute {operation} for {metric}")]
    UnsupportedMetric { metric: String, operation: String },

    /// A raw value code that is neither numeric nor a known archive marker
    #[error("Unrecognized {field} value '{value}' for {year}")]
    ValueNormalization {
        field: String,
        year: i32,
        value: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Publishing the report failed
    #[error("Publishing error: {message}")]
    Publishing { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an HTTP error with context
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create an archive response error
    pub fn archive_response(message: impl Into<String>) -> Self {
        Self::ArchiveResponse {
            message: message.into(),
        }
    }

    /// Create an empty series error
    pub fn empty_series(station_id: impl Into<String>, month: u32, day: u32) -> Self {
        Self::EmptySeries {
            station_id: station_id.into(),
            month,
            day,
        }
    }

    /// Create a missing metric error
    pub fn missing_metric(metric: impl Into<String>) -> Self {
        Self::MissingMetric {
            metric: metric.into(),
        }
    }

    /// Create an unsupported metric error
    pub fn unsupported_metric(metric: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::UnsupportedMetric {
            metric: metric.into(),
            operation: operation.into(),
        }
    }

    /// Create a value normalization error
    pub fn value_normalization(
        field: impl Into<String>,
        year: i32,
        value: impl Into<String>,
    ) -> Self {
        Self::ValueNormalization {
            field: field.into(),
            year,
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a publishing error
    pub fn publishing(message: impl Into<String>) -> Self {
        Self::Publishing {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// True for errors caused by the archive data itself rather than transport or setup
    pub fn is_upstream_data_error(&self) -> bool {
        matches!(
            self,
            Self::ArchiveResponse { .. }
                | Self::EmptySeries { .. }
                | Self::MissingMetric { .. }
                | Self::ValueNormalization { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "HTTP request failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<::config::ConfigError> for Error {
    fn from(error: ::config::ConfigError) -> Self {
        Self::Configuration {
            message: error.to_string(),
        }
    }
}
