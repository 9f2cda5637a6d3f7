//! Application constants for the daily records bot
//!
//! This module contains archive value codes, default endpoints, year windows
//! and known stations used throughout the application.

// =============================================================================
// Archive Value Codes
// =============================================================================

/// Value codes used by the RCC-ACIS daily archive
pub mod value_codes {
    /// Observation was not recorded
    pub const MISSING: &str = "M";

    /// Precipitation fell but was too small to measure
    pub const TRACE: &str = "T";

    /// Amount is included in a subsequent observation (no value for this day)
    pub const SUBSEQUENT: &str = "S";

    /// Trailing flag on a precipitation amount accumulated over several days
    pub const ACCUMULATED_SUFFIX: char = 'A';
}

/// Numeric amount (inches) substituted for a trace of precipitation
///
/// Sorts above a measured 0.00 and below the smallest measurable amount.
pub const TRACE_AMOUNT: f64 = 0.001;

/// Smallest precipitation amount the archive reports as measured (inches)
pub const MIN_MEASURABLE_PRECIPITATION: f64 = 0.01;

// =============================================================================
// Archive Endpoint and Year Windows
// =============================================================================

/// Base URL of the RCC-ACIS web services
pub const DEFAULT_ARCHIVE_BASE_URL: &str = "http://data.rcc-acis.org";

/// Station data endpoint, relative to the archive base URL
pub const STATION_DATA_ENDPOINT: &str = "StnData";

/// First year requested from the archive by default
pub const DEFAULT_START_YEAR: i32 = 1875;

/// Timeout applied to every archive and publisher request
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Window used for February 29
///
/// The archive answers February 29 queries for non-leap years with the
/// February 28 observation, so leap-day requests are narrowed to the years
/// for which the station's leap-day series is trustworthy.
pub mod leap_day {
    pub const MONTH: u32 = 2;
    pub const DAY: u32 = 29;
    pub const EARLIEST_YEAR: i32 = 1876;
    pub const LATEST_YEAR: i32 = 2020;
}

// =============================================================================
// Stations
// =============================================================================

/// Station reported on when none is configured
pub const DEFAULT_STATION_ID: &str = "047772";

/// Stations the bot has been run for
pub const KNOWN_STATIONS: &[(&str, &str)] = &[
    ("047772", "San Francisco Downtown"),
    ("040693", "Berkeley"),
    ("045123", "Los Gatos"),
    ("047965", "Santa Rosa"),
];

/// Look up the display name of a known station
pub fn known_station_name(station_id: &str) -> Option<&'static str> {
    KNOWN_STATIONS
        .iter()
        .find(|(id, _)| *id == station_id)
        .map(|(_, name)| *name)
}

// =============================================================================
// Publisher
// =============================================================================

/// Mastodon instance the bot posts to by default
pub const DEFAULT_INSTANCE_URL: &str = "https://botsin.space";

/// Status endpoint, relative to the instance URL
pub const STATUSES_ENDPOINT: &str = "api/v1/statuses";

/// Default status visibility
pub const DEFAULT_VISIBILITY: &str = "public";

/// Maximum status length accepted by a stock Mastodon instance
pub const MAX_STATUS_CHARS: usize = 500;

// =============================================================================
// Configuration
// =============================================================================

/// Prefix of environment variables overriding configuration values
pub const ENV_PREFIX: &str = "DAILY_RECORDS";

/// Separator between nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Directory (under the user config dir) holding the configuration file
pub const CONFIG_DIR_NAME: &str = "daily-records";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";
