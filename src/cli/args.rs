//! Command-line argument definitions for the daily records bot
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the daily records bot
///
/// Computes the all-time weather records of one calendar day at one station
/// and publishes them as a short summary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "daily-records",
    version,
    about = "Post the historical weather records for today's date at a weather station",
    long_about = "Fetches every archived observation of one calendar day at a weather station \
                  from RCC-ACIS, extracts the record highs, lows and rainiest day, and posts \
                  the summary with the day's climatological normals to Mastodon."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Build the report and publish it
    Post(PostArgs),
    /// Print the extracted records without publishing
    Records(RecordsArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct CommonArgs {
    /// Calendar day to report on
    ///
    /// Defaults to today in local time. Only the month and day select the
    /// series; the year bounds the archive window unless --end-year is set.
    #[arg(
        short = 'd',
        long = "date",
        value_name = "YYYY-MM-DD",
        help = "Date to report on (default: today)"
    )]
    pub date: Option<String>,

    /// Archive station identifier, e.g. 047772 for San Francisco Downtown
    #[arg(
        short = 's',
        long = "station",
        value_name = "ID",
        help = "Station identifier"
    )]
    pub station: Option<String>,

    /// First year of the archive window
    #[arg(long = "start-year", value_name = "YEAR", help = "First archive year")]
    pub start_year: Option<i32>,

    /// Last year of the archive window
    #[arg(long = "end-year", value_name = "YEAR", help = "Last archive year")]
    pub end_year: Option<i32>,

    /// Path to configuration file
    ///
    /// TOML file with station, archive, report and publisher sections.
    /// Defaults to the user configuration directory when present.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the post command
#[derive(Debug, Clone, Default, Parser)]
pub struct PostArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the report to stdout instead of posting it
    #[arg(long = "debug", help = "Print the report instead of posting it")]
    pub debug: bool,
}

/// Arguments for the records command
#[derive(Debug, Clone, Default, Parser)]
pub struct RecordsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format for the records
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the records"
    )]
    pub format: OutputFormat,
}

/// Output format options for the records command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON format for scripting
    Json,
}

impl CommonArgs {
    /// Validate the shared arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(station) = &self.station {
            if station.trim().is_empty() {
                return Err(Error::configuration("Station identifier cannot be empty"));
            }
        }

        if let (Some(start_year), Some(end_year)) = (self.start_year, self.end_year) {
            if end_year < start_year {
                return Err(Error::configuration(format!(
                    "End year {} is before start year {}",
                    end_year, start_year
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        self.target_date()?;
        Ok(())
    }

    /// The date to report on, today in local time if not given
    pub fn target_date(&self) -> Result<NaiveDate> {
        match &self.date {
            Some(date) => NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
                .map_err(|e| Error::datetime_parsing(format!("Invalid date '{}'", date), e)),
            None => Ok(chrono::Local::now().date_naive()),
        }
    }

    /// Log level requested by `-q` or `-v`, if either was given
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
