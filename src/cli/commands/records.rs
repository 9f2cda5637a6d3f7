//! Records command implementation
//!
//! Fetches and extracts the records of one calendar day and prints them,
//! without fetching normals or publishing anything.

use super::shared::{load_configuration, log_config_source, setup_logging};
use crate::app::models::{DailyRecordSet, RecordEntry};
use crate::app::services::acis_client::AcisClient;
use crate::app::services::daily_report::DailyReport;
use crate::app::services::record_extractor::{ExtractionResult, ExtractionStats};
use crate::app::services::report_formatter::ordinalize;
use crate::cli::args::{OutputFormat, RecordsArgs};
use crate::config::Config;
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use colored::Colorize;
use serde::Serialize;
use std::fmt::Display;

/// JSON document printed by `records --format json`
#[derive(Debug, Serialize)]
pub struct RecordsOutput<'a> {
    pub station_id: &'a str,
    pub station_name: String,
    pub date: NaiveDate,
    pub records: &'a DailyRecordSet,
    pub stats: &'a ExtractionStats,
}

/// Run the records command
pub async fn run_records(args: RecordsArgs) -> Result<()> {
    args.common.validate()?;

    let date = args.common.target_date()?;
    let (config, config_file) = load_configuration(&args.common)?;
    setup_logging(&config.logging, args.common.quiet)?;
    log_config_source(config_file.as_deref());

    let source = AcisClient::new(&config.archive)?;
    let result = DailyReport::new(&config, &source)
        .fetch_records(date)
        .await?;

    match args.format {
        OutputFormat::Human => print!("{}", render_human(&config, date, &result)),
        OutputFormat::Json => println!("{}", render_json(&config, date, &result)?),
    }

    Ok(())
}

/// Render the records as JSON
pub fn render_json(config: &Config, date: NaiveDate, result: &ExtractionResult) -> Result<String> {
    let output = RecordsOutput {
        station_id: &config.station.id,
        station_name: config.station.display_name(),
        date,
        records: &result.records,
        stats: &result.stats,
    };

    serde_json::to_string_pretty(&output)
        .map_err(|e| Error::json("Failed to serialize records", e))
}

fn entry_line<T: Display>(label: &str, entry: &RecordEntry<T>) -> String {
    format!(
        "   • {:<14} {} ({})\n",
        label,
        entry.value.to_string().bold(),
        entry.display_years()
    )
}

/// Render the records as a human-readable summary
pub fn render_human(config: &Config, date: NaiveDate, result: &ExtractionResult) -> String {
    let records = &result.records;
    let stats = &result.stats;

    let mut text = format!(
        "\n{} {} {}\n",
        "Records for".bold(),
        format!("{} {}", date.format("%B"), ordinalize(date.day())).cyan(),
        format!("at {} ({})", config.station.display_name(), config.station.id).dimmed()
    );
    text.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    text.push_str(&format!("{}\n", "Highs".red()));
    text.push_str(&entry_line("Highest", &records.max_temp.highest));
    text.push_str(&entry_line("Lowest", &records.max_temp.lowest));

    text.push_str(&format!("{}\n", "Lows".blue()));
    text.push_str(&entry_line("Highest", &records.min_temp.highest));
    text.push_str(&entry_line("Lowest", &records.min_temp.lowest));

    text.push_str(&format!("{}\n", "Precipitation".green()));
    text.push_str(&entry_line("Most", &records.precipitation));

    text.push_str(&format!(
        "\n{} years considered ({} rows received, {} discarded)\n",
        records.years_considered, stats.rows_received, stats.rows_discarded
    ));

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Precipitation, TemperatureRecords};

    fn create_result() -> ExtractionResult {
        let records = DailyRecordSet {
            month: 6,
            day: 15,
            max_temp: TemperatureRecords {
                lowest: RecordEntry::new(65, [1995]),
                highest: RecordEntry::new(80, [1990, 2000]),
            },
            min_temp: TemperatureRecords {
                lowest: RecordEntry::new(50, [2000]),
                highest: RecordEntry::new(55, [1990, 1995]),
            },
            precipitation: RecordEntry::new(Precipitation::Measured(1.2), [2000]),
            years_considered: 3,
        };
        let mut stats = ExtractionStats::new(3, 0);
        stats.observations = 3;

        ExtractionResult { records, stats }
    }

    fn june_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
    }

    #[test]
    fn test_render_human() {
        colored::control::set_override(false);
        let text = render_human(&Config::default(), june_15(), &create_result());

        assert!(text.contains("Records for June 15th at San Francisco Downtown (047772)"));
        assert!(text.contains(&format!("{:<14} 80 (2000, 1990)", "Highest")));
        assert!(text.contains(&format!("{:<14} 1.20 (2000)", "Most")));
        assert!(text.contains("3 years considered (3 rows received, 0 discarded)"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&Config::default(), june_15(), &create_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["station_id"], "047772");
        assert_eq!(value["date"], "2023-06-15");
        assert_eq!(value["records"]["max_temp"]["highest"]["value"], 80);
        assert_eq!(
            value["records"]["max_temp"]["highest"]["years"],
            serde_json::json!([1990, 2000])
        );
        assert_eq!(
            value["records"]["precipitation"]["value"],
            serde_json::json!({"measured": 1.2})
        );
        assert_eq!(value["stats"]["rows_received"], 3);
    }
}
