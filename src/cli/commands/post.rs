//! Post command implementation
//!
//! Runs the full pipeline for the target date and publishes the report to
//! Mastodon, or prints it to stdout with `--debug`.

use super::shared::{load_configuration, log_config_source, setup_logging};
use crate::Result;
use crate::app::services::acis_client::AcisClient;
use crate::app::services::daily_report::{DailyReport, PublishedReport};
use crate::app::services::publisher::{ConsolePublisher, MastodonPublisher};
use crate::cli::args::PostArgs;
use tracing::info;

/// Run the post command
pub async fn run_post(args: PostArgs) -> Result<()> {
    args.common.validate()?;

    let date = args.common.target_date()?;
    let (config, config_file) = load_configuration(&args.common)?;
    setup_logging(&config.logging, args.common.quiet)?;
    log_config_source(config_file.as_deref());
    if !args.debug {
        config.validate_for_publishing()?;
    }

    info!(
        "Daily records for {} ({}) on {}",
        config.station.display_name(),
        config.station.id,
        date
    );

    let source = AcisClient::new(&config.archive)?;
    let report = DailyReport::new(&config, &source);

    let published = if args.debug {
        report.publish(date, &ConsolePublisher::stdout()).await?
    } else {
        let publisher = MastodonPublisher::new(&config.publisher, config.archive.timeout())?;
        report.publish(date, &publisher).await?
    };

    log_published(&published);
    Ok(())
}

fn log_published(published: &PublishedReport) {
    info!(
        "Report for {} published ({} characters, {} years considered)",
        published.report.date,
        published.report.text.chars().count(),
        published.report.records.years_considered
    );

    if let Some(url) = &published.receipt.url {
        info!("Status URL: {}", url);
    }
}
