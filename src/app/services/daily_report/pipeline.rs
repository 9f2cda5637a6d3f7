//! Sequential fetch, extract, format and publish

use crate::Result;
use crate::app::models::{ClimateNormals, DailyRecordSet};
use crate::app::services::acis_client::DataSource;
use crate::app::services::publisher::{PublishReceipt, Publisher};
use crate::app::services::record_extractor::{
    ExtractionResult, ExtractionStats, RecordExtractor, series_query,
};
use crate::app::services::report_formatter::format_report;
use crate::config::Config;
use chrono::NaiveDate;
use tracing::{debug, info};

/// A fully rendered report that has not been published yet
#[derive(Debug, Clone)]
pub struct ComposedReport {
    pub date: NaiveDate,
    pub records: DailyRecordSet,
    pub stats: ExtractionStats,
    pub normals: ClimateNormals,
    pub text: String,
}

/// A report together with the publisher's receipt
#[derive(Debug, Clone)]
pub struct PublishedReport {
    pub report: ComposedReport,
    pub receipt: PublishReceipt,
}

/// Report pipeline for one configuration and data source
pub struct DailyReport<'a, D> {
    config: &'a Config,
    source: &'a D,
    extractor: RecordExtractor,
}

impl<'a, D: DataSource> DailyReport<'a, D> {
    pub fn new(config: &'a Config, source: &'a D) -> Self {
        Self {
            config,
            source,
            extractor: RecordExtractor::new(config.report.precipitation_ties),
        }
    }

    /// Fetch the day's series and extract its records
    pub async fn fetch_records(&self, date: NaiveDate) -> Result<ExtractionResult> {
        let query = series_query(self.config, date)?;
        info!(
            "Computing records for {} on {}",
            self.config.station.display_name(),
            date.format("%B %-d")
        );

        let rows = self.source.fetch_daily_series(&query).await?;
        self.extractor.extract(&query, rows)
    }

    /// Fetch, extract, fetch normals and render the report text
    pub async fn compose(&self, date: NaiveDate) -> Result<ComposedReport> {
        let ExtractionResult { records, stats } = self.fetch_records(date).await?;

        let normals = self
            .source
            .fetch_normals(&self.config.station.id, date)
            .await?;
        debug!("Normals: high {} / low {}", normals.high, normals.low);

        let monthly_record = self.config.report.monthly_record(records.month);
        let text = format_report(&records, normals, monthly_record, date);

        Ok(ComposedReport {
            date,
            records,
            stats,
            normals,
            text,
        })
    }

    /// Compose the report and publish it
    ///
    /// The publisher is only called once the report is complete.
    pub async fn publish<P: Publisher>(
        &self,
        date: NaiveDate,
        publisher: &P,
    ) -> Result<PublishedReport> {
        let report = self.compose(date).await?;

        info!("Publishing report via {}", publisher.name());
        let receipt = publisher.publish(&report.text).await?;

        Ok(PublishedReport { report, receipt })
    }
}
