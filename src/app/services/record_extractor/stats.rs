//! Extraction statistics

use crate::app::models::Observation;
use serde::Serialize;

/// Counters describing the series a record set was computed from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Rows returned by the archive
    pub rows_received: usize,
    /// Rows dropped because they were dated on another day
    pub rows_discarded: usize,
    /// Observations records were computed from
    pub observations: usize,
    /// Observations with no missing field
    pub complete_observations: usize,
    pub missing_high_temp: usize,
    pub missing_low_temp: usize,
    pub missing_precipitation: usize,
    /// Years with a trace of precipitation
    pub trace_days: usize,
    /// Years with at least the smallest measurable amount
    pub measurable_precipitation_days: usize,
}

impl ExtractionStats {
    pub fn new(rows_received: usize, rows_discarded: usize) -> Self {
        Self {
            rows_received,
            rows_discarded,
            ..Default::default()
        }
    }

    /// Count missing fields and trace days over the normalized observations
    pub fn record_observations(&mut self, observations: &[Observation]) {
        self.observations = observations.len();
        self.complete_observations = observations.iter().filter(|o| o.is_complete()).count();
        self.missing_high_temp = observations.iter().filter(|o| o.high_temp.is_none()).count();
        self.missing_low_temp = observations.iter().filter(|o| o.low_temp.is_none()).count();
        self.missing_precipitation = observations
            .iter()
            .filter(|o| o.precipitation.is_none())
            .count();
        self.trace_days = observations
            .iter()
            .filter(|o| o.precipitation.is_some_and(|p| p.is_trace()))
            .count();
        self.measurable_precipitation_days = observations
            .iter()
            .filter(|o| o.precipitation.is_some_and(|p| p.is_measurable()))
            .count();
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Extraction Summary: {} rows -> {} observations ({} complete, {} discarded) | \
             Missing: high {}, low {}, precipitation {} | Trace days: {} | Measurable days: {}",
            self.rows_received,
            self.observations,
            self.complete_observations,
            self.rows_discarded,
            self.missing_high_temp,
            self.missing_low_temp,
            self.missing_precipitation,
            self.trace_days,
            self.measurable_precipitation_days
        )
    }
}
