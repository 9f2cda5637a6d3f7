//! Record extraction over normalized observations
//!
//! Each record is computed independently from the observations that have
//! the relevant field. A year missing its high temperature still counts for
//! the low temperature and precipitation records.

use crate::app::models::{
    DailyRecordSet, Metric, Observation, Precipitation, PrecipitationRecord, RecordEntry,
    TemperatureRecords,
};
use crate::config::PrecipitationTies;
use crate::{Error, Result};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Which end of the ordering a record is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Lowest,
    Highest,
}

/// Find an extremal value of a field and every year achieving it
///
/// Observations where `field` returns `None` are skipped. Returns `None`
/// when no observation has the field.
pub fn extreme_record<T, F, C>(
    observations: &[Observation],
    field: F,
    compare: C,
    extreme: Extreme,
) -> Option<RecordEntry<T>>
where
    T: Copy,
    F: Fn(&Observation) -> Option<T>,
    C: Fn(&T, &T) -> Ordering,
{
    let values = observations.iter().filter_map(|obs| field(obs));
    let candidate = match extreme {
        Extreme::Lowest => values.min_by(|a, b| compare(a, b))?,
        Extreme::Highest => values.max_by(|a, b| compare(a, b))?,
    };

    let years: BTreeSet<i32> = observations
        .iter()
        .filter(|obs| {
            field(*obs)
                .map(|value| compare(&value, &candidate) == Ordering::Equal)
                .unwrap_or(false)
        })
        .map(|obs| obs.year)
        .collect();

    Some(RecordEntry {
        value: candidate,
        years,
    })
}

fn temperature_field(metric: Metric) -> Result<fn(&Observation) -> Option<i32>> {
    match metric {
        Metric::HighTemp => Ok(|obs: &Observation| obs.high_temp),
        Metric::LowTemp => Ok(|obs: &Observation| obs.low_temp),
        Metric::Precipitation => Err(Error::unsupported_metric(
            metric.to_string(),
            "temperature records",
        )),
    }
}

/// Lowest and highest value on record for a temperature field
///
/// # Errors
///
/// - [`Error::UnsupportedMetric`] for [`Metric::Precipitation`]
/// - [`Error::MissingMetric`] if the field is missing in every year
pub fn temperature_records(
    observations: &[Observation],
    metric: Metric,
) -> Result<TemperatureRecords> {
    let field = temperature_field(metric)?;

    let lowest = extreme_record(observations, field, i32::cmp, Extreme::Lowest)
        .ok_or_else(|| Error::missing_metric(metric.to_string()))?;
    let highest = extreme_record(observations, field, i32::cmp, Extreme::Highest)
        .ok_or_else(|| Error::missing_metric(metric.to_string()))?;

    Ok(TemperatureRecords { lowest, highest })
}

/// Rank of a tied rainiest year under [`PrecipitationTies::FirstYearWins`]
///
/// Higher low temperature first, then higher high temperature, then the
/// later year. A missing temperature ranks below any reading.
fn tie_rank(obs: &Observation) -> (Option<i32>, Option<i32>, i32) {
    (obs.low_temp, obs.high_temp, obs.year)
}

/// Rainiest day on record
///
/// With [`PrecipitationTies::FirstYearWins`] or
/// [`PrecipitationTies::MostRecent`] only one of several tied years is kept.
pub fn precipitation_record(
    observations: &[Observation],
    ties: PrecipitationTies,
) -> Result<PrecipitationRecord> {
    let mut record = extreme_record(
        observations,
        |obs| obs.precipitation,
        Precipitation::total_cmp,
        Extreme::Highest,
    )
    .ok_or_else(|| Error::missing_metric(Metric::Precipitation.to_string()))?;

    let winner = match ties {
        PrecipitationTies::All => None,
        PrecipitationTies::MostRecent => record.most_recent_year(),
        PrecipitationTies::FirstYearWins => observations
            .iter()
            .filter(|obs| record.years.contains(&obs.year))
            .max_by_key(|obs| tie_rank(obs))
            .map(|obs| obs.year),
    };

    if let Some(year) = winner {
        record.years = BTreeSet::from([year]);
    }

    Ok(record)
}

/// Compute every record for one calendar day
///
/// Fails if `observations` is empty or any field is missing in every year.
pub fn extract_records(
    observations: &[Observation],
    month: u32,
    day: u32,
    ties: PrecipitationTies,
) -> Result<DailyRecordSet> {
    if observations.is_empty() {
        return Err(Error::archive_response(format!(
            "No observations to extract records from for {:02}-{:02}",
            month, day
        )));
    }

    Ok(DailyRecordSet {
        month,
        day,
        max_temp: temperature_records(observations, Metric::HighTemp)?,
        min_temp: temperature_records(observations, Metric::LowTemp)?,
        precipitation: precipitation_record(observations, ties)?,
        years_considered: observations.len(),
    })
}
