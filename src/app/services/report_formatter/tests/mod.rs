//! Tests for report formatting

pub mod formatter_tests;
pub mod ordinal_tests;

use crate::app::models::{
    ClimateNormals, DailyRecordSet, Precipitation, RecordEntry, TemperatureRecords,
};
use chrono::NaiveDate;

/// Record set of the June 15 scenario
pub fn create_june_15_records() -> DailyRecordSet {
    DailyRecordSet {
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
    }
}

pub fn create_normals() -> ClimateNormals {
    ClimateNormals {
        high: 77.0,
        low: 54.0,
    }
}

pub fn june_15() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}
