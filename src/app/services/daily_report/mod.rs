//! Daily report pipeline
//!
//! Wires the collaborators together for one calendar day:
//!
//! 1. **Window**: build the archive query for the target date
//! 2. **Fetch**: daily series for that day across every year in the window
//! 3. **Extract**: normalize rows and compute the day's records
//! 4. **Normals**: climatological normal high and low for the date
//! 5. **Format**: render the report text
//! 6. **Publish**: hand the text to the publisher
//!
//! Steps run one after another and any error stops the run, so the
//! publisher only ever sees a complete report.

pub mod pipeline;

#[cfg(test)]
pub mod tests;

pub use pipeline::{ComposedReport, DailyReport, PublishedReport};
