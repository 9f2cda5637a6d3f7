//! Local output publisher for debug runs

use super::{PublishReceipt, Publisher};
use crate::{Error, Result};
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

/// Writes the report to a local writer instead of posting it
#[derive(Debug)]
pub struct ConsolePublisher<W = Stdout> {
    writer: Mutex<W>,
}

impl ConsolePublisher<Stdout> {
    /// Publisher writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsolePublisher<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer, e.g. to inspect what was written
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Publisher for ConsolePublisher<W> {
    fn name(&self) -> &'static str {
        "console"
    }

    async fn publish(&self, text: &str) -> Result<PublishReceipt> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| Error::publishing("Console writer lock poisoned"))?;

        writeln!(writer, "{}", text).map_err(|e| Error::io("Failed to write report", e))?;
        writer
            .flush()
            .map_err(|e| Error::io("Failed to flush report", e))?;

        Ok(PublishReceipt::default())
    }
}
