//! Command implementations for the daily records CLI
//!
//! Each command is implemented in its own module:
//! - `post`: Build the report and publish it (or print it with `--debug`)
//! - `records`: Print the extracted records as text or JSON

pub mod post;
pub mod records;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Post(post_args)) => post::run_post(post_args).await,
        Some(Commands::Records(records_args)) => records::run_records(records_args).await,
        None => Err(Error::configuration("No command given")),
    }
}

/// Process exit code for a failed run
///
/// Archive data problems exit with 2 so a scheduler can tell a bad day in
/// the archive apart from setup or network failures, which exit with 1.
pub fn exit_code(error: &Error) -> i32 {
    if error.is_upstream_data_error() { 2 } else { 1 }
}

/// Lines printed to stderr when a run fails
pub fn failure_message(error: &Error) -> String {
    let mut message = format!("Error: {:#}", error);
    if error.is_upstream_data_error() {
        message.push_str(
            "\nThe archive data for this day could not be used; nothing was published.",
        );
    }
    message
}
