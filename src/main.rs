use clap::Parser;
use daily_records::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    // Nothing is published unless the pipeline finishes before Ctrl+C
    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, stopping before anything is published...");
                Err(daily_records::Error::processing_interrupted(
                    "Interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("{}", commands::failure_message(&error));
            process::exit(commands::exit_code(&error));
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Daily Records - Historical weather records for today's date");
    println!("===========================================================");
    println!();
    println!("Fetches every archived observation of one calendar day at a weather");
    println!("station and posts the record highs, lows and rainiest day.");
    println!();
    println!("USAGE:");
    println!("    daily-records <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    post        Build today's report and post it to Mastodon");
    println!("    records     Print the extracted records without publishing");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Print today's report for the default station instead of posting it:");
    println!("    daily-records post --debug");
    println!();
    println!("    # Post the report for Berkeley:");
    println!("    daily-records post --station 040693");
    println!();
    println!("    # Records for a leap day as JSON:");
    println!("    daily-records records --date 2024-02-29 --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    daily-records <COMMAND> --help");
}
