//! Shared components for CLI commands
//!
//! Configuration loading and logging setup used by every command. The
//! configuration is loaded first so that `logging.level` can seed the
//! log filter when neither `-v` nor `-q` is given.

use crate::Result;
use crate::cli::args::CommonArgs;
use crate::config::{Config, LoggingConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// The filter comes from `RUST_LOG` when set, otherwise from the resolved
/// `logging.level`. Stdout is reserved for the report and the records output.
pub fn setup_logging(logging: &LoggingConfig, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = logging.level.to_lowercase();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("daily_records={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Configuration file to read: the explicit `--config`, else the default path if it exists
pub fn resolve_config_file(args: &CommonArgs) -> Option<PathBuf> {
    match &args.config_file {
        Some(path) => Some(path.clone()),
        None => Config::default_config_path()
            .ok()
            .filter(|path| path.exists()),
    }
}

/// Load configuration using layered approach (defaults -> file -> env -> args)
///
/// Returns the configuration together with the file it was read from. This
/// runs before logging is set up, so the source is reported by
/// [`log_config_source`] afterwards.
pub fn load_configuration(args: &CommonArgs) -> Result<(Config, Option<PathBuf>)> {
    let config_file = resolve_config_file(args);

    let config = apply_cli_overrides(Config::load_layered(config_file.as_deref())?, args);
    config.validate()?;

    Ok((config, config_file))
}

/// Report where the configuration came from
pub fn log_config_source(config_file: Option<&Path>) {
    match config_file {
        Some(config_path) => info!("Using config file: {}", config_path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(mut config: Config, args: &CommonArgs) -> Config {
    if let Some(station) = &args.station {
        config = config.with_station(station.trim());
    }

    config = config.with_year_window(args.start_year, args.end_year);

    if let Some(level) = args.log_level_override() {
        config.logging.level = level.to_string();
    }

    config
}
