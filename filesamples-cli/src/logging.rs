// ============================================================================
// filesamples-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and Optional File Logging
//
// The application logs through the standard `log` facade. Console output uses
// `env_logger`, so RUST_LOG still works:
// - RUST_LOG=info (default): phase summaries and per-file failures
// - RUST_LOG=debug (or --verbose): every probed file and command line
//
// With --log-file, a `fern` dispatch sends the same records to stderr and the
// file instead.

use crate::error::CliResult;

use filesamples_core::CoreError;
use log::LevelFilter;
use std::io::Write;
use std::path::Path;

/// Returns the current local timestamp formatted as "YYYY-MM-DD HH:MM:SS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Default level, before any RUST_LOG override.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> CliResult<()> {
    let level = level_for(verbose);

    match log_file {
        None => {
            env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(level.as_str()),
            )
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} {:<5} {}",
                    buf.timestamp(),
                    record.level(),
                    record.args()
                )
            })
            .try_init()
            .map_err(|e| CoreError::Config(format!("Failed to initialize logging: {e}")))?;
        }
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} {:<5} {}",
                        get_timestamp(),
                        record.level(),
                        message
                    ))
                })
                .level(level)
                .chain(std::io::stderr())
                .chain(fern::log_file(path)?)
                .apply()
                .map_err(|e| CoreError::Config(format!("Failed to initialize logging: {e}")))?;
        }
    }

    log::debug!("Logger initialized with level: {}", level);
    Ok(())
}
