//! Logging system with daily rotation.

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use time::macros::format_description;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// File name prefix shared by every log file.
const LOG_PREFIX: &str = "filtering-listener";

/// How long rotated log files are kept.
const LOG_RETENTION: Duration = Duration::from_secs(2 * 24 * 60 * 60);

/// Initialize the logging system.
pub fn init(config: &Config) -> Result<()> {
    // Create log directory if needed
    if !config.log_path.exists() {
        fs::create_dir_all(&config.log_path)?;
    }

    // Clean up old logs
    cleanup_old_logs(&config.log_path, SystemTime::now() - LOG_RETENTION)?;

    // Create rolling file appender with daily rotation
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.log_path, LOG_PREFIX);

    // Use local timezone for timestamps
    let time_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(local_offset, time_format);

    // Set up subscriber with file output
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(timer),
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

/// Remove log files last modified before `cutoff`.
pub fn cleanup_old_logs(log_path: &Path, cutoff: SystemTime) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(log_path)? {
        let entry = entry?;
        let path = entry.path();

        // Only process log files
        if !path.is_file() {
            continue;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };

        // Check if it's a filtering-listener log file
        if !filename.starts_with(LOG_PREFIX) {
            continue;
        }

        // Check modification time
        if let Ok(modified) = entry.metadata().and_then(|m| m.modified()) {
            if modified < cutoff {
                let _ = fs::remove_file(&path);
            }
        }
    }

    Ok(())
}
