//! Logging system initialization
//!
//! Sets up tracing according to the `[logging]` section. The TUI owns the
//! terminal, so in that mode logs are always written to a file.

use std::io;
use std::path::Path;

use crate::config::LoggingConfig;

/// Log file used by the TUI when none is configured
pub const DEFAULT_TUI_LOG_FILE: &str = "mini-shortener.log";

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// stderr unless a file is configured
    Console,
    /// Always a file, never the terminal
    FileOnly,
}

/// Resolve the file to write to, if any
pub fn resolve_log_file(config: &LoggingConfig, target: LogTarget) -> Option<String> {
    match (config.file.as_deref(), target) {
        (Some(file), _) if !file.is_empty() => Some(file.to_string()),
        (_, LogTarget::FileOnly) => Some(DEFAULT_TUI_LOG_FILE.to_string()),
        _ => None,
    }
}

/// Initialize the global subscriber
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// Fails if the log file cannot be opened. Calling it twice is an error
/// reported by `try_init`.
pub fn init_logging(
    config: &LoggingConfig,
    target: LogTarget,
) -> io::Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_file = resolve_log_file(config, target);

    let writer: Box<dyn io::Write + Send + Sync> = match log_file.as_deref() {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Box::new(file)
        }
        None => Box::new(io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    let result = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    result.map_err(|e| io::Error::other(e.to_string()))?;

    Ok(guard)
}
