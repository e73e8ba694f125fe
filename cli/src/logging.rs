use std::path::PathBuf;

use directories_next::ProjectDirs;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,service=debug,http_fetcher=info,domain=info";

/// Directory for the JSON log files.
///
/// Linux: ~/.local/share/temple/logs/
/// macOS: ~/Library/Application Support/org.temple.temple/logs/
/// Windows: C:\Users\<User>\AppData\Local\temple\temple\data\logs\
fn log_dir() -> PathBuf {
    ProjectDirs::from("org", "temple", "temple")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logs")
}

/// Initializes logging for the CLI.
///
/// Sets up two logging outputs:
/// - Console: compact human-readable lines on stderr, so that stdout only
///   carries command output
/// - File: JSON, rotated daily, for bug reports
///
/// The default filter can be overridden with RUST_LOG:
/// - RUST_LOG=debug temple show events
/// - RUST_LOG=http_fetcher=trace temple show blog
///
/// Returns a guard that must be kept alive for the duration of the program.
/// Dropping this guard will cause file logging to stop.
pub fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let log_dir = log_dir();
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!(
            "Warning: Failed to create log directory at {}: {}",
            log_dir.display(),
            e
        );
    }

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "temple.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_file(true)
        .with_line_number(true);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::debug!(log_dir = %log_dir.display(), "Logging initialized");

    guard
}
