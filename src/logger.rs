use std::env;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "homework-bot";
/// Rotated files kept on disk; older ones are deleted.
const MAX_LOG_FILES: usize = 5;

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `LOG_LEVEL` (default
/// `info`).  With `LOG_DIR` set, events go to a daily-rotated file in that
/// directory instead of stdout, keeping the last five days; keep the
/// returned guard alive until exit so buffered lines are flushed.
pub fn init_logging() -> Result<Option<WorkerGuard>> {
    let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string());
    let level = level.to_lowercase();

    let filter = match env::var("RUST_LOG") {
        Ok(rust_log) => EnvFilter::new(rust_log),
        Err(_) => EnvFilter::new(level),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match env::var("LOG_DIR") {
        Ok(dir) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(&dir)?);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        Err(_) => {
            builder.init();
            Ok(None)
        }
    }
}

fn file_appender(dir: &str) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
        .with_context(|| format!("cannot open log directory {dir}"))
}
