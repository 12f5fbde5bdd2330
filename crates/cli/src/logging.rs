//! Tracing subscriber setup.
//!
//! The dashboard owns the terminal, so its logs go to a daily rolling file
//! under `.dataflow-dash/logs/`. The print commands log to stderr, leaving
//! stdout to the table or JSON output.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE_PREFIX: &str = "dataflow-dash";

/// Keeps the background log writer alive. Logs written after this is
/// dropped are lost.
pub struct LoggerGuard(#[allow(dead_code)] WorkerGuard);

/// `RUST_LOG` when set, else `level` from the config. An unrecognised
/// level falls back to `info`.
fn env_filter(level: &str) -> EnvFilter {
    let default = level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
    EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy()
}

/// Log to `<log_dir>/dataflow-dash.<date>.log`.
pub fn init_file_logging(log_dir: &Path, level: &str) -> Result<LoggerGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(log_dir)
        .wrap_err_with(|| format!("failed to create log file in {}", log_dir.display()))?;
    let (non_blocking, guard) = NonBlocking::new(appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter(level));

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .wrap_err("failed to install log subscriber")?;

    Ok(LoggerGuard(guard))
}

/// Log to stderr.
pub fn init_stderr_logging(level: &str) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter(level));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .try_init()
        .wrap_err("failed to install log subscriber")
}

