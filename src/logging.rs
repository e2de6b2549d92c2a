use std::path::Path;

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LogSink, LoggingConfig};
use crate::error::{PipelineError, Result};

/// Initializes the logging system for the configured sink.
///
/// Console output goes to stderr so stdout carries only pipeline results.
/// The file sink appends to the configured log file through a non-blocking
/// writer; the returned guard must stay alive until exit so buffered lines
/// are flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let sink = config.sink();
    if sink == LogSink::None {
        return Ok(None);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("number_pipeline={}", config.level)));

    let (console_layer, file_layer, guard) = match sink {
        LogSink::File => {
            let (dir, file_name) = split_log_path(&config.file)?;
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name.to_string_lossy())
                .build(dir)
                .map_err(|e| {
                    PipelineError::Config(format!(
                        "Failed to open log file '{}': {}",
                        config.file.display(),
                        e
                    ))
                })?;
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (None, Some(layer), Some(guard))
        }
        _ => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            (Some(layer), None, None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| PipelineError::Config(format!("Failed to initialize logging: {}", e)))?;

    if config.has_unknown_sink() {
        warn!("Unknown log sink '{}', falling back to console", config.sink);
    }

    Ok(guard)
}

/// Split a log file path into the directory and file name the appender expects
fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr)> {
    let file_name = path.file_name().ok_or_else(|| {
        PipelineError::Config(format!("Log file path '{}' has no file name", path.display()))
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((dir, file_name))
}
