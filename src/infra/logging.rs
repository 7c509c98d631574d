use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError, storage_layout::StorageLayout};

/// Routes tracing output to the log file; the terminal belongs to the UI.
///
/// The returned guard flushes buffered records when dropped.
pub fn init(config: &LogConfig, layout: &StorageLayout) -> Result<WorkerGuard, AppError> {
    let appender = open_log_file(layout)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}

fn open_log_file(layout: &StorageLayout) -> Result<RollingFileAppender, AppError> {
    layout.ensure_dirs()?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(layout.log_file_name())
        .build(&layout.log_dir)
        .map_err(|source| AppError::LogFileOpen {
            path: layout.log_file(),
            source,
        })
}
