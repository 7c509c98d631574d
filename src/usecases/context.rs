use tracing_appender::non_blocking::WorkerGuard;

use crate::infra::{config::AppConfig, storage_layout::StorageLayout};

pub struct AppContext {
    pub config: AppConfig,
    pub layout: StorageLayout,
    log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn new(config: AppConfig, layout: StorageLayout) -> Self {
        Self {
            config,
            layout,
            log_guard: None,
        }
    }

    /// Keeps the log writer alive for as long as the context lives.
    pub fn with_log_guard(mut self, guard: WorkerGuard) -> Self {
        self.log_guard = Some(guard);
        self
    }

    pub fn has_log_writer(&self) -> bool {
        self.log_guard.is_some()
    }
}
