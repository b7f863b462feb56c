//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use jobhub_core::config::AppConfig;
use jobhub_database::JobStoreManager;
use jobhub_service::JobService;

/// Application state passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Selected job store (used by the health check)
    pub store: JobStoreManager,
    /// Job CRUD service
    pub job_service: Arc<JobService>,
}

impl AppState {
    /// Wires the job service onto the given store.
    pub fn new(config: AppConfig, store: JobStoreManager) -> Self {
        let job_service = Arc::new(JobService::new(store.store()));
        Self {
            config: Arc::new(config),
            store,
            job_service,
        }
    }
}
