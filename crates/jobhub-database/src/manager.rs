//! Job store manager that dispatches to the configured adapter.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use jobhub_core::config::{DatabaseConfig, StoreProvider};
use jobhub_core::result::AppResult;
use jobhub_core::traits::Repository;
use jobhub_entity::job::Job;

use crate::connection::DatabasePool;
use crate::repositories::PgJobRepository;

/// Shared trait object the service layer is built on.
pub type DynJobStore = Arc<dyn Repository<Job, i64>>;

/// Wraps the job store selected from configuration.
#[derive(Clone)]
pub struct JobStoreManager {
    inner: DynJobStore,
    provider: StoreProvider,
    pool: Option<DatabasePool>,
}

impl JobStoreManager {
    /// Build the store named by `config.provider`.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                info!("Initializing PostgreSQL job store");
                let pool = DatabasePool::connect(config).await?;
                let repo = PgJobRepository::new(pool.pool().clone());
                Ok(Self {
                    inner: Arc::new(repo),
                    provider: StoreProvider::Postgres,
                    pool: Some(pool),
                })
            }
            #[cfg(feature = "memory")]
            StoreProvider::Memory => {
                info!("Initializing in-memory job store");
                Ok(Self::in_memory())
            }
            #[cfg(not(feature = "memory"))]
            StoreProvider::Memory => Err(jobhub_core::error::AppError::configuration(
                "In-memory job store requires the `memory` feature",
            )),
        }
    }

    /// Fresh, empty in-memory store.
    #[cfg(feature = "memory")]
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(crate::repositories::MemoryJobRepository::new()),
            provider: StoreProvider::Memory,
            pool: None,
        }
    }

    /// Wrap an arbitrary store (tests inject failing stores this way).
    pub fn from_store(store: DynJobStore, provider: StoreProvider) -> Self {
        Self {
            inner: store,
            provider,
            pool: None,
        }
    }

    /// The adapter in use.
    pub fn provider(&self) -> StoreProvider {
        self.provider
    }

    /// Shared handle on the selected store.
    pub fn store(&self) -> DynJobStore {
        Arc::clone(&self.inner)
    }

    /// Check that the backing store is reachable.
    ///
    /// Pooled stores round-trip a query; any other store answers for itself.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => self.inner.health_check().await,
        }
    }

    /// Release pooled connections, if any.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

impl std::fmt::Debug for JobStoreManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobStoreManager")
            .field("provider", &self.provider)
            .field("pooled", &self.pool.is_some())
            .finish()
    }
}

#[async_trait]
impl Repository<Job, i64> for JobStoreManager {
    async fn save(&self, job: &Job) -> AppResult<Job> {
        self.inner.save(job).await
    }

    async fn find_all(&self) -> AppResult<Vec<Job>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: &i64) -> AppResult<Option<Job>> {
        self.inner.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: &i64) -> AppResult<bool> {
        self.inner.delete_by_id(id).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        JobStoreManager::health_check(self).await
    }
}
