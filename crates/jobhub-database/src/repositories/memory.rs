//! In-process job repository using dashmap.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{Map, Value};
use tracing::debug;

use jobhub_core::result::AppResult;
use jobhub_core::traits::Repository;
use jobhub_entity::job::Job;

/// Job repository kept in memory, with ids handed out from 1 upwards.
#[derive(Debug, Clone)]
pub struct MemoryJobRepository {
    rows: Arc<DashMap<i64, Map<String, Value>>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryJobRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            rows: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for MemoryJobRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<Job, i64> for MemoryJobRepository {
    async fn save(&self, job: &Job) -> AppResult<Job> {
        if let Some(id) = job.id {
            if let Some(mut row) = self.rows.get_mut(&id) {
                *row = job.fields.clone();
                return Ok(job.clone());
            }
            debug!(job_id = id, "No row to overwrite, inserting");
        }

        let id = self.allocate_id();
        self.rows.insert(id, job.fields.clone());
        Ok(Job {
            id: Some(id),
            fields: job.fields.clone(),
        })
    }

    async fn find_all(&self) -> AppResult<Vec<Job>> {
        let mut jobs: Vec<Job> = self
            .rows
            .iter()
            .map(|entry| Job {
                id: Some(*entry.key()),
                fields: entry.value().clone(),
            })
            .collect();
        jobs.sort_by_key(|job| job.id);
        Ok(jobs)
    }

    async fn find_by_id(&self, id: &i64) -> AppResult<Option<Job>> {
        Ok(self.rows.get(id).map(|row| Job {
            id: Some(*id),
            fields: row.value().clone(),
        }))
    }

    async fn delete_by_id(&self, id: &i64) -> AppResult<bool> {
        Ok(self.rows.remove(id).is_some())
    }
}
