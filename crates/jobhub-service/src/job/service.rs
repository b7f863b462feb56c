//! Job CRUD service.
//!
//! Every operation catches its own failure and returns it as a
//! `"<code>::<message>"` sentinel; nothing propagates to the caller. The
//! code is fixed per operation: 400 for create/read/update, 404 for
//! get/delete.

use std::sync::Arc;

use tracing::{debug, warn};

use jobhub_core::error::AppError;
use jobhub_core::traits::Repository;
use jobhub_entity::job::Job;

use super::reply::JobReply;

const CREATED: &str = "New job has been created";
const UPDATED: &str = "Job details has been updated";
const DELETED: &str = "Job details has been deleted";

const BAD_REQUEST: u16 = 400;
const NOT_FOUND: u16 = 404;

/// Stateless job service over a persistence port.
#[derive(Clone)]
pub struct JobService {
    /// Job store.
    store: Arc<dyn Repository<Job, i64>>,
}

impl JobService {
    /// Creates a new job service.
    pub fn new(store: Arc<dyn Repository<Job, i64>>) -> Self {
        Self { store }
    }

    /// Persists a new job.
    pub async fn create(&self, job: &Job) -> JobReply {
        match self.store.save(job).await {
            Ok(saved) => {
                debug!(job_id = ?saved.id, "Job created");
                JobReply::status(200, CREATED)
            }
            Err(e) => reject("create", BAD_REQUEST, &e),
        }
    }

    /// Lists every job as a JSON array.
    pub async fn read_all(&self) -> JobReply {
        let listed = async {
            let jobs = self.store.find_all().await?;
            Ok::<_, AppError>(serde_json::to_string(&jobs)?)
        }
        .await;

        match listed {
            Ok(json) => JobReply::payload(json),
            Err(e) => reject("read_all", BAD_REQUEST, &e),
        }
    }

    /// Fetches one job as a JSON object.
    pub async fn get_by_id(&self, id: i64) -> JobReply {
        let found = async {
            let job = self
                .store
                .find_by_id(&id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("No job with id {id} exists")))?;
            Ok::<_, AppError>(serde_json::to_string(&job)?)
        }
        .await;

        match found {
            Ok(json) => JobReply::payload(json),
            Err(e) => reject("get_by_id", NOT_FOUND, &e),
        }
    }

    /// Overwrites a job in full; an unknown or absent id stores a new job.
    pub async fn update(&self, job: &Job) -> JobReply {
        match self.store.save(job).await {
            Ok(saved) => {
                debug!(job_id = ?saved.id, "Job updated");
                JobReply::status(200, UPDATED)
            }
            Err(e) => reject("update", BAD_REQUEST, &e),
        }
    }

    /// Removes a job.
    pub async fn delete_by_id(&self, id: i64) -> JobReply {
        let deleted = async {
            if self.store.delete_by_id(&id).await? {
                Ok::<_, AppError>(())
            } else {
                Err(AppError::not_found(format!(
                    "No job entity with id {id} exists"
                )))
            }
        }
        .await;

        match deleted {
            Ok(()) => {
                debug!(job_id = id, "Job deleted");
                JobReply::status(200, DELETED)
            }
            Err(e) => reject("delete_by_id", NOT_FOUND, &e),
        }
    }
}

impl std::fmt::Debug for JobService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobService").finish_non_exhaustive()
    }
}

fn reject(operation: &'static str, code: u16, err: &AppError) -> JobReply {
    warn!(operation, code, kind = %err.kind, error = %err.message, "Job operation failed");
    JobReply::failure(code, err)
}
