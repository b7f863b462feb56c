//! PostgreSQL job repository.
//!
//! Expects a pre-provisioned table:
//!
//! ```sql
//! CREATE TABLE jobs (
//!     id   BIGSERIAL PRIMARY KEY,
//!     data JSONB NOT NULL DEFAULT '{}'::jsonb
//! );
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::debug;

use jobhub_core::error::{AppError, ErrorKind};
use jobhub_core::result::AppResult;
use jobhub_core::traits::Repository;
use jobhub_entity::job::Job;

/// Job repository backed by the `jobs` table.
#[derive(Debug, Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, job: &Job) -> AppResult<Job> {
        sqlx::query_as::<_, Job>("INSERT INTO jobs (data) VALUES ($1) RETURNING id, data")
            .bind(Json(&job.fields))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create job", e))
    }

    async fn overwrite(&self, id: i64, job: &Job) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("UPDATE jobs SET data = $2 WHERE id = $1 RETURNING id, data")
            .bind(id)
            .bind(Json(&job.fields))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update job", e))
    }
}

#[async_trait]
impl Repository<Job, i64> for PgJobRepository {
    async fn save(&self, job: &Job) -> AppResult<Job> {
        if let Some(id) = job.id {
            if let Some(saved) = self.overwrite(id, job).await? {
                return Ok(saved);
            }
            debug!(job_id = id, "No row to overwrite, inserting");
        }
        self.insert(job).await
    }

    async fn find_all(&self) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>("SELECT id, data FROM jobs ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list jobs", e))
    }

    async fn find_by_id(&self, id: &i64) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("SELECT id, data FROM jobs WHERE id = $1")
            .bind(*id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find job", e))
    }

    async fn delete_by_id(&self, id: &i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(*id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete job", e))?;
        Ok(result.rows_affected() > 0)
    }
}

/// Keep the driver's text in the message; callers surface it verbatim.
fn db_error(context: &str, err: sqlx::Error) -> AppError {
    let kind = match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => ErrorKind::Conflict,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        _ => ErrorKind::Database,
    };
    AppError::with_source(kind, format!("{context}: {err}"), err)
}
