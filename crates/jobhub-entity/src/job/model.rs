//! Job entity model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{FromRow, Row};

/// A job posting record.
///
/// Only the identifier is interpreted by the service. Every other JSON
/// member travels in [`Job::fields`] and is stored as a whole, so saving a
/// job replaces all of its previous fields. Members set to `null` are
/// dropped on input, the same as absent ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "JobPayload")]
pub struct Job {
    /// Store-assigned identifier; `None` until the job has been saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Remaining job attributes.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Wire shape of an incoming job, before nulls are stripped.
#[derive(Deserialize)]
struct JobPayload {
    #[serde(default)]
    id: Option<i64>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl From<JobPayload> for Job {
    fn from(payload: JobPayload) -> Self {
        let mut fields = payload.fields;
        fields.retain(|_, value| !value.is_null());
        Self {
            id: payload.id,
            fields,
        }
    }
}

/// Rows come from `SELECT id, data FROM jobs`, where `data` is JSONB.
impl<'r> FromRow<'r, PgRow> for Job {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let Json(fields): Json<Map<String, Value>> = row.try_get("data")?;
        Ok(Self {
            id: Some(id),
            fields,
        })
    }
}
