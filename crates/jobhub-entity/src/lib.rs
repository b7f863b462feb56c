//! # jobhub-entity
//!
//! Domain entity model for JobHub. The [`Job`] record is the only
//! persisted resource; it maps onto a `jobs` table row via `sqlx::FromRow`.

pub mod job;

pub use job::Job;
