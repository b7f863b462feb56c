//! # jobhub-service
//!
//! Business logic service layer for JobHub.
//!
//! Services follow constructor injection: the persistence port is handed
//! in as an `Arc` trait object at construction time.

pub mod job;

pub use job::{JobReply, JobService};
