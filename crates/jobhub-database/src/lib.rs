//! # jobhub-database
//!
//! PostgreSQL connection management and the job store adapters:
//! a PostgreSQL-backed repository, an in-process repository, and the
//! [`JobStoreManager`] that picks one from configuration.

pub mod connection;
pub mod manager;
pub mod repositories;

pub use connection::DatabasePool;
pub use manager::JobStoreManager;
