//! # jobhub-api
//!
//! HTTP API layer for JobHub built on Axum.
//!
//! Provides the `/jobs` CRUD endpoints, a health check, CORS and request
//! logging middleware, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
