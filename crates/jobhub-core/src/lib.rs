//! # jobhub-core
//!
//! Core crate for JobHub. Contains the configuration schema, the
//! persistence-port trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other JobHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
