//! Response DTOs.

pub mod response;

pub use response::{ApiErrorResponse, HealthResponse};
