//! Response bodies that are not job replies.

use serde::{Deserialize, Serialize};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`; failures answer with an error body instead.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Job store adapter in use.
    pub store: String,
}
