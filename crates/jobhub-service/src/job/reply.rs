//! Reply produced by every job operation.

use std::fmt;

use jobhub_core::error::AppError;

/// Separator between the embedded status code and its message.
const STATUS_SEPARATOR: &str = "::";

/// Outcome of a job operation, already rendered as response text.
///
/// `body` is either a JSON document or a status sentinel such as
/// `"200::New job has been created"`; `code` repeats the sentinel's
/// numeric prefix (200 for JSON payloads) so the transport can use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReply {
    /// Embedded status code.
    pub code: u16,
    /// Response text.
    pub body: String,
}

impl JobReply {
    /// A serialized JSON payload.
    pub fn payload(json: String) -> Self {
        Self {
            code: 200,
            body: json,
        }
    }

    /// A `"<code>::<message>"` sentinel.
    pub fn status(code: u16, message: impl fmt::Display) -> Self {
        Self {
            code,
            body: format!("{code}{STATUS_SEPARATOR}{message}"),
        }
    }

    /// A sentinel carrying the error's message.
    pub fn failure(code: u16, err: &AppError) -> Self {
        Self::status(code, &err.message)
    }

    /// Consume the reply, keeping only the response text.
    pub fn into_body(self) -> String {
        self.body
    }
}

impl fmt::Display for JobReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}
