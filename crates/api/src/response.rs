//! Shared response types for API handlers.
//!
//! Mutation confirmations all use a `{ "message": ... }` body. Use
//! [`MessageResponse`] instead of ad-hoc `serde_json::json!` calls to
//! keep the serialization consistent.

use serde::Serialize;

/// Standard `{ "message": "..." }` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
