#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Vibewriter public API.
//!
//! The web UI decodes health payloads through these types so a missing or
//! mistyped field becomes an explicit error instead of leaking into rendered
//! output.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Path of the health endpoint, relative to the API base URL.
pub const HEALTH_PATH: &str = "/api/v1/health";

/// Body returned by `GET /api/v1/health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Human-readable status reported by the server.
    pub message: String,
}

/// Error envelope the API returns alongside non-success status codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Reason reported by the server.
    pub error: String,
}

/// Reasons a health body can fail to decode.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HealthBodyError {
    /// Body was not valid JSON.
    #[error("health body is not valid JSON: {detail}")]
    Malformed {
        /// Parser diagnostic.
        detail: String,
    },
    /// Body was JSON but not an object.
    #[error("health body is a JSON {found}, expected an object")]
    NotAnObject {
        /// JSON kind that was received instead.
        found: &'static str,
    },
    /// The `message` field was absent.
    #[error("health body has no `message` field")]
    MissingMessage,
    /// The `message` field was present with the wrong type.
    #[error("health `message` is a JSON {found}, expected a string")]
    MessageNotString {
        /// JSON kind that was received instead.
        found: &'static str,
    },
}

/// Decode a health body, checking the `message` field explicitly.
///
/// Extra fields are ignored.
///
/// # Errors
/// Returns [`HealthBodyError`] when the body is not a JSON object carrying a
/// string `message`.
pub fn decode_health(body: &str) -> Result<HealthResponse, HealthBodyError> {
    let value: Value = serde_json::from_str(body).map_err(|err| HealthBodyError::Malformed {
        detail: err.to_string(),
    })?;
    let Value::Object(mut fields) = value else {
        return Err(HealthBodyError::NotAnObject {
            found: json_kind(&value),
        });
    };
    match fields.remove("message") {
        Some(Value::String(message)) => Ok(HealthResponse { message }),
        Some(other) => Err(HealthBodyError::MessageNotString {
            found: json_kind(&other),
        }),
        None => Err(HealthBodyError::MissingMessage),
    }
}

/// Pull the server-provided reason out of an error body, if it has one.
#[must_use]
pub fn decode_error_reason(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|envelope| envelope.error)
        .filter(|reason| !reason.trim().is_empty())
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
