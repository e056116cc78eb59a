//! Status phase backing the heading, plus the pure heading renderer.
//!
//! # Design
//! - One cell, one writer: the mount task settles it exactly once.
//! - `Resolved` and `Unresolved` are terminal; settling them again is a no-op.

use crate::config::ConfigError;
use thiserror::Error;
use vibewriter_api_models::{HealthBodyError, HealthResponse, decode_error_reason};

/// Static label rendered in front of the display status.
pub const HEADING_LABEL: &str = "Vibewriter - ";

/// Why the health status could not be resolved.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatusError {
    /// Endpoint configuration was unusable; no request was sent.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The request never produced a response.
    #[error("health request failed: {detail}")]
    Transport {
        /// Transport diagnostic.
        detail: String,
    },
    /// The endpoint answered with a non-success status.
    #[error("health endpoint answered {code}: {reason}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Reason from the error envelope or status line.
        reason: String,
    },
    /// The response body did not carry a usable `message`.
    #[error(transparent)]
    Body(#[from] HealthBodyError),
}

/// Lifecycle of the display status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusPhase {
    /// Request not yet settled.
    #[default]
    Pending,
    /// Endpoint reported a status message.
    Resolved(String),
    /// Request settled without a usable message.
    Unresolved(StatusError),
}

impl StatusPhase {
    /// Apply a fetch outcome. Only [`StatusPhase::Pending`] transitions.
    #[must_use]
    pub fn settle(self, outcome: Result<HealthResponse, StatusError>) -> Self {
        match self {
            Self::Pending => match outcome {
                Ok(health) => Self::Resolved(health.message),
                Err(err) => Self::Unresolved(err),
            },
            settled => settled,
        }
    }

    /// Text shown after the heading label.
    #[must_use]
    pub fn display_status(&self) -> &str {
        match self {
            Self::Resolved(message) => message,
            Self::Pending | Self::Unresolved(_) => "",
        }
    }

    /// Whether the phase has reached a terminal state.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Failure that left the status unresolved, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&StatusError> {
        match self {
            Self::Unresolved(err) => Some(err),
            Self::Pending | Self::Resolved(_) => None,
        }
    }
}

/// Map a non-success response to a [`StatusError::Status`].
///
/// The reason comes from the `{"error": ...}` envelope when the body has one,
/// then from the status line, then from the bare code (HTTP/2 has no status text).
/// `body` is `None` when it could not be read.
#[must_use]
pub fn status_error(code: u16, status_text: &str, body: Option<&str>) -> StatusError {
    let reason = body
        .and_then(decode_error_reason)
        .or_else(|| {
            let text = status_text.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .unwrap_or_else(|| format!("HTTP {code}"));
    StatusError::Status { code, reason }
}

/// Heading text for the given phase.
#[must_use]
pub fn heading_text(phase: &StatusPhase) -> String {
    format!("{HEADING_LABEL}{}", phase.display_status())
}
