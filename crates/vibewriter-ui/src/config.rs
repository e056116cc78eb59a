//! API base URL configuration.
//!
//! # Design
//! - The base URL is baked into the bundle at build time from `VIBEWRITER_API_URL`.
//! - Validation happens once, before any request is issued.

use thiserror::Error;
use url::Url;
use vibewriter_api_models::HEALTH_PATH;

/// Reasons the configured base URL cannot be used.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No base URL was configured, or it was blank.
    #[error("API base URL is not configured (set VIBEWRITER_API_URL at build time)")]
    MissingBaseUrl,
    /// The base URL could not be used to reach the API.
    #[error("invalid API base URL `{value}`: {reason}")]
    InvalidBaseUrl {
        /// Configured value.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Fully-resolved health endpoint URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthEndpoint {
    url: String,
}

impl HealthEndpoint {
    /// Resolve the endpoint from the base URL captured when the bundle was built.
    ///
    /// # Errors
    /// See [`HealthEndpoint::from_base_url`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_base_url(option_env!("VIBEWRITER_API_URL"))
    }

    /// Resolve the endpoint from an optional base URL.
    ///
    /// Trailing slashes on the base are dropped before the health path is appended.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingBaseUrl`] when the base is absent or blank and
    /// [`ConfigError::InvalidBaseUrl`] when it is not an absolute HTTP(S) URL.
    pub fn from_base_url(base: Option<&str>) -> Result<Self, ConfigError> {
        let raw = base.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        let invalid = |reason| ConfigError::InvalidBaseUrl {
            value: raw.to_string(),
            reason,
        };
        let parsed = Url::parse(raw).map_err(|_| invalid("not an absolute URL"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("must not carry a query or fragment"));
        }
        Ok(Self {
            url: format!("{}{HEALTH_PATH}", raw.trim_end_matches('/')),
        })
    }

    /// Endpoint URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}
