//! Mount-scoped health request driver.
//!
//! # Design
//! - One controller per mounted `StatusView`; it issues at most one request.
//! - The HTTP client sits behind [`HealthSource`] so the flow runs without a DOM.

use crate::core::status::{StatusError, StatusPhase};
use async_trait::async_trait;
use std::cell::Cell;
use vibewriter_api_models::HealthResponse;

/// Anything that can answer a health query.
#[async_trait(?Send)]
pub trait HealthSource {
    /// Fetch and decode the health body.
    async fn fetch_health(&self) -> Result<HealthResponse, StatusError>;
}

/// Issues the mount request and reports the settled phase.
#[derive(Debug)]
pub struct StatusController<S> {
    source: S,
    issued: Cell<bool>,
}

impl<S: HealthSource> StatusController<S> {
    /// Wrap a health source for a fresh mount.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            issued: Cell::new(false),
        }
    }

    /// Whether the mount request has already been issued.
    #[must_use]
    pub fn request_issued(&self) -> bool {
        self.issued.get()
    }

    /// Issue the health request if this mount has not done so yet.
    ///
    /// Returns the settled phase for the first call and `None` afterwards.
    /// There is no timeout: a request that never answers never settles.
    pub async fn run(&self) -> Option<StatusPhase> {
        if self.issued.replace(true) {
            tracing::debug!("health request already issued for this mount");
            return None;
        }
        tracing::debug!("issuing health request");
        let phase = StatusPhase::Pending.settle(self.source.fetch_health().await);
        if let Some(err) = phase.error() {
            tracing::warn!(error = %err, "health status unresolved");
        }
        Some(phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::status::heading_text;
    use std::time::Duration;
    use vibewriter_api_models::{HealthBodyError, decode_health};

    struct ScriptedSource {
        body: &'static str,
        calls: Cell<usize>,
    }

    impl ScriptedSource {
        const fn new(body: &'static str) -> Self {
            Self {
                body,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl HealthSource for ScriptedSource {
        async fn fetch_health(&self) -> Result<HealthResponse, StatusError> {
            self.calls.set(self.calls.get() + 1);
            Ok(decode_health(self.body)?)
        }
    }

    struct StalledSource;

    #[async_trait(?Send)]
    impl HealthSource for StalledSource {
        async fn fetch_health(&self) -> Result<HealthResponse, StatusError> {
            std::future::pending().await
        }
    }

    struct OfflineSource;

    #[async_trait(?Send)]
    impl HealthSource for OfflineSource {
        async fn fetch_health(&self) -> Result<HealthResponse, StatusError> {
            Err(StatusError::Transport {
                detail: "connection refused".to_string(),
            })
        }
    }

    async fn mount<S: HealthSource>(controller: &StatusController<S>) -> StatusPhase {
        let mut phase = StatusPhase::default();
        if let Some(next) = controller.run().await {
            phase = next;
        }
        phase
    }

    #[tokio::test]
    async fn ok_message_lands_in_heading() {
        let controller = StatusController::new(ScriptedSource::new(r#"{"message":"ok"}"#));
        let phase = mount(&controller).await;
        assert_eq!(heading_text(&phase), "Vibewriter - ok");
    }

    #[tokio::test]
    async fn empty_message_renders_label_only() {
        let controller = StatusController::new(ScriptedSource::new(r#"{"message":""}"#));
        let phase = mount(&controller).await;
        assert_eq!(phase, StatusPhase::Resolved(String::new()));
        assert_eq!(heading_text(&phase), "Vibewriter - ");
    }

    #[tokio::test]
    async fn missing_message_settles_unresolved() {
        let controller = StatusController::new(ScriptedSource::new(r#"{"status":"ok"}"#));
        let phase = mount(&controller).await;
        assert_eq!(
            phase,
            StatusPhase::Unresolved(StatusError::Body(HealthBodyError::MissingMessage))
        );
        assert_eq!(heading_text(&phase), "Vibewriter - ");
    }

    #[tokio::test]
    async fn transport_failure_settles_unresolved() {
        let controller = StatusController::new(OfflineSource);
        let phase = mount(&controller).await;
        assert!(matches!(phase.error(), Some(StatusError::Transport { .. })));
        assert_eq!(heading_text(&phase), "Vibewriter - ");
    }

    #[tokio::test]
    async fn stalled_endpoint_never_settles() {
        let controller = StatusController::new(StalledSource);
        let mut phase = StatusPhase::default();
        let waited = tokio::time::timeout(Duration::from_millis(50), async {
            if let Some(next) = controller.run().await {
                phase = next;
            }
        })
        .await;
        assert!(waited.is_err());
        assert!(controller.request_issued());
        assert!(!phase.is_settled());
        assert_eq!(heading_text(&phase), "Vibewriter - ");
    }

    #[tokio::test]
    async fn one_request_per_mount() {
        let controller = StatusController::new(ScriptedSource::new(r#"{"message":"ok"}"#));
        let (first, second) = tokio::join!(controller.run(), controller.run());
        assert_eq!(
            [first.is_some(), second.is_some()]
                .iter()
                .filter(|ran| **ran)
                .count(),
            1
        );
        assert!(controller.run().await.is_none());
        assert_eq!(controller.source.calls.get(), 1);
    }
}
