//! HTTP client for the Vibewriter API.

use crate::config::HealthEndpoint;
use crate::core::controller::HealthSource;
use crate::core::status::{StatusError, status_error};
use async_trait::async_trait;
use gloo_net::http::Request;
use vibewriter_api_models::{HealthResponse, decode_health};

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    endpoint: HealthEndpoint,
}

impl ApiClient {
    pub(crate) const fn new(endpoint: HealthEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait(?Send)]
impl HealthSource for ApiClient {
    async fn fetch_health(&self) -> Result<HealthResponse, StatusError> {
        let response = Request::get(self.endpoint.as_str())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport_error)?;
        if !response.ok() {
            let body = response.text().await.ok();
            return Err(status_error(
                response.status(),
                &response.status_text(),
                body.as_deref(),
            ));
        }
        let body = response.text().await.map_err(transport_error)?;
        Ok(decode_health(&body)?)
    }
}

fn transport_error(err: gloo_net::Error) -> StatusError {
    StatusError::Transport {
        detail: err.to_string(),
    }
}
