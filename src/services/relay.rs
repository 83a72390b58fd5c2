//! Forwards assistant messages to the workflow-automation webhook.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::dto::relay::{OpaquePayload, RelayResponse};
use crate::services::{ServiceError, ServiceResult};

/// Passthrough client for the configured webhook. Cheap to clone.
#[derive(Clone, Debug)]
pub struct WorkflowRelay {
    client: Client,
    webhook_url: String,
}

impl WorkflowRelay {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), webhook_url)
    }

    pub fn with_client(client: Client, webhook_url: impl Into<String>) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
        }
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// Posts `payload` unchanged and returns the upstream status and body.
    ///
    /// Non-2xx answers are not errors: they are relayed like any other.
    pub async fn forward(&self, payload: OpaquePayload) -> ServiceResult<RelayResponse> {
        let response = self
            .client
            .post(&self.webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload.into_inner())
            .send()
            .await
            .map_err(|err| {
                log::error!("Webhook {} unreachable: {err}", self.webhook_url);
                ServiceError::Upstream(err.to_string())
            })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await.map_err(|err| {
            log::error!("Failed to read webhook response: {err}");
            ServiceError::Upstream(err.to_string())
        })?;

        log::info!("Webhook answered {status} ({} bytes)", body.len());

        Ok(RelayResponse {
            status,
            content_type,
            body,
        })
    }
}
