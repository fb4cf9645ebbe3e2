use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::config::QuerybotConfig;
use crate::errors::{BackendError, BackendResult};
use crate::types::*;

/// Contract for the two backend exchanges.
///
/// The interaction controller only talks to the backend through this
/// trait, so its state machine can be exercised without a network.
#[async_trait]
pub trait QueryBackend: Send + Sync {
    /// Issues the `/query` exchange and normalizes the outcome.
    async fn send_query(&self, request: QueryRequest) -> BackendResult<QueryResponse>;

    /// Issues the `/index` exchange and normalizes the outcome.
    async fn trigger_index(&self) -> BackendResult<IndexResult>;
}

/// HTTP client for the product query backend
#[derive(Debug, Clone)]
pub struct QueryBotClient {
    client: Client,
    base_url: String,
}

impl QueryBotClient {
    /// Create a new backend client from configuration
    pub fn new(config: &QuerybotConfig) -> Self {
        Self::with_base_url(config.resolved_base_url())
    }

    /// Create a new backend client pointed at an explicit endpoint
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// The endpoint this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turns a non-2xx response into a Protocol failure, extracting the
    /// backend's `detail` field when the failure body parses as JSON.
    async fn normalize_failure(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        match response.json::<ErrorDetail>().await {
            Ok(body) => BackendError::Protocol {
                status,
                detail: Some(body.detail),
            },
            Err(_) => BackendError::Protocol {
                status,
                detail: None,
            },
        }
    }
}

#[async_trait]
impl QueryBackend for QueryBotClient {
    async fn send_query(&self, request: QueryRequest) -> BackendResult<QueryResponse> {
        let url = format!("{}/query", self.base_url);
        debug!("Sending query for user '{}' to {}", request.user_id, url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let failure = Self::normalize_failure(response).await;
            error!("Query exchange failed: {}", failure);
            return Err(failure);
        }

        let reply = response
            .json::<QueryResponse>()
            .await
            .map_err(|e| BackendError::Decode(format!("Failed to parse query response: {}", e)))?;

        debug!("Query exchange succeeded ({} bytes)", reply.response.len());
        Ok(reply)
    }

    async fn trigger_index(&self) -> BackendResult<IndexResult> {
        let url = format!("{}/index", self.base_url);
        debug!("Triggering re-index at {}", url);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let failure = Self::normalize_failure(response).await;
            error!("Index exchange failed: {}", failure);
            return Err(failure);
        }

        response
            .json::<IndexResult>()
            .await
            .map_err(|e| BackendError::Decode(format!("Failed to parse index response: {}", e)))
    }
}
