//! HTTP transport for chat-completion requests.

use crate::retry::{RetryConfig, retry_with_backoff};
use async_trait::async_trait;
use scrivano_core::{CompletionRequest, CompletionResponse, EndpointConfig};
use scrivano_error::{TransportError, TransportErrorKind, TransportResult};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Delivers a single chat-completion request and returns the parsed response.
///
/// The generation strategy is generic over this trait so tests can substitute
/// a scripted transport for the HTTP client.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Performs one chat-completion request.
    async fn complete(&self, request: &CompletionRequest) -> TransportResult<CompletionResponse>;
}

#[async_trait]
impl<'a, T: ChatTransport + ?Sized> ChatTransport for &'a T {
    async fn complete(&self, request: &CompletionRequest) -> TransportResult<CompletionResponse> {
        (**self).complete(request).await
    }
}

#[async_trait]
impl<T: ChatTransport + ?Sized> ChatTransport for std::sync::Arc<T> {
    async fn complete(&self, request: &CompletionRequest) -> TransportResult<CompletionResponse> {
        (**self).complete(request).await
    }
}

/// Transport bound to one endpoint and credential pair.
///
/// Owns a reusable pooled `reqwest::Client` configured with the endpoint's
/// timeout. Transient connection faults and 429/500/502/503/504 responses
/// are retried beneath [`ChatTransport::complete`] with exponential backoff;
/// the retry layer is transparent to the caller. Safe to share across
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: EndpointConfig,
    url: String,
    retry: RetryConfig,
}

impl HttpTransport {
    /// Creates a new transport from the given endpoint configuration.
    ///
    /// # Errors
    /// - [`TransportErrorKind::InvalidEndpoint`] if the base URL is empty or
    ///   not http/https
    /// - [`TransportErrorKind::RequestFailed`] if the HTTP client cannot be
    ///   built
    pub fn new(config: EndpointConfig) -> TransportResult<Self> {
        let endpoint = config.base_url().trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(TransportError::new(TransportErrorKind::InvalidEndpoint(
                config.base_url().clone(),
            )));
        }

        let timeout = Duration::from_secs(*config.timeout_secs());
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                TransportError::new(TransportErrorKind::RequestFailed {
                    status: None,
                    message: format!("Failed to build HTTP client: {}", e),
                })
            })?;

        let url = format!("{}/v1/chat/completions", endpoint.trim_end_matches('/'));

        Ok(Self {
            client,
            config,
            url,
            retry: RetryConfig::default(),
        })
    }

    /// Replaces the connection-level retry configuration.
    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Returns the full chat-completions URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Converts a reqwest error into the transport taxonomy.
    fn convert_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::new(TransportErrorKind::Timeout {
                timeout_secs: *self.config.timeout_secs(),
            })
        } else {
            TransportError::new(TransportErrorKind::RequestFailed {
                status: err.status().map(|s| s.as_u16()),
                message: err.to_string(),
            })
        }
    }

    /// One POST attempt, without retry.
    async fn send_once(&self, request: &CompletionRequest) -> TransportResult<CompletionResponse> {
        debug!("POST {}", self.url);
        let response = self
            .client
            .post(&self.url)
            .basic_auth(self.config.username(), Some(self.config.password()))
            .json(request)
            .send()
            .await
            .map_err(|e| self.convert_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let snippet = text.chars().take(240).collect::<String>();
            error!(status = %status, error = %snippet, "API error");
            return Err(TransportError::new(TransportErrorKind::RequestFailed {
                status: Some(status.as_u16()),
                message: snippet,
            }));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.convert_error(e))?;

        serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse response");
            TransportError::new(TransportErrorKind::RequestFailed {
                status: Some(status.as_u16()),
                message: format!("Failed to decode response: {}", e),
            })
        })
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    #[instrument(skip_all, fields(model = %request.model()))]
    async fn complete(&self, request: &CompletionRequest) -> TransportResult<CompletionResponse> {
        let response = retry_with_backoff(&self.retry, || self.send_once(request)).await?;

        debug!(choices = response.choices.len(), "Received response");
        Ok(response)
    }
}
