use crate::narrative::NarrativeRequest;
use crate::narrative::client::new_client;
use async_trait::async_trait;
use reqwest::{Client, header};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, instrument, warn};

/// Rephrases a justification into one sentence. The output is decoration only, never a source of truth.
#[async_trait]
pub trait NarrativeRewriter: Send + Sync {
    async fn rewrite(&self, request: &NarrativeRequest) -> Result<String, NarrativeError>;
}

/// Returns the plain sentence built from the request, without calling anything.
#[derive(Debug, Default)]
pub struct StaticRewriter;

#[async_trait]
impl NarrativeRewriter for StaticRewriter {
    async fn rewrite(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
        Ok(request.fallback_sentence())
    }
}

#[derive(Debug, Clone)]
pub struct RewriterConfig {
    pub url: String,
    pub api_key: String,
    pub timeout: Duration,
    pub retry_ms: u64,
    pub retry_max_delay: Duration,
    pub max_retries: usize,
}

#[derive(Debug)]
pub struct HttpNarrativeRewriter {
    client: Client,
    config: RewriterConfig,
}

#[derive(Debug, Deserialize)]
struct RewriteResponse {
    text: String,
}

impl HttpNarrativeRewriter {
    pub fn new(config: RewriterConfig) -> Result<Self, NarrativeError> {
        let client = new_client(&config.api_key, config.timeout)?;
        Ok(HttpNarrativeRewriter { client, config })
    }

    async fn request_rewrite(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
        let response = self
            .client
            .post(format!("{}/rewrite", self.config.url))
            .json(request)
            .send()
            .await?
            .error_for_status()
            .inspect_err(|e| warn!("⚠️ Rewrite request failed: {}", e))?;

        let text = response.json::<RewriteResponse>().await?.text.trim().to_string();
        if text.is_empty() {
            return Err(NarrativeError::EmptyText);
        }

        if !text.to_lowercase().contains(&request.slot.to_lowercase()) {
            return Err(NarrativeError::MissingSlot(request.slot.clone()));
        }

        Ok(text)
    }
}

#[async_trait]
impl NarrativeRewriter for HttpNarrativeRewriter {
    #[instrument(skip_all, fields(slot = %request.slot))]
    async fn rewrite(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
        let strategy = ExponentialBackoff::from_millis(self.config.retry_ms)
            .factor(2)
            .max_delay(self.config.retry_max_delay)
            .map(jitter)
            .take(self.config.max_retries);

        debug!("✍️ Rewriting justification...");
        let text = RetryIf::spawn(strategy, || self.request_rewrite(request), NarrativeError::is_transient).await?;
        debug!("✍️ Rewriting justification... OK");

        Ok(text)
    }
}

#[derive(Error, Debug)]
pub enum NarrativeError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("narrative client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
    #[error("rewriter returned an empty text")]
    EmptyText,
    #[error("rewriter dropped the slot name '{0}'")]
    MissingSlot(String),
}

impl NarrativeError {
    pub fn is_transient(&self) -> bool {
        matches!(self, NarrativeError::Request(_))
    }
}
