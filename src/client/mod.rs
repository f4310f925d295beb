//! HTTP client for the remote summarization endpoint.
//!
//! The endpoint is an opaque collaborator: `POST /summarize` turns text into
//! a shorter text, `GET /health` reports liveness. No retries and no
//! client-side timeout are applied; the transport's defaults decide.

mod error;
mod types;

pub use error::{SummarizeError, GENERIC_ERROR_MESSAGE};
pub use types::{HealthStatus, SummarizeRequest, SummarizeResponse};

use reqwest::Client;
use std::time::Instant;

use types::parse_error_detail;

/// Client bound to one summarization base URL.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct SummarizeClient {
    client: Client,
    base_url: String,
}

impl SummarizeClient {
    /// Create a client for `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, SummarizeError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send one summarization request.
    pub async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummarizeResponse, SummarizeError> {
        let url = self.endpoint("/summarize");

        tracing::debug!(
            url = %url,
            text_chars = request.text.chars().count(),
            max_length = request.max_length,
            "Sending summarization request"
        );

        let start = Instant::now();
        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let detail = parse_error_detail(&body);
            tracing::warn!(
                status = %status,
                latency_ms,
                detail = ?detail,
                "Summarization endpoint returned an error"
            );
            return Err(SummarizeError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed: SummarizeResponse =
            serde_json::from_str(&body).map_err(|e| SummarizeError::Parse(e.to_string()))?;

        tracing::debug!(
            status = %status,
            latency_ms,
            summary_chars = parsed.summary.chars().count(),
            "Summarization request succeeded"
        );

        Ok(parsed)
    }

    /// Probe `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, SummarizeError> {
        let url = self.endpoint("/health");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SummarizeError::Api {
                status: status.as_u16(),
                detail: parse_error_detail(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| SummarizeError::Parse(e.to_string()))
    }
}
