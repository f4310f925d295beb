//! Wire types for the summarization endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub max_length: u32,
}

/// Successful `POST /summarize` response.
///
/// Only `summary` drives the form; the length fields are reported by some
/// servers and kept for callers that want them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    #[serde(default)]
    pub original_length: Option<usize>,
    #[serde(default)]
    pub summary_length: Option<usize>,
}

/// `GET /health` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Error body returned by the endpoint on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Value,
}

/// Extract the `detail` string from an error body.
///
/// Anything other than a non-empty string (missing body, structured
/// validation errors, empty text) yields `None`.
pub(crate) fn parse_error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}
