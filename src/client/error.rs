//! Errors from the summarization endpoint.

use thiserror::Error;

/// Message shown when the endpoint gives no usable detail.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while summarizing";

/// Errors that can occur while talking to the summarization endpoint.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Connection, TLS or body read failure.
    #[error("Request to summarization endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("Summarization endpoint returned {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// Success status but the body was not the expected JSON.
    #[error("Failed to parse summarization response: {0}")]
    Parse(String),
}

impl SummarizeError {
    /// Server-supplied detail message, if the endpoint sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            SummarizeError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message for display: the server detail, or the generic fallback.
    pub fn user_message(&self) -> String {
        self.detail().unwrap_or(GENERIC_ERROR_MESSAGE).to_string()
    }
}
