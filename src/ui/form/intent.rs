//! Intents for the summarization form.

use crate::client::{SummarizeError, SummarizeResponse};
use crate::ui::mvi::Intent;

use super::state::RequestToken;

/// Result of one summarization request, reduced to what the form shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Succeeded { summary: String },
    Failed { message: String },
}

impl From<Result<SummarizeResponse, SummarizeError>> for RequestOutcome {
    fn from(result: Result<SummarizeResponse, SummarizeError>) -> Self {
        match result {
            Ok(response) => RequestOutcome::Succeeded {
                summary: response.summary,
            },
            Err(err) => RequestOutcome::Failed {
                message: err.user_message(),
            },
        }
    }
}

/// Actions that change the form.
#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Replace the source text.
    EditSource { text: String },

    /// Append typed or pasted text to the source.
    AppendSource { text: String },

    /// Remove the last character of the source.
    DeleteSourceChar,

    /// Replace the max length from raw input.
    EditMaxLength { raw: String },

    /// Nudge the max length by the stepper.
    StepMaxLength { delta: i32 },

    /// Validate and mark `token` as the in-flight request.
    Submit { token: RequestToken },

    /// A request finished.
    Completed {
        token: RequestToken,
        outcome: RequestOutcome,
    },

    /// Reset text, summary and error.
    Clear,
}

impl Intent for FormIntent {}
