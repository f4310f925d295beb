//! The form controller: owns the form state and the endpoint client.

use crate::client::{SummarizeClient, SummarizeRequest};
use crate::ui::mvi::Reducer;

use super::intent::{FormIntent, RequestOutcome};
use super::reducer::FormReducer;
use super::state::{FormState, RequestToken};

/// A request that passed validation and is waiting to be sent.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub token: RequestToken,
    pub request: SummarizeRequest,
}

impl PendingRequest {
    /// Send the request. The outcome goes back through
    /// [`SummaryRequestController::complete`] with the same token.
    pub async fn execute(&self, client: &SummarizeClient) -> RequestOutcome {
        RequestOutcome::from(client.summarize(&self.request).await)
    }
}

/// Mediates between user edits and the summarization endpoint.
///
/// Submission is split in two so an event loop can send the request
/// elsewhere and feed the result back later:
/// [`begin_submit`](Self::begin_submit) validates and hands out a
/// [`PendingRequest`], [`complete`](Self::complete) applies its outcome.
/// Starting a new submission supersedes the one in flight; the superseded
/// response is dropped when it arrives.
pub struct SummaryRequestController {
    state: FormState,
    client: SummarizeClient,
}

impl SummaryRequestController {
    pub fn new(client: SummarizeClient, default_max_length: u32) -> Self {
        Self {
            state: FormState::with_max_length(default_max_length),
            client,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn client(&self) -> &SummarizeClient {
        &self.client
    }

    fn dispatch(&mut self, intent: FormIntent) {
        self.state = FormReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn update_source_text(&mut self, text: impl Into<String>) {
        self.dispatch(FormIntent::EditSource { text: text.into() });
    }

    /// Append to the source without copying what is already there.
    pub fn append_source_text(&mut self, text: &str) {
        self.dispatch(FormIntent::AppendSource {
            text: text.to_string(),
        });
    }

    pub fn delete_source_char(&mut self) {
        self.dispatch(FormIntent::DeleteSourceChar);
    }

    pub fn update_max_length(&mut self, raw: &str) {
        self.dispatch(FormIntent::EditMaxLength {
            raw: raw.to_string(),
        });
    }

    pub fn step_max_length(&mut self, delta: i32) {
        self.dispatch(FormIntent::StepMaxLength { delta });
    }

    pub fn clear(&mut self) {
        self.dispatch(FormIntent::Clear);
    }

    /// Validate and mark a new request as in flight.
    ///
    /// Returns `None` when the source text is blank; the validation message
    /// is then already in the state and nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<PendingRequest> {
        let token = RequestToken::new();
        if let Some(previous) = self.state.pending {
            tracing::debug!(%previous, superseded_by = %token, "Superseding in-flight request");
        }

        self.dispatch(FormIntent::Submit { token });

        if self.state.pending != Some(token) {
            tracing::debug!("Submit rejected: source text is blank");
            return None;
        }

        let request = self.state.request();
        tracing::info!(
            %token,
            text_chars = request.text.chars().count(),
            max_length = request.max_length,
            "Dispatching summarization request"
        );
        Some(PendingRequest { token, request })
    }

    /// Apply the outcome of request `token`.
    ///
    /// Returns `false` (and changes nothing) when `token` is not the latest
    /// dispatched request.
    pub fn complete(&mut self, token: RequestToken, outcome: RequestOutcome) -> bool {
        if self.state.pending != Some(token) {
            tracing::debug!(%token, "Discarding response of superseded request");
            return false;
        }

        match &outcome {
            RequestOutcome::Succeeded { summary } => {
                tracing::info!(%token, summary_chars = summary.chars().count(), "Summary received");
            }
            RequestOutcome::Failed { message } => {
                tracing::warn!(%token, error = %message, "Summarization failed");
            }
        }

        self.dispatch(FormIntent::Completed { token, outcome });
        true
    }

    /// Validate, send and reconcile in one go.
    pub async fn submit(&mut self) {
        let Some(pending) = self.begin_submit() else {
            return;
        };
        let outcome = pending.execute(&self.client).await;
        self.complete(pending.token, outcome);
    }
}
