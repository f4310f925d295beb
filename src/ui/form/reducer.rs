//! Reducer for the summarization form.

use crate::ui::mvi::Reducer;

use super::intent::{FormIntent, RequestOutcome};
use super::state::{parse_max_length, step_max_length, FormState, EMPTY_SOURCE_MESSAGE};

/// State transitions of the form.
///
/// ```text
/// Idle ──Submit──→ Pending ──Completed──→ Idle (summary | error)
///   └──Submit (blank)──→ Idle (validation error)
/// ```
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::EditSource { text } => FormState {
                source_text: text,
                ..state
            },

            FormIntent::AppendSource { text } => {
                let mut source_text = state.source_text;
                source_text.push_str(&text);
                FormState {
                    source_text,
                    ..state
                }
            }

            FormIntent::DeleteSourceChar => {
                let mut source_text = state.source_text;
                source_text.pop();
                FormState {
                    source_text,
                    ..state
                }
            }

            FormIntent::EditMaxLength { raw } => FormState {
                max_length: parse_max_length(&raw),
                ..state
            },

            FormIntent::StepMaxLength { delta } => FormState {
                max_length: step_max_length(state.max_length, delta),
                ..state
            },

            FormIntent::Submit { token } => {
                if !state.has_source() {
                    // Also drops any in-flight request so loading ends here.
                    FormState {
                        error_message: EMPTY_SOURCE_MESSAGE.to_string(),
                        pending: None,
                        ..state
                    }
                } else {
                    FormState {
                        error_message: String::new(),
                        pending: Some(token),
                        ..state
                    }
                }
            }

            FormIntent::Completed { token, outcome } => {
                if state.pending != Some(token) {
                    return state;
                }
                match outcome {
                    RequestOutcome::Succeeded { summary } => FormState {
                        summary_text: summary,
                        error_message: String::new(),
                        pending: None,
                        ..state
                    },
                    RequestOutcome::Failed { message } => FormState {
                        error_message: message,
                        pending: None,
                        ..state
                    },
                }
            }

            FormIntent::Clear => FormState {
                source_text: String::new(),
                summary_text: String::new(),
                error_message: String::new(),
                ..state
            },
        }
    }
}
