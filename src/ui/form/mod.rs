//! The summarization form.
//!
//! - `state.rs` - form fields, request tokens, max-length coercion
//! - `intent.rs` - edits, submissions and request completions
//! - `reducer.rs` - state transitions
//! - `controller.rs` - owns state and client, drives submissions
//! - `stats.rs` - length statistics for the summary panel

mod controller;
mod intent;
mod reducer;
mod state;
mod stats;

pub use controller::{PendingRequest, SummaryRequestController};
pub use intent::{FormIntent, RequestOutcome};
pub use reducer::FormReducer;
pub use state::{
    parse_max_length, step_max_length, FormState, RequestToken, DEFAULT_MAX_LENGTH,
    EMPTY_SOURCE_MESSAGE, MAX_LENGTH_HINT_MAX, MAX_LENGTH_HINT_MIN,
};
pub use stats::{compression_percent, SummaryStats};
