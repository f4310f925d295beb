//! State of the summarization form.

use std::fmt;

use uuid::Uuid;

use crate::client::SummarizeRequest;
use crate::ui::mvi::UiState;

use super::stats::SummaryStats;

/// Maximum summary length used when nothing (or nothing numeric) is entered.
pub const DEFAULT_MAX_LENGTH: u32 = 100;

/// Lower bound of the max-length stepper.
pub const MAX_LENGTH_HINT_MIN: u32 = 10;

/// Upper bound of the max-length stepper.
pub const MAX_LENGTH_HINT_MAX: u32 = 1000;

/// Shown when submitting blank source text.
pub const EMPTY_SOURCE_MESSAGE: &str = "Please enter some text to summarize";

/// Identifies one dispatched summarization request.
///
/// Only the completion carrying the token of the latest dispatched request
/// is applied to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(Uuid);

impl RequestToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Everything the form shows, held for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub source_text: String,
    pub max_length: u32,
    pub summary_text: String,
    pub error_message: String,
    /// Token of the in-flight request, if any.
    pub pending: Option<RequestToken>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::with_max_length(DEFAULT_MAX_LENGTH)
    }
}

impl UiState for FormState {}

impl FormState {
    /// Fresh form with a configured default max length.
    pub fn with_max_length(max_length: u32) -> Self {
        Self {
            source_text: String::new(),
            max_length,
            summary_text: String::new(),
            error_message: String::new(),
            pending: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// True when the source text has something other than whitespace.
    pub fn has_source(&self) -> bool {
        !self.source_text.trim().is_empty()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.has_source()
    }

    /// Stats for the summary panel; `None` while there is no summary.
    pub fn stats(&self) -> Option<SummaryStats> {
        if self.summary_text.is_empty() {
            return None;
        }
        Some(SummaryStats::compute(&self.source_text, &self.summary_text))
    }

    /// Request body built from the current fields.
    pub fn request(&self) -> SummarizeRequest {
        SummarizeRequest {
            text: self.source_text.clone(),
            max_length: self.max_length,
        }
    }
}

/// Coerce free-form input into a max length.
///
/// Reads a leading integer the way a numeric input does: surrounding
/// whitespace and trailing garbage are ignored. No digits, zero, negative
/// values and overflow all fall back to [`DEFAULT_MAX_LENGTH`].
pub fn parse_max_length(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    if negative || end == 0 {
        return DEFAULT_MAX_LENGTH;
    }

    match unsigned[..end].parse::<u32>() {
        Ok(value) if value > 0 => value,
        _ => DEFAULT_MAX_LENGTH,
    }
}

/// Move the max length by `delta`, clamped to the stepper range.
pub fn step_max_length(current: u32, delta: i32) -> u32 {
    let next = i64::from(current) + i64::from(delta);
    next.clamp(i64::from(MAX_LENGTH_HINT_MIN), i64::from(MAX_LENGTH_HINT_MAX)) as u32
}
