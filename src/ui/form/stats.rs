//! Length statistics shown under a summary.

use std::fmt;

/// Character counts of source and summary plus the compression they imply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStats {
    pub source_chars: usize,
    pub summary_chars: usize,
    /// Rounded percentage reduction; `None` for an empty source.
    pub compression_percent: Option<i64>,
}

impl SummaryStats {
    pub fn compute(source: &str, summary: &str) -> Self {
        let source_chars = source.chars().count();
        let summary_chars = summary.chars().count();
        Self {
            source_chars,
            summary_chars,
            compression_percent: compression_percent(source_chars, summary_chars),
        }
    }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Original: {} characters | Summary: {} characters",
            self.source_chars, self.summary_chars
        )?;
        if let Some(percent) = self.compression_percent {
            write!(f, " | Compression: {}%", percent)?;
        }
        Ok(())
    }
}

/// `1 - summary / source` as a percentage, rounded half up.
///
/// Negative when the summary is longer than the source.
pub fn compression_percent(source_chars: usize, summary_chars: usize) -> Option<i64> {
    if source_chars == 0 {
        return None;
    }
    let ratio = 1.0 - summary_chars as f64 / source_chars as f64;
    Some((ratio * 100.0 + 0.5).floor() as i64)
}
