//! Key hints for the form. The hints follow the focused field, and the
//! summarize hint dims while the submit control is disabled.

use crate::ui::app::Focus;
use crate::ui::theme::{DISABLED_TEXT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One `key: action` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
    pub enabled: bool,
}

impl KeyHint {
    const fn new(key: &'static str, action: &'static str) -> Self {
        Self {
            key,
            action,
            enabled: true,
        }
    }
}

/// Hints for the current focus, field-specific ones first.
pub fn key_hints(focus: Focus, can_submit: bool) -> Vec<KeyHint> {
    let mut hints = match focus {
        Focus::Source => vec![KeyHint::new("Enter", "Newline")],
        Focus::MaxLength => vec![KeyHint::new("Up/Down", "Step")],
        Focus::Submit => vec![KeyHint {
            enabled: can_submit,
            ..KeyHint::new("Enter", "Summarize")
        }],
        Focus::Clear => vec![KeyHint::new("Enter", "Clear")],
    };
    hints.extend([
        KeyHint::new("Tab", "Next field"),
        KeyHint {
            enabled: can_submit,
            ..KeyHint::new("Ctrl+S", "Summarize")
        },
        KeyHint::new("Ctrl+L", "Clear"),
        KeyHint::new("Ctrl+Q", "Quit"),
    ]);
    hints
}

pub fn footer_widget(focus: Focus, can_submit: bool, width: u16) -> Paragraph<'static> {
    let active = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let inactive = Style::default().fg(DISABLED_TEXT);
    let separator = Style::default().fg(HEADER_SEPARATOR);

    let mut spans = vec![Span::raw(" ")];
    let mut used = 1;
    for (i, hint) in key_hints(focus, can_submit).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", separator));
            used += 3;
        }
        let label = format!("{}: {}", hint.key, hint.action);
        used += label.chars().count();
        let style = if hint.enabled {
            active
        } else {
            inactive.add_modifier(Modifier::CROSSED_OUT)
        };
        spans.push(Span::styled(label, style));
    }

    let version = format!("v{} ", VERSION);
    let content_width = width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(used)
        .saturating_sub(version.chars().count());
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(version, active));

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
