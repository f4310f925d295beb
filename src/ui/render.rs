use crate::ui::app::{App, Focus};
use crate::ui::footer::footer_widget;
use crate::ui::form::{FormState, MAX_LENGTH_HINT_MAX, MAX_LENGTH_HINT_MIN};
use crate::ui::header::Header;
use crate::ui::layout::{form_regions, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISABLED_TEXT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT,
    STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const SOURCE_PLACEHOLDER: &str = "Paste your text here...";

pub fn draw(frame: &mut Frame, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    let state = app.state();

    frame.render_widget(Header::new().widget(app.base_url()), header);
    frame.render_widget(
        footer_widget(app.focus(), state.can_submit(), footer.width),
        footer,
    );

    let stats = state.stats();
    let regions = form_regions(body, !state.error_message.is_empty(), stats.is_some());

    render_source(frame, regions.source, app);
    render_max_length(frame, regions.max_length, app);
    frame.render_widget(Paragraph::new(button_line(app)), regions.buttons);

    if !state.error_message.is_empty() {
        let error = Paragraph::new(state.error_message.as_str())
            .style(Style::default().fg(STATUS_ERROR))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(STATUS_ERROR)),
            );
        frame.render_widget(error, regions.error);
    }

    if let Some(stats) = stats {
        let summary = Paragraph::new(state.summary_text.as_str())
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(Span::styled(" Summary ", Style::default().fg(ACCENT)))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(STATUS_OK)),
            );
        frame.render_widget(summary, regions.summary);

        let mut spans = vec![
            Span::raw(format!(" Original: {} characters", stats.source_chars)),
            Span::raw(format!("   Summary: {} characters", stats.summary_chars)),
        ];
        if let Some(percent) = stats.compression_percent {
            spans.push(Span::raw(format!("   Compression: {}%", percent)));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().fg(HEADER_TEXT)),
            regions.stats,
        );
    }
}

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn render_source(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Source;
    let block = field_block(" Enter text to summarize ", focused);
    let inner = block.inner(area);
    let text = &app.state().source_text;

    if text.is_empty() {
        let placeholder = Paragraph::new(SOURCE_PLACEHOLDER)
            .style(Style::default().fg(DISABLED_TEXT))
            .block(block);
        frame.render_widget(placeholder, area);
        if focused && inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let width = inner.width.max(1) as usize;
    let rows = wrap_rows(text, width);
    let (cursor_row, cursor_col) = cursor_cell(&rows, width);
    let offset = source_scroll(cursor_row + 1, inner.height);

    let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(HEADER_TEXT))
        .scroll((offset, 0))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let row = (cursor_row.min(u16::MAX as usize) as u16)
            .saturating_sub(offset)
            .min(inner.height.saturating_sub(1));
        let col = (cursor_col as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + col, inner.y + row));
    }
}

/// Soft-wrap `text` into rows of at most `width` characters, breaking after
/// the last space that fits and splitting words longer than a row.
fn wrap_rows(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        let mut start = 0;
        while chars.len() - start > width {
            let window = &chars[start..start + width];
            let cut = match window.iter().rposition(|c| *c == ' ') {
                Some(space) => start + space + 1,
                None => start + width,
            };
            rows.push(chars[start..cut].iter().collect());
            start = cut;
        }
        rows.push(chars[start..].iter().collect());
    }
    rows
}

/// Row and column where the next typed character lands. A full last row
/// pushes the cursor to the start of the row below.
fn cursor_cell(rows: &[String], width: usize) -> (usize, usize) {
    let last_row = rows.len().saturating_sub(1);
    let last_len = rows.last().map_or(0, |row| row.chars().count());
    if last_len >= width {
        (last_row + 1, 0)
    } else {
        (last_row, last_len)
    }
}

/// First visible row so that the last of `row_count` rows stays on screen.
fn source_scroll(row_count: usize, height: u16) -> u16 {
    row_count.saturating_sub(height as usize).min(u16::MAX as usize) as u16
}

fn render_max_length(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::MaxLength;
    let block = field_block(" Maximum summary length ", focused);
    let inner = block.inner(area);
    let input = app.max_length_input();

    let line = Line::from(vec![
        Span::styled(input.to_string(), Style::default().fg(HEADER_TEXT)),
        Span::styled(
            format!(
                "   ({}-{}, Up/Down to step)",
                MAX_LENGTH_HINT_MIN, MAX_LENGTH_HINT_MAX
            ),
            Style::default().fg(DISABLED_TEXT),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let col = (input.chars().count() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + col, inner.y));
    }
}

/// Label of the submit control.
fn submit_label(state: &FormState, animation_tick: u8) -> String {
    if state.is_loading() {
        let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
        format!(" {} Summarizing... ", spinner)
    } else {
        " Summarize ".to_string()
    }
}

fn button_style(focused: bool, enabled: bool) -> Style {
    let mut style = if enabled {
        Style::default().fg(HEADER_TEXT)
    } else {
        Style::default().fg(DISABLED_TEXT)
    };
    if focused {
        style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
    }
    style
}

fn button_line(app: &App) -> Line<'static> {
    let state = app.state();
    let submit_style = button_style(app.focus() == Focus::Submit, state.can_submit());
    let clear_style = button_style(app.focus() == Focus::Clear, true);

    Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("[{}]", submit_label(state, app.animation_tick())),
            submit_style,
        ),
        Span::raw("   "),
        Span::styled("[ Clear ]", clear_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SummarizeClient;
    use crate::ui::form::{RequestOutcome, RequestToken, SummaryRequestController};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_app() -> App {
        let client = SummarizeClient::new("http://localhost:8000").unwrap();
        App::new(SummaryRequestController::new(client, 100))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn idle_form_shows_placeholder_and_no_summary() {
        let app = make_app();
        let screen = render(&app);
        assert!(screen.contains("Paste your text here..."));
        assert!(screen.contains("[ Summarize ]"));
        assert!(screen.contains("http://localhost:8000"));
        assert!(!screen.contains("Summary "));
        assert!(!screen.contains("Compression"));
    }

    #[test]
    fn footer_follows_focus() {
        let mut app = make_app();
        assert!(render(&app).contains("Enter: Newline"));
        app.set_focus(Focus::MaxLength);
        let screen = render(&app);
        assert!(screen.contains("Up/Down: Step"));
        assert!(screen.contains("Ctrl+S: Summarize"));
    }

    #[test]
    fn loading_shows_summarizing_label() {
        let mut app = make_app();
        app.on_paste("hello world");
        let _pending = app.submit().unwrap();
        let screen = render(&app);
        assert!(screen.contains("Summarizing..."));
    }

    #[test]
    fn summary_panel_shows_stats() {
        let mut app = make_app();
        app.on_paste(&"a".repeat(100));
        let pending = app.submit().unwrap();
        app.on_summary_completed(
            pending.token,
            RequestOutcome::Succeeded {
                summary: "b".repeat(25),
            },
        );
        let screen = render(&app);
        assert!(screen.contains("Original: 100 characters"));
        assert!(screen.contains("Summary: 25 characters"));
        assert!(screen.contains("Compression: 75%"));
    }

    #[test]
    fn error_message_is_rendered() {
        let mut app = make_app();
        app.on_paste("hello world");
        let pending = app.submit().unwrap();
        app.on_summary_completed(
            pending.token,
            RequestOutcome::Failed {
                message: "too long".into(),
            },
        );
        let screen = render(&app);
        assert!(screen.contains("too long"));
        assert!(screen.contains("[ Summarize ]"));
    }

    #[test]
    fn submit_label_cycles_spinner() {
        let mut state = FormState::default();
        assert_eq!(submit_label(&state, 3), " Summarize ");
        state.pending = Some(RequestToken::new());
        assert_eq!(submit_label(&state, 0), " ⠋ Summarizing... ");
        assert_eq!(submit_label(&state, 11), " ⠙ Summarizing... ");
    }

    #[test]
    fn long_single_line_wraps_to_its_end() {
        let mut app = make_app();
        app.on_paste(&format!("{} TAILMARKER", "word ".repeat(40)));
        let screen = render(&app);
        assert!(screen.contains("TAILMARKER"));
        assert!(screen.contains("word word"));
    }

    #[test]
    fn many_lines_scroll_to_the_last() {
        let mut app = make_app();
        let text: Vec<String> = (0..60).map(|n| format!("line {n}")).collect();
        app.on_paste(&format!("{}\nLASTLINE", text.join("\n")));
        let screen = render(&app);
        assert!(screen.contains("LASTLINE"));
        assert!(!screen.contains("line 0 "));
    }

    #[test]
    fn wrap_breaks_after_spaces_and_splits_long_words() {
        assert_eq!(wrap_rows("aaaa bbbb", 5), vec!["aaaa ", "bbbb"]);
        assert_eq!(wrap_rows("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_rows("one\n\ntwo", 10), vec!["one", "", "two"]);
        assert_eq!(wrap_rows("", 10), vec![""]);
    }

    #[test]
    fn cursor_moves_down_after_a_full_row() {
        let rows = wrap_rows("abcdef", 3);
        assert_eq!(cursor_cell(&rows, 3), (2, 0));
        let rows = wrap_rows("abcd", 3);
        assert_eq!(cursor_cell(&rows, 3), (1, 1));
    }

    #[test]
    fn scroll_keeps_last_line_visible() {
        assert_eq!(source_scroll(3, 5), 0);
        assert_eq!(source_scroll(12, 5), 7);
    }
}
