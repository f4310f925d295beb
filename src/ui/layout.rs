use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Areas of the form inside the body. Error and summary areas have zero
/// height when there is nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRegions {
    pub source: Rect,
    pub max_length: Rect,
    pub buttons: Rect,
    pub error: Rect,
    pub summary: Rect,
    pub stats: Rect,
}

pub fn form_regions(body: Rect, show_error: bool, show_summary: bool) -> FormRegions {
    let error_height = if show_error { 3 } else { 0 };
    let (summary_height, stats_height) = if show_summary {
        ((body.height / 3).max(3), 1)
    } else {
        (0, 0)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(error_height),
            Constraint::Length(summary_height),
            Constraint::Length(stats_height),
        ])
        .split(body);

    FormRegions {
        source: chunks[0],
        max_length: chunks[1],
        buttons: chunks[2],
        error: chunks[3],
        summary: chunks[4],
        stats: chunks[5],
    }
}
