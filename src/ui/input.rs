use crate::ui::app::{App, Focus, MAX_LENGTH_STEP};
use crate::ui::form::PendingRequest;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug)]
pub enum InputAction {
    /// Handled internally.
    None,
    /// A request was dispatched and must be sent.
    Submit(PendingRequest),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return InputAction::None;
    }
    if is_ctrl_char(key, 's')
        || (key.code == KeyCode::Enter && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return submit(app);
    }
    if is_ctrl_char(key, 'l') {
        app.clear();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return InputAction::None;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return InputAction::None;
        }
        _ => {}
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
    {
        return InputAction::None;
    }

    match (app.focus(), key.code) {
        (Focus::Source, KeyCode::Char(ch)) => app.insert_char(ch),
        (Focus::Source, KeyCode::Enter) => app.insert_newline(),
        (Focus::Source, KeyCode::Backspace) => app.backspace(),

        (Focus::MaxLength, KeyCode::Char(ch)) => app.insert_char(ch),
        (Focus::MaxLength, KeyCode::Backspace) => app.backspace(),
        (Focus::MaxLength, KeyCode::Up) => app.step_max_length(MAX_LENGTH_STEP),
        (Focus::MaxLength, KeyCode::Down) => app.step_max_length(-MAX_LENGTH_STEP),
        (Focus::MaxLength, KeyCode::Enter) => app.focus_next(),

        (Focus::Submit, KeyCode::Enter | KeyCode::Char(' ')) => return submit(app),
        (Focus::Clear, KeyCode::Enter | KeyCode::Char(' ')) => app.clear(),

        (Focus::Submit, KeyCode::Left | KeyCode::Right) => app.set_focus(Focus::Clear),
        (Focus::Clear, KeyCode::Left | KeyCode::Right) => app.set_focus(Focus::Submit),
        _ => {}
    }
    InputAction::None
}

fn submit(app: &mut App) -> InputAction {
    match app.submit() {
        Some(pending) => InputAction::Submit(pending),
        None => InputAction::None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
