use crate::client::SummarizeClient;
use crate::ui::form::{
    FormState, PendingRequest, RequestOutcome, RequestToken, SummaryRequestController,
};

/// Step applied by Up/Down on the max-length field.
pub const MAX_LENGTH_STEP: i32 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Source,
    MaxLength,
    Submit,
    Clear,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Source => Focus::MaxLength,
            Focus::MaxLength => Focus::Submit,
            Focus::Submit => Focus::Clear,
            Focus::Clear => Focus::Source,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Source => Focus::Clear,
            Focus::MaxLength => Focus::Source,
            Focus::Submit => Focus::MaxLength,
            Focus::Clear => Focus::Submit,
        }
    }
}

/// UI-side wrapper around the form controller: focus, the raw text of the
/// max-length field and the spinner frame.
pub struct App {
    should_quit: bool,
    focus: Focus,
    controller: SummaryRequestController,
    /// What the user typed into the max-length field. The form holds the
    /// coerced number; this is resynced from it when focus leaves the field.
    max_length_input: String,
    animation_tick: u8,
}

impl App {
    pub fn new(controller: SummaryRequestController) -> Self {
        let max_length_input = controller.state().max_length.to_string();
        Self {
            should_quit: false,
            focus: Focus::Source,
            controller,
            max_length_input,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &FormState {
        self.controller.state()
    }

    pub fn client(&self) -> &SummarizeClient {
        self.controller.client()
    }

    pub fn base_url(&self) -> &str {
        self.controller.client().base_url()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == Focus::MaxLength && focus != Focus::MaxLength {
            self.sync_max_length_input();
        }
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn max_length_input(&self) -> &str {
        &self.max_length_input
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_tick(&mut self) {
        if self.state().is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    fn sync_max_length_input(&mut self) {
        self.max_length_input = self.state().max_length.to_string();
    }

    pub fn insert_char(&mut self, ch: char) {
        match self.focus {
            Focus::Source => {
                let mut buf = [0u8; 4];
                self.controller.append_source_text(ch.encode_utf8(&mut buf));
            }
            Focus::MaxLength if ch.is_ascii_digit() => {
                self.max_length_input.push(ch);
                self.controller.update_max_length(&self.max_length_input);
            }
            _ => {}
        }
    }

    pub fn insert_newline(&mut self) {
        if self.focus == Focus::Source {
            self.insert_char('\n');
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::Source => self.controller.delete_source_char(),
            Focus::MaxLength => {
                self.max_length_input.pop();
                self.controller.update_max_length(&self.max_length_input);
            }
            _ => {}
        }
    }

    pub fn on_paste(&mut self, pasted: &str) {
        match self.focus {
            Focus::Source => {
                let normalized = pasted.replace("\r\n", "\n").replace('\r', "\n");
                self.controller.append_source_text(&normalized);
            }
            Focus::MaxLength => {
                self.max_length_input
                    .extend(pasted.chars().filter(|c| c.is_ascii_digit()));
                self.controller.update_max_length(&self.max_length_input);
            }
            _ => {}
        }
    }

    pub fn step_max_length(&mut self, delta: i32) {
        self.controller.step_max_length(delta);
        self.sync_max_length_input();
    }

    /// Press the submit control. Returns the request to send, or `None`
    /// when the control is disabled.
    pub fn submit(&mut self) -> Option<PendingRequest> {
        if !self.state().can_submit() {
            return None;
        }
        self.animation_tick = 0;
        self.controller.begin_submit()
    }

    pub fn clear(&mut self) {
        self.controller.clear();
    }

    pub fn on_summary_completed(&mut self, token: RequestToken, outcome: RequestOutcome) -> bool {
        self.controller.complete(token, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        let client = SummarizeClient::new("http://127.0.0.1:9").unwrap();
        App::new(SummaryRequestController::new(client, 100))
    }

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Focus::Source.next().next().next().next(), Focus::Source);
        assert_eq!(Focus::Source.prev(), Focus::Clear);
        assert_eq!(Focus::Clear.next(), Focus::Source);
    }

    #[test]
    fn typing_edits_source() {
        let mut app = make_app();
        app.insert_char('h');
        app.insert_char('i');
        app.insert_newline();
        app.insert_char('!');
        assert_eq!(app.state().source_text, "hi\n!");
        app.backspace();
        assert_eq!(app.state().source_text, "hi\n");
    }

    #[test]
    fn max_length_accepts_digits_only() {
        let mut app = make_app();
        app.set_focus(Focus::MaxLength);
        app.backspace();
        app.backspace();
        app.backspace();
        assert_eq!(app.max_length_input(), "");
        assert_eq!(app.state().max_length, 100);

        app.insert_char('2');
        app.insert_char('x');
        app.insert_char('5');
        app.insert_char('0');
        assert_eq!(app.max_length_input(), "250");
        assert_eq!(app.state().max_length, 250);
    }

    #[test]
    fn leaving_max_length_resyncs_input() {
        let mut app = make_app();
        app.set_focus(Focus::MaxLength);
        app.backspace();
        app.backspace();
        app.backspace();
        app.focus_next();
        assert_eq!(app.max_length_input(), "100");
    }

    #[test]
    fn stepping_clamps_and_resyncs() {
        let mut app = make_app();
        app.set_focus(Focus::MaxLength);
        app.step_max_length(MAX_LENGTH_STEP);
        assert_eq!(app.state().max_length, 110);
        assert_eq!(app.max_length_input(), "110");
    }

    #[test]
    fn paste_normalizes_line_endings() {
        let mut app = make_app();
        app.on_paste("one\r\ntwo\rthree");
        assert_eq!(app.state().source_text, "one\ntwo\nthree");
    }

    #[test]
    fn paste_appends_after_typed_text() {
        let mut app = make_app();
        app.insert_char('é');
        app.on_paste("tude");
        app.on_paste(" longue");
        assert_eq!(app.state().source_text, "étude longue");

        app.backspace();
        assert_eq!(app.state().source_text, "étude longu");
    }

    #[test]
    fn submit_is_disabled_for_blank_text() {
        let mut app = make_app();
        app.on_paste("   ");
        assert!(app.submit().is_none());
        // The disabled control never reaches validation.
        assert!(app.state().error_message.is_empty());
    }

    #[test]
    fn submit_is_disabled_while_loading() {
        let mut app = make_app();
        app.on_paste("hello world");
        assert!(app.submit().is_some());
        assert!(app.submit().is_none());
    }

    #[test]
    fn tick_animates_only_while_loading() {
        let mut app = make_app();
        app.on_tick();
        assert_eq!(app.animation_tick(), 0);

        app.on_paste("hello world");
        let _pending = app.submit().unwrap();
        app.on_tick();
        app.on_tick();
        assert_eq!(app.animation_tick(), 2);
    }

    #[test]
    fn completion_updates_summary() {
        let mut app = make_app();
        app.on_paste("hello world");
        let pending = app.submit().unwrap();
        assert!(app.on_summary_completed(
            pending.token,
            RequestOutcome::Succeeded {
                summary: "hi".into()
            }
        ));
        assert_eq!(app.state().summary_text, "hi");
        assert!(!app.state().is_loading());
    }
}
