use crate::client::SummarizeClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::form::{PendingRequest, SummaryRequestController};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{self, Sender};
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive form until the user quits.
///
/// Requests run on `runtime`; their outcomes come back through the event
/// channel so every state change happens on this thread.
pub fn run(controller: SummaryRequestController, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let mut app = App::new(controller);
    let events = EventHandler::new(tick_rate)?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let InputAction::Submit(pending) = handle_key(&mut app, key) {
                    spawn_request(&runtime, app.client().clone(), pending, events.sender());
                }
            }
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::SummaryCompleted { token, outcome }) => {
                app.on_summary_completed(token, outcome);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn spawn_request(
    runtime: &Handle,
    client: SummarizeClient,
    pending: PendingRequest,
    tx: Sender<AppEvent>,
) {
    runtime.spawn(async move {
        let token = pending.token;
        let outcome = pending.execute(&client).await;
        if tx
            .send(AppEvent::SummaryCompleted { token, outcome })
            .is_err()
        {
            tracing::trace!(%token, "Summary completion dropped (UI closed)");
        }
    });
}
