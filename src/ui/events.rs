use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::ui::form::{RequestOutcome, RequestToken};

/// Everything the UI loop reacts to. All form state changes happen on
/// the loop thread in response to one of these.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize,
    /// A summarization request finished on the async runtime.
    SummaryCompleted {
        token: RequestToken,
        outcome: RequestOutcome,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Start the terminal input thread. It stops once the handler is dropped.
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || input_loop(event_tx, tick_rate))?;

        Ok(Self { rx, tx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

fn input_loop(tx: Sender<AppEvent>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        let forwarded = match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)).is_ok(),
                Ok(Event::Paste(text)) => tx.send(AppEvent::Paste(text)).is_ok(),
                Ok(Event::Resize(_, _)) => tx.send(AppEvent::Resize).is_ok(),
                Ok(_) => true,
                Err(err) => {
                    tracing::error!(error = %err, "Failed to read terminal event");
                    false
                }
            },
            Ok(false) => true,
            Err(err) => {
                tracing::error!(error = %err, "Failed to poll terminal events");
                false
            }
        };
        if !forwarded {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
