use crate::errors::TalkResult;
use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use log::error;
use std::time::Duration;
use tokio::sync::mpsc;

/// Everything that may mutate the [`crate::app::App`]. Terminal input and
/// transport completions are funneled into one queue so that a single task
/// owns all state mutation; background tasks only ever hold a sender.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// A transport request finished, successfully or not. Sent from the
    /// spawned request task; applied to the conversation only on the UI task.
    BotReply(TalkResult<String>),
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let tx_events = tx.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            while let Some(result) = reader.next().await {
                let evt = match result {
                    Ok(evt) => evt,
                    Err(e) => {
                        error!("terminal event stream failed: {}", e);
                        break;
                    }
                };
                let app_event = match evt {
                    // Key releases are noise on terminals that report them.
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        Some(AppEvent::Key(key))
                    }
                    Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
                    _ => None,
                };
                if let Some(event) = app_event {
                    if tx_events.send(event).is_err() {
                        break;
                    }
                }
            }
        });

        let tx_tick = tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);
            loop {
                interval.tick().await;
                if tx_tick.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, tx }
    }

    /// Sender handle for background tasks (one per in-flight request).
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}
