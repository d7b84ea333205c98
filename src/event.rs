use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::api::ApiEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Api(ApiEvent),
}

pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let input_tx = tx.clone();

        thread::spawn(move || {
            loop {
                if !event::poll(poll_interval).unwrap_or(false) {
                    continue;
                }
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => input_tx.send(AppEvent::Key(key)),
                    Ok(Event::Resize(w, h)) => input_tx.send(AppEvent::Resize(w, h)),
                    _ => Ok(()),
                };
                if forwarded.is_err() {
                    return;
                }
            }
        });

        Self { rx, tx }
    }

    /// Sender for background tasks that report back into the main loop.
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}
