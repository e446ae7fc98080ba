//! Event handling for the TUI
//!
//! Terminal input is read on a dedicated thread and forwarded over a channel.
//! Finished fetches travel over the same channel, so the main loop only ever
//! waits in one place.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::error;

use crate::wizard::FetchReply;

/// Events the main loop reacts to
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
    /// A fetch spawned on the runtime has finished
    Fetched(FetchReply),
}

/// Event handler for terminal events
pub struct EventHandler {
    /// Event sender, cloned for fetch tasks
    sender: mpsc::Sender<Event>,
    /// Event receiver
    receiver: mpsc::Receiver<Event>,
    /// Event thread handle
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = {
            let sender = sender.clone();
            thread::spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    // Calculate timeout for next tick
                    let timeout = tick_rate
                        .checked_sub(last_tick.elapsed())
                        .unwrap_or(Duration::ZERO);

                    // Poll for events
                    match event::poll(timeout) {
                        Ok(true) => {
                            let forwarded = match event::read() {
                                // Windows reports releases too
                                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                                    Some(Event::Key(key))
                                }
                                Ok(CrosstermEvent::Resize(width, height)) => {
                                    Some(Event::Resize(width, height))
                                }
                                Ok(_) => None,
                                Err(e) => {
                                    error!(error = %e, "failed to read terminal event");
                                    return;
                                }
                            };
                            if let Some(event) = forwarded {
                                if sender.send(event).is_err() {
                                    return;
                                }
                            }
                        }
                        Ok(false) => {}
                        Err(e) => {
                            error!(error = %e, "failed to poll terminal events");
                            return;
                        }
                    }

                    // Send tick event if enough time has passed
                    if last_tick.elapsed() >= tick_rate {
                        if sender.send(Event::Tick).is_err() {
                            return;
                        }
                        last_tick = Instant::now();
                    }
                }
            })
        };

        Self {
            sender,
            receiver,
            handler,
        }
    }

    /// A sender for events produced outside the input thread
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

/// An event handler ticking four times a second
impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
