//! Event plumbing for the UI loop.
//!
//! A background thread turns crossterm input into [`AppEvent`]s and emits a
//! tick on a fixed cadence; async tasks inject their outcomes through a
//! cloned sender. The UI loop sees a single ordered stream.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::worldbank::{FetchError, YearBreakdown};

pub enum AppEvent {
    /// Keyboard input.
    Key(KeyEvent),
    /// Periodic tick; drives the loading spinner.
    Tick,
    /// Terminal was resized. The next draw picks up the new size.
    Resize(u16, u16),
    /// A population fetch finished. `generation` identifies which fetch, so
    /// a superseded one can never clobber fresh state.
    Population {
        generation: u64,
        outcome: Result<Vec<YearBreakdown>, FetchError>,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    /// Next event, or a timeout error if none arrived in time.
    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender for injecting events from background tasks.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
