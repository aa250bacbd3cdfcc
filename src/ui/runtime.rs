//! The UI loop: draw, wait for an event, update, repeat.

use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worldbank::{FetchTask, WorldBankClient};

/// Run the dashboard until the user quits.
pub fn run(config: Config, handle: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config.clone());
    let events = EventHandler::new(tick_rate);

    // Fetch once at startup. `r` replaces the task; each replacement (and
    // the final drop on quit) cancels the previous fetch.
    let mut fetch = spawn_fetch(&mut app, handle, &config, &events);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::Reload {
                    fetch = spawn_fetch(&mut app, handle, &config, &events);
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Population {
                generation,
                outcome,
            }) => app.on_population(generation, outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(fetch);
    drop(guard);
    Ok(())
}

fn spawn_fetch(
    app: &mut App,
    handle: &Handle,
    config: &Config,
    events: &EventHandler,
) -> FetchTask {
    let generation = app.begin_fetch();
    let client = WorldBankClient::new(config.source.clone());
    FetchTask::spawn(handle, client, generation, events.sender())
}
