//! Terminal setup and restoration.
//!
//! Restoration must happen on every exit path, including panics: a raw-mode
//! terminal left on the alternate screen is unusable for the shell that
//! spawned us.

use std::io::{self, Stdout};
use std::panic;
use std::sync::{Arc, Mutex};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

type Cleanup = Arc<Mutex<Option<Box<dyn FnOnce() + Send>>>>;

/// Restores the terminal when dropped, or from the panic hook if a panic
/// unwinds first. Whichever runs first takes the cleanup; the other finds
/// the slot empty.
pub struct TerminalGuard {
    cleanup: Cleanup,
}

impl TerminalGuard {
    fn new() -> Self {
        let cleanup: Cleanup = Arc::new(Mutex::new(Some(
            Box::new(restore_terminal) as Box<dyn FnOnce() + Send>
        )));

        let hook_cleanup = Arc::clone(&cleanup);
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if let Some(restore) = hook_cleanup.lock().ok().and_then(|mut slot| slot.take()) {
                restore();
            }
            previous(info);
        }));

        Self { cleanup }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(restore) = self.cleanup.lock().ok().and_then(|mut slot| slot.take()) {
            restore();
        }
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Enter raw mode on the alternate screen; hand back the terminal plus its
/// restoration guard.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, TerminalGuard::new()))
}
