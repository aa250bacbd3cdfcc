//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

/// Side effect the runtime must perform after a key press. State changes
/// happen inside [`App`]; anything that spawns or cancels work is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Handled internally, nothing to do.
    None,
    /// Start a fresh population fetch, replacing any in flight.
    Reload,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    // Quit keys first: Ctrl+C would otherwise read as a plain 'c'.
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) || is_ctrl(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('i') => app.press_increment(),
        KeyCode::Char('c') => app.press_clear(),
        KeyCode::Char('d') => app.press_toggle(),
        KeyCode::Left => app.move_year_selection(-1),
        KeyCode::Right => app.move_year_selection(1),
        KeyCode::Char('r') => return InputAction::Reload,
        _ => {}
    }

    InputAction::None
}

fn is_ctrl(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
