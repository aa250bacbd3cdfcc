use crate::ui::mvi::Intent;

/// User actions on the counter widget.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CounterIntent {
    /// Bump the tally by one. Ignored while the counter is disabled.
    Increment,
    /// Reset the tally to zero. Works even while disabled.
    Reset,
    /// Flip the disabled flag.
    ToggleDisabled,
}

impl Intent for CounterIntent {}
