use crate::ui::mvi::UiState;

/// Counter widget state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    /// Current tally.
    pub value: u64,
    /// While set, the increment control is inert.
    pub disabled: bool,
}

impl UiState for CounterState {}
