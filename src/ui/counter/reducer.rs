use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Reducer for the counter widget.
///
/// `Increment` is gated here, not only in the view: a disabled counter stays
/// put even for programmatic dispatch, so no caller can bypass the flag.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment if state.disabled => state,
            CounterIntent::Increment => CounterState {
                value: state.value.saturating_add(1),
                ..state
            },
            CounterIntent::Reset => CounterState { value: 0, ..state },
            CounterIntent::ToggleDisabled => CounterState {
                disabled: !state.disabled,
                ..state
            },
        }
    }
}
