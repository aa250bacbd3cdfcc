//! Counter reducer invariants over whole intent sequences.

use demograph::ui::counter::{CounterIntent, CounterReducer, CounterState};
use demograph::ui::mvi::Reducer;

fn apply(state: CounterState, intents: &[CounterIntent]) -> CounterState {
    intents
        .iter()
        .fold(state, |state, intent| CounterReducer::reduce(state, *intent))
}

#[test]
fn n_increments_count_n() {
    let mut state = CounterState::default();
    for _ in 0..57 {
        state = CounterReducer::reduce(state, CounterIntent::Increment);
    }
    assert_eq!(state.value, 57);
}

#[test]
fn reset_always_lands_on_zero() {
    let state = apply(
        CounterState::default(),
        &[
            CounterIntent::Increment,
            CounterIntent::Increment,
            CounterIntent::ToggleDisabled,
            CounterIntent::Increment,
            CounterIntent::ToggleDisabled,
            CounterIntent::Increment,
            CounterIntent::Reset,
        ],
    );
    assert_eq!(state.value, 0);
    assert!(!state.disabled);
}

#[test]
fn increments_between_disable_and_enable_are_lost() {
    let state = apply(
        CounterState::default(),
        &[
            CounterIntent::Increment,
            CounterIntent::ToggleDisabled,
            CounterIntent::Increment,
            CounterIntent::Increment,
            CounterIntent::Increment,
            CounterIntent::ToggleDisabled,
            CounterIntent::Increment,
        ],
    );
    assert_eq!(state.value, 2);
}

#[test]
fn toggle_never_touches_the_value() {
    let mut state = CounterState {
        value: 9,
        disabled: false,
    };
    for _ in 0..5 {
        state = CounterReducer::reduce(state, CounterIntent::ToggleDisabled);
        assert_eq!(state.value, 9);
    }
    assert!(state.disabled);
}

#[test]
fn reduce_is_a_pure_function_of_its_inputs() {
    let state = CounterState {
        value: 3,
        disabled: false,
    };
    let a = CounterReducer::reduce(state, CounterIntent::Increment);
    let b = CounterReducer::reduce(state, CounterIntent::Increment);
    assert_eq!(a, b);
}
