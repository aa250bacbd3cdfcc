use super::intent::Intent;
use super::state::UiState;

/// A pure state transition.
///
/// `reduce` takes the current state by value and returns the next one. No
/// I/O, no interior mutability; given the same inputs it returns the same
/// output, which is what makes the feature modules testable without a
/// terminal.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
