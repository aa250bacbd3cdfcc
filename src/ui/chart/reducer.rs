use crate::ui::mvi::Reducer;

use super::intent::ChartIntent;
use super::state::ChartPhase;

/// Reducer for the chart phase. Every intent is accepted in every phase; a
/// restart from `Failed` drops the old message on the floor.
pub struct ChartReducer;

impl Reducer for ChartReducer {
    type State = ChartPhase;
    type Intent = ChartIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ChartIntent::FetchStarted => ChartPhase::Loading,
            ChartIntent::FetchSucceeded { points } => ChartPhase::Loaded { points },
            ChartIntent::FetchFailed { message } => ChartPhase::Failed { message },
        }
    }
}
