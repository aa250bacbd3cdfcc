//! Counter feature module.
//!
//! A tally with increment, reset, and disable controls.
//!
//! # Architecture
//!
//! Uses the MVI pattern:
//! - `state.rs` - tally value plus the disabled flag
//! - `intent.rs` - user actions (Increment, Reset, ToggleDisabled)
//! - `reducer.rs` - state transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
