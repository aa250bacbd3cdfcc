//! Minimal MVI (Model-View-Intent) plumbing shared by the feature modules.
//!
//! Each feature owns a state type, an intent enum, and a pure reducer:
//!
//! ```text
//! key press / fetch event
//!         |
//!         v
//!      Intent ----> Reducer::reduce(state, intent) ----> new State
//!                                                          |
//!                                                          v
//!                                                       render
//! ```
//!
//! Reducers never perform I/O. Side effects (spawning a fetch, cancelling
//! one) live in the runtime, which dispatches intents describing what
//! happened.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
