//! Population chart feature module.
//!
//! Fetch lifecycle state plus the stacked-bar rendering of the merged
//! urban/rural series.
//!
//! # Architecture
//!
//! Uses the MVI pattern:
//! - `state.rs` - fetch lifecycle phase (loading, failed, loaded)
//! - `intent.rs` - fetch lifecycle events
//! - `reducer.rs` - state transitions (pure, no side effects)
//! - `widget.rs` - the stacked bar chart drawn from loaded points

mod intent;
mod reducer;
mod state;
mod widget;

pub use intent::ChartIntent;
pub use reducer::ChartReducer;
pub use state::ChartPhase;
pub use widget::StackedBarChart;
