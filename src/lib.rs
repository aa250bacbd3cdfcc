//! demograph: a terminal dashboard with two independent widgets.
//!
//! A tally counter backed by a reducer-driven state store, and a stacked bar
//! chart of urban vs rural population fetched from the World Bank indicator
//! API. Both follow the same MVI discipline: state changes only through pure
//! reducers; I/O lives in background tasks that report back as events.

pub mod cancel;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
pub mod worldbank;
