use crate::ui::mvi::Intent;
use crate::worldbank::YearBreakdown;

/// Fetch lifecycle events reduced into the chart phase.
#[derive(Debug)]
pub enum ChartIntent {
    /// A fetch was (re)started: clear any previous result or error and show
    /// the loading placeholder.
    FetchStarted,
    /// The fetch produced merged, chart-ready points.
    FetchSucceeded { points: Vec<YearBreakdown> },
    /// The fetch ended with a user-facing message.
    FetchFailed { message: String },
}

impl Intent for ChartIntent {}
