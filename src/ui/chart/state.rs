use crate::ui::mvi::UiState;
use crate::worldbank::YearBreakdown;

/// Lifecycle of the population chart data.
///
/// `Loaded` with an empty point list is a legitimate outcome (every year
/// filtered out), distinct from `Failed`: the UI shows a placeholder for the
/// former and the error message for the latter.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ChartPhase {
    /// Fetch in flight; nothing to draw yet.
    #[default]
    Loading,
    /// Fetch ended in an error; `message` is already user-facing.
    Failed { message: String },
    /// Fetch finished with merged, chart-ready points.
    Loaded { points: Vec<YearBreakdown> },
}

impl ChartPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, ChartPhase::Loading)
    }

    /// Loaded points, or an empty slice in any other phase.
    pub fn points(&self) -> &[YearBreakdown] {
        match self {
            ChartPhase::Loaded { points } => points,
            _ => &[],
        }
    }
}

impl UiState for ChartPhase {}
