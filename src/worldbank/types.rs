//! Wire and chart-facing data types for the indicator pipeline.

use serde::Deserialize;

/// One record from an indicator query.
///
/// The API reports gap years with `"value": null` and occasionally omits
/// fields entirely, so both sides are optional. Unknown fields (country,
/// unit, decimal, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
}

/// Urban and rural population for one year, scaled to millions.
///
/// A side with no usable record stays at `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct YearBreakdown {
    pub year: String,
    pub urban: f64,
    pub rural: f64,
}

impl YearBreakdown {
    pub(crate) fn empty(year: &str) -> Self {
        Self {
            year: year.to_string(),
            urban: 0.0,
            rural: 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.urban + self.rural
    }
}
