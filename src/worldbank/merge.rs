//! Pure merge pipeline: two indicator series in, chart-ready points out.

use std::collections::HashMap;

use crate::worldbank::types::{IndicatorRecord, YearBreakdown};

const PEOPLE_PER_MILLION: f64 = 1_000_000.0;

/// Scale a raw head count to millions, fixed to two decimal places.
pub fn to_millions(raw: f64) -> f64 {
    (raw / PEOPLE_PER_MILLION * 100.0).round() / 100.0
}

/// Sort key for year strings. Non-numeric years order after every numeric
/// one; ties fall back to the string itself so the result is deterministic.
fn year_ordinal(year: &str) -> u64 {
    year.trim().parse().unwrap_or(u64::MAX)
}

/// Merge both series by year, sort ascending by numeric year, and drop years
/// where neither side contributed a positive value.
///
/// Records without a date or with a null value are skipped and never create
/// an entry on their own.
pub fn merge_series(urban: &[IndicatorRecord], rural: &[IndicatorRecord]) -> Vec<YearBreakdown> {
    let mut by_year: HashMap<String, YearBreakdown> = HashMap::new();

    for record in urban {
        let (Some(year), Some(value)) = (&record.date, record.value) else {
            continue;
        };
        by_year
            .entry(year.clone())
            .or_insert_with(|| YearBreakdown::empty(year))
            .urban = to_millions(value);
    }

    for record in rural {
        let (Some(year), Some(value)) = (&record.date, record.value) else {
            continue;
        };
        by_year
            .entry(year.clone())
            .or_insert_with(|| YearBreakdown::empty(year))
            .rural = to_millions(value);
    }

    let mut points: Vec<YearBreakdown> = by_year.into_values().collect();
    points.sort_by(|a, b| {
        year_ordinal(&a.year)
            .cmp(&year_ordinal(&b.year))
            .then_with(|| a.year.cmp(&b.year))
    });
    points.retain(|point| point.urban > 0.0 || point.rural > 0.0);
    points
}
