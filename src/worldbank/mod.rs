//! World Bank indicator pipeline.
//!
//! Four layers, bottom up:
//! - `types.rs` - wire records and chart-ready points
//! - `merge.rs` - pure merge/scale/sort/filter pipeline
//! - `client.rs` - HTTP client and response envelope handling
//! - `task.rs` - cancellable background fetch delivering an event

mod client;
mod error;
mod merge;
mod task;
mod types;

pub use client::{WorldBankClient, RURAL_INDICATOR, URBAN_INDICATOR};
pub use error::FetchError;
pub use merge::{merge_series, to_millions};
pub use task::FetchTask;
pub use types::{IndicatorRecord, YearBreakdown};
