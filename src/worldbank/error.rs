//! Error taxonomy for one population fetch cycle.

use reqwest::StatusCode;
use thiserror::Error;

/// Why a fetch produced no chart.
///
/// `NoData` is an expected domain outcome with a fixed product message; the
/// other variants are unexpected failures and get reported with their cause.
#[derive(Debug, Error)]
pub enum FetchError {
    /// One or both indicator calls came back with a non-success status.
    /// Both statuses are captured even when only one side failed.
    #[error("urban request returned {urban}, rural request returned {rural}")]
    Status { urban: StatusCode, rural: StatusCode },

    /// Responses parsed but carried no usable records.
    #[error("No data available. Please check the country code or date range.")]
    NoData,

    /// Transport-level failure: DNS, connect, timeout, body read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not the expected `[metadata, records]` JSON document.
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// Message shown in the chart panel.
    ///
    /// No-data is surfaced verbatim; everything else gets a lead-in naming
    /// the operation that failed, with the cause appended.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::NoData => self.to_string(),
            other => format!("Could not load population data: {other}"),
        }
    }
}
