//! HTTP client for the World Bank indicator API.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::config::SourceConfig;
use crate::worldbank::error::FetchError;
use crate::worldbank::merge::merge_series;
use crate::worldbank::types::{IndicatorRecord, YearBreakdown};

/// Indicator code for total urban population.
pub const URBAN_INDICATOR: &str = "SP.URB.TOTL";
/// Indicator code for total rural population.
pub const RURAL_INDICATOR: &str = "SP.RUR.TOTL";

pub struct WorldBankClient {
    client: Client,
    source: SourceConfig,
}

impl WorldBankClient {
    pub fn new(source: SourceConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(source.connect_timeout_seconds))
            .timeout(Duration::from_secs(source.timeout_seconds))
            .build()
            .expect("failed to build HTTP client");
        Self { client, source }
    }

    /// Fetch both indicator series and merge them into chart-ready points.
    ///
    /// The two requests run concurrently. Either side failing fails the whole
    /// fetch; there is no partial-result path.
    pub async fn fetch_population(&self) -> Result<Vec<YearBreakdown>, FetchError> {
        let (urban, rural) = tokio::join!(
            self.get_indicator(URBAN_INDICATOR),
            self.get_indicator(RURAL_INDICATOR),
        );
        let (urban, rural) = (urban?, rural?);

        if !urban.status().is_success() || !rural.status().is_success() {
            return Err(FetchError::Status {
                urban: urban.status(),
                rural: rural.status(),
            });
        }

        let (urban_body, rural_body) = tokio::join!(urban.text(), rural.text());
        let urban_records = extract_records(&urban_body?)?;
        let rural_records = extract_records(&rural_body?)?;

        Ok(merge_series(&urban_records, &rural_records))
    }

    async fn get_indicator(&self, indicator: &str) -> Result<reqwest::Response, reqwest::Error> {
        let url = self.indicator_url(indicator);
        tracing::debug!(%url, "requesting indicator");
        self.client.get(url).send().await
    }

    fn indicator_url(&self, indicator: &str) -> String {
        format!(
            "{}/country/{}/indicator/{}?format=json&date={}:{}&per_page={}",
            self.source.base_url.trim_end_matches('/'),
            self.source.country,
            indicator,
            self.source.start_year,
            self.source.end_year,
            self.source.per_page,
        )
    }
}

/// Pull the record list out of the API's `[metadata, records]` envelope.
///
/// A missing, non-array, or empty records element is the no-data outcome,
/// not a parse failure.
fn extract_records(body: &str) -> Result<Vec<IndicatorRecord>, FetchError> {
    let mut document: Value = serde_json::from_str(body)?;
    match document.get_mut(1).map(Value::take) {
        Some(Value::Array(items)) if !items.is_empty() => {
            Ok(serde_json::from_value(Value::Array(items))?)
        }
        _ => Err(FetchError::NoData),
    }
}
