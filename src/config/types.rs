//! Configuration types with per-field defaults.
//!
//! Every field has a serde default, so a partial file (or no file at all)
//! still yields a fully populated config.

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where and what to fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the indicator API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// ISO 3166 alpha-3 country code.
    #[serde(default = "default_country")]
    pub country: String,
    /// First year of the inclusive query range.
    #[serde(default = "default_start_year")]
    pub start_year: u16,
    /// Last year of the inclusive query range.
    #[serde(default = "default_end_year")]
    pub end_year: u16,
    /// Record cap per indicator request.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Total timeout per request, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout, in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Presentation knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick cadence in milliseconds; drives the loading spinner.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "https://api.worldbank.org/v2".to_string()
}

fn default_country() -> String {
    "CHN".to_string()
}

fn default_start_year() -> u16 {
    2014
}

fn default_end_year() -> u16 {
    2024
}

fn default_per_page() -> u32 {
    100
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            country: default_country(),
            start_year: default_start_year(),
            end_year: default_end_year(),
            per_page: default_per_page(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
