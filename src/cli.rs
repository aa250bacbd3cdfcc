//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal dashboard charting urban vs rural population.
#[derive(Debug, Parser)]
#[command(name = "demograph", version, about)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Country code to chart, e.g. CHN.
    #[arg(long, value_name = "CODE")]
    pub country: Option<String>,

    /// Inclusive year range, formatted start:end (e.g. 2014:2024).
    #[arg(long, value_name = "START:END", value_parser = parse_year_range)]
    pub date: Option<YearRange>,

    /// Append a debug log to this file (the screen belongs to the UI).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold command-line overrides into the loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(country) = &self.country {
            config.source.country = country.clone();
        }
        if let Some(range) = self.date {
            config.source.start_year = range.start;
            config.source.end_year = range.end;
        }
    }
}

/// Inclusive year range as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: u16,
    pub end: u16,
}

fn parse_year_range(raw: &str) -> Result<YearRange, String> {
    let (start, end) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected start:end, got '{raw}'"))?;
    let start = start
        .trim()
        .parse::<u16>()
        .map_err(|_| format!("invalid start year '{start}'"))?;
    let end = end
        .trim()
        .parse::<u16>()
        .map_err(|_| format!("invalid end year '{end}'"))?;
    if start > end {
        return Err(format!("start year {start} is after end year {end}"));
    }
    Ok(YearRange { start, end })
}
