//! Startup dataset fetch.
//!
//! One synchronous HTTPS GET at process start, no retry, no cache. Every
//! failure is surfaced to the caller: the rest of the system has a hard
//! dependency on the table, so a host must treat a loader error as fatal.

use tracing::{debug, warn};

use crate::core::SurveyTable;
use crate::error::DashboardResult;

/// The fixed survey dataset consumed by the dashboard.
pub const DATASET_URL: &str = "https://raw.githubusercontent.com/plotly/Figure-Friday/refs/heads/main/2025/week-23/steak-risk-survey.csv";

/// Fetches and decodes the survey CSV from `url`.
pub fn fetch_survey_table(url: &str) -> DashboardResult<SurveyTable> {
    debug!(url, "fetching survey dataset");
    let response = reqwest::blocking::get(url)?.error_for_status().map_err(|err| {
        warn!(url, error = %err, "dataset fetch returned an error status");
        err
    })?;
    let body = response.bytes()?;
    SurveyTable::from_csv_reader(body.as_ref())
}

/// Fetches the default dataset.
pub fn fetch_default_survey_table() -> DashboardResult<SurveyTable> {
    fetch_survey_table(DATASET_URL)
}
