//! Diagnostic tool: bootstrap the dashboard and dump its chart
//! specifications as JSON.
//!
//! Usage: `spec_dump [csv-file]`. With no argument the fixed remote dataset
//! is fetched; with an argument the CSV is read from disk instead, which
//! keeps the tool usable offline.

use std::env;
use std::fs::File;

use surveydash::core::SurveyTable;
use surveydash::spec::StyleParams;
use surveydash::{Dashboard, DashboardResult, FilterRequest, loader};

fn run() -> DashboardResult<()> {
    let table = match env::args().nth(1) {
        Some(path) => SurveyTable::from_csv_reader(File::open(path)?)?,
        None => loader::fetch_default_survey_table()?,
    };

    let dashboard = Dashboard::bootstrap(table)?;
    let (variable_1, variable_2) = dashboard.default_selection();
    let view = dashboard.on_filter_change(&FilterRequest {
        variable_1,
        variable_2,
        style: StyleParams::new("#FFFFFF", "#000000", "Arial"),
    })?;

    let dump = serde_json::json!({
        "grid": dashboard.grid(),
        "regions_map": dashboard.regions_map(),
        "counts_map": dashboard.counts_map(),
        "cross_filter_view": view,
    });
    let text = serde_json::to_string_pretty(&dump).expect("spec types serialize");
    println!("{text}");
    Ok(())
}

fn main() {
    let _ = surveydash::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("spec_dump: {err}");
        std::process::exit(1);
    }
}
