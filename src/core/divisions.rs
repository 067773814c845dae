use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::SurveyTable;
use crate::error::{DashboardError, DashboardResult};

/// Column holding the census-division label in the survey dataset.
pub const REGION_COLUMN: &str = "Location (Census Region)";

/// Static census division to state mapping: 9 divisions covering the
/// 50 states plus DC, no overlaps.
pub const DIVISION_STATES: &[(&str, &[&str])] = &[
    ("New England", &["CT", "ME", "MA", "NH", "RI", "VT"]),
    ("Middle Atlantic", &["NJ", "NY", "PA"]),
    ("East North Central", &["IL", "IN", "MI", "OH", "WI"]),
    ("West North Central", &["IA", "KS", "MN", "MO", "NE", "ND", "SD"]),
    (
        "South Atlantic",
        &["DE", "FL", "GA", "MD", "NC", "SC", "VA", "DC", "WV"],
    ),
    ("East South Central", &["AL", "KY", "MS", "TN"]),
    ("West South Central", &["AR", "LA", "OK", "TX"]),
    ("Mountain", &["AZ", "CO", "ID", "MT", "NV", "NM", "UT", "WY"]),
    ("Pacific", &["AK", "CA", "HI", "OR", "WA"]),
];

/// States belonging to a division, or `None` for an unmapped label.
#[must_use]
pub fn states_for(division: &str) -> Option<&'static [&'static str]> {
    DIVISION_STATES
        .iter()
        .find(|(name, _)| *name == division)
        .map(|(_, states)| *states)
}

/// Row count aggregated per division label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionCount {
    pub division: String,
    pub count: u64,
}

/// One state's slice of a division aggregate; every state in a division
/// carries the division's full count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRow {
    pub state: String,
    pub division: String,
    pub count: u64,
}

/// Counts survey rows per division label in `region_column`.
///
/// Missing region cells are excluded from every aggregate.
pub fn division_counts(
    table: &SurveyTable,
    region_column: &str,
) -> DashboardResult<Vec<DivisionCount>> {
    let counts = table.value_counts(region_column)?;
    Ok(counts
        .into_iter()
        .map(|(division, count)| DivisionCount { division, count })
        .collect())
}

/// Expands division aggregates into one row per constituent state, suitable
/// for choropleth plotting.
///
/// A region value absent from [`DIVISION_STATES`] is a schema mismatch and
/// fails with [`DashboardError::UnknownDivision`]; rows are never silently
/// dropped.
pub fn expand(table: &SurveyTable, region_column: &str) -> DashboardResult<Vec<StateRow>> {
    let divisions = division_counts(table, region_column)?;

    let mut state_rows = Vec::new();
    for DivisionCount { division, count } in divisions {
        let states = states_for(&division)
            .ok_or_else(|| DashboardError::UnknownDivision(division.clone()))?;
        for state in states {
            state_rows.push(StateRow {
                state: (*state).to_owned(),
                division: division.clone(),
                count,
            });
        }
    }

    debug!(
        region_column,
        state_row_count = state_rows.len(),
        "expanded division aggregates"
    );
    Ok(state_rows)
}
