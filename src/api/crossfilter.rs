use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::SurveyTable;
use crate::error::DashboardResult;
use crate::spec::{ChoroplethSpec, HistogramSpec, StyleParams};

/// Inputs of one cross-filter recompute: two dropdown selections plus the
/// host's style controls. The two variables may name the same column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRequest {
    pub variable_1: String,
    pub variable_2: String,
    pub style: StyleParams,
}

/// The three chart specifications emitted per recompute, bound by the host to
/// the histogram display and the two map displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossFilterView {
    pub histogram: HistogramSpec,
    pub regions_map: ChoroplethSpec,
    pub counts_map: ChoroplethSpec,
}

/// Recomputes the cross-filtered view.
///
/// Pure function of the request plus the two startup artifacts: the survey
/// table and the two choropleth templates. Templates are cloned before
/// styling, never mutated, so repeated calls cannot bleed style into each
/// other. Zero surviving rows is a valid empty histogram, not an error.
pub fn on_filter_change(
    table: &SurveyTable,
    regions_template: &ChoroplethSpec,
    counts_template: &ChoroplethSpec,
    request: &FilterRequest,
) -> DashboardResult<CrossFilterView> {
    let pairs = table.project_pair(&request.variable_1, &request.variable_2)?;
    debug!(
        variable_1 = %request.variable_1,
        variable_2 = %request.variable_2,
        surviving_rows = pairs.len(),
        "cross-filter recompute"
    );

    let mut histogram = HistogramSpec::build(&request.variable_1, &request.variable_2, &pairs);
    histogram.strip_facet_prefixes();
    histogram.apply_style(&request.style);

    Ok(CrossFilterView {
        histogram,
        regions_map: regions_template.with_style(&request.style),
        counts_map: counts_template.with_style(&request.style),
    })
}
