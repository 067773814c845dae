use tracing::debug;

use crate::core::{REGION_COLUMN, SurveyTable, expand};
use crate::error::{DashboardError, DashboardResult};
use crate::spec::{ChoroplethSpec, ColorField, GridSpec};

use super::crossfilter::{self, CrossFilterView, FilterRequest};

/// Continuous scale used by the response-count map.
const COUNT_MAP_SCALE: &str = "Cividis";

/// Dropdown option split: the first dropdown offers the first eight
/// selectable variables, the second everything from the eighth on.
const FIRST_DROPDOWN_WIDTH: usize = 8;

/// Startup artifacts of the dashboard: the loaded table, the grid spec, and
/// the two choropleth templates. All read-only after [`Dashboard::bootstrap`];
/// the cross-filter handler only ever clones from here.
#[derive(Debug)]
pub struct Dashboard {
    table: SurveyTable,
    grid: GridSpec,
    regions_map: ChoroplethSpec,
    counts_map: ChoroplethSpec,
}

impl Dashboard {
    /// Builds the startup artifacts from a loaded table.
    ///
    /// Fails when the table offers no selectable variables or when a region
    /// label falls outside the census-division mapping.
    pub fn bootstrap(table: SurveyTable) -> DashboardResult<Self> {
        if table.selectable_variables().is_empty() {
            return Err(DashboardError::InvalidDataset(
                "no selectable variables beyond the id and region columns".to_owned(),
            ));
        }

        let grid = GridSpec::build(&table);
        let state_rows = expand(&table, REGION_COLUMN)?;
        let regions_map = ChoroplethSpec::build(state_rows.clone(), ColorField::Division, None);
        let counts_map = ChoroplethSpec::build(state_rows, ColorField::Count, Some(COUNT_MAP_SCALE));

        debug!(
            row_count = table.row_count(),
            variable_count = table.selectable_variables().len(),
            "dashboard bootstrapped"
        );
        Ok(Self {
            table,
            grid,
            regions_map,
            counts_map,
        })
    }

    #[must_use]
    pub fn table(&self) -> &SurveyTable {
        &self.table
    }

    #[must_use]
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    #[must_use]
    pub fn regions_map(&self) -> &ChoroplethSpec {
        &self.regions_map
    }

    #[must_use]
    pub fn counts_map(&self) -> &ChoroplethSpec {
        &self.counts_map
    }

    /// Options offered by the first variable dropdown.
    #[must_use]
    pub fn first_variable_options(&self) -> &[String] {
        let variables = self.table.selectable_variables();
        &variables[..variables.len().min(FIRST_DROPDOWN_WIDTH)]
    }

    /// Options offered by the second variable dropdown; overlaps the first
    /// window by one column.
    #[must_use]
    pub fn second_variable_options(&self) -> &[String] {
        self.table
            .selectable_variables()
            .get(FIRST_DROPDOWN_WIDTH - 1..)
            .unwrap_or_default()
    }

    /// Initial dropdown values: the first and ninth selectable variables,
    /// falling back to the last variable when fewer than nine exist.
    #[must_use]
    pub fn default_selection(&self) -> (String, String) {
        let variables = self.table.selectable_variables();
        let first = variables[0].clone();
        let second = variables
            .get(FIRST_DROPDOWN_WIDTH)
            .or_else(|| variables.last())
            .cloned()
            .unwrap_or_else(|| first.clone());
        (first, second)
    }

    /// Recomputes the cross-filtered view against the startup artifacts.
    pub fn on_filter_change(&self, request: &FilterRequest) -> DashboardResult<CrossFilterView> {
        crossfilter::on_filter_change(&self.table, &self.regions_map, &self.counts_map, request)
    }
}
