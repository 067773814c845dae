use std::io::Read;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{DashboardError, DashboardResult};

/// In-memory survey dataset: a header row plus stringly-typed cells.
///
/// Missing cells (empty CSV fields) load as `None`. The table is read-only
/// after construction; every derived artifact works from borrowed views.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl SurveyTable {
    /// Builds a table from pre-decoded parts, validating shape.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> DashboardResult<Self> {
        if columns.is_empty() {
            return Err(DashboardError::InvalidDataset(
                "header row has no columns".to_owned(),
            ));
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DashboardError::InvalidDataset(format!(
                    "row {index} has {} cells, expected {}",
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    /// Decodes a CSV document into a table.
    ///
    /// Empty fields become missing values; a ragged body is rejected by the
    /// decoder before shape validation runs.
    pub fn from_csv_reader<R: Read>(reader: R) -> DashboardResult<Self> {
        let mut decoder = csv::Reader::from_reader(reader);
        let columns: Vec<String> = decoder.headers()?.iter().map(str::to_owned).collect();

        let mut rows = Vec::new();
        for record in decoder.records() {
            let record = record?;
            rows.push(
                record
                    .iter()
                    .map(|cell| {
                        let cell = cell.trim();
                        if cell.is_empty() {
                            None
                        } else {
                            Some(cell.to_owned())
                        }
                    })
                    .collect(),
            );
        }

        debug!(
            column_count = columns.len(),
            row_count = rows.len(),
            "decoded survey table"
        );
        Self::new(columns, rows)
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Columns exposed as cross-filter variables: everything from index 2 on.
    /// The first two columns are the response id and region label.
    #[must_use]
    pub fn selectable_variables(&self) -> &[String] {
        self.columns.get(2..).unwrap_or_default()
    }

    /// Occurrence count per distinct non-missing value of `column`, ordered
    /// by descending count with first-seen order breaking ties.
    pub fn value_counts(&self, column: &str) -> DashboardResult<IndexMap<String, u64>> {
        let index = self
            .column_index(column)
            .ok_or_else(|| DashboardError::UnknownColumn(column.to_owned()))?;

        let mut counts: IndexMap<String, u64> = IndexMap::new();
        for row in &self.rows {
            if let Some(value) = &row[index] {
                *counts.entry(value.clone()).or_insert(0) += 1;
            }
        }
        counts.sort_by(|_, left, _, right| right.cmp(left));
        Ok(counts)
    }

    /// Projects the table onto two named columns, keeping only rows where
    /// both values are present. The same column may fill both slots.
    pub fn project_pair(
        &self,
        first: &str,
        second: &str,
    ) -> DashboardResult<Vec<(String, String)>> {
        let first_index = self
            .column_index(first)
            .ok_or_else(|| DashboardError::UnknownColumn(first.to_owned()))?;
        let second_index = self
            .column_index(second)
            .ok_or_else(|| DashboardError::UnknownColumn(second.to_owned()))?;

        let mut pairs = Vec::new();
        for row in &self.rows {
            if let (Some(left), Some(right)) = (&row[first_index], &row[second_index]) {
                pairs.push((left.clone(), right.clone()));
            }
        }
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::SurveyTable;

    fn sample() -> SurveyTable {
        let csv = "\
RespondentID,Location (Census Region),Lottery,Smoke
1,Pacific,Lottery A,No
2,Pacific,Lottery B,
3,Mountain,Lottery A,Yes
";
        SurveyTable::from_csv_reader(csv.as_bytes()).expect("decode sample")
    }

    #[test]
    fn empty_cells_decode_as_missing() {
        let table = sample();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows()[1][3], None);
        assert_eq!(table.rows()[0][3].as_deref(), Some("No"));
    }

    #[test]
    fn selectable_variables_skip_id_and_region() {
        let table = sample();
        assert_eq!(table.selectable_variables(), ["Lottery", "Smoke"]);
    }

    #[test]
    fn value_counts_order_by_descending_count() {
        let table = sample();
        let counts = table.value_counts("Location (Census Region)").expect("counts");
        let ordered: Vec<(&str, u64)> = counts
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
            .collect();
        assert_eq!(ordered, [("Pacific", 2), ("Mountain", 1)]);
    }

    #[test]
    fn project_pair_drops_rows_missing_either_value() {
        let table = sample();
        let pairs = table.project_pair("Lottery", "Smoke").expect("projection");
        assert_eq!(
            pairs,
            [
                ("Lottery A".to_owned(), "No".to_owned()),
                ("Lottery A".to_owned(), "Yes".to_owned()),
            ]
        );
    }

    #[test]
    fn unknown_column_is_rejected() {
        let table = sample();
        let err = table
            .project_pair("Lottery", "Nope")
            .expect_err("unknown column must fail");
        assert!(format!("{err}").contains("unknown column"));
    }

    #[test]
    fn ragged_body_is_rejected() {
        let csv = "a,b\n1,2\n3\n";
        let result = SurveyTable::from_csv_reader(csv.as_bytes());
        assert!(result.is_err());
    }
}
