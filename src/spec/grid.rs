use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::SurveyTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub field: String,
    pub filter: bool,
    pub sortable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnSizing {
    SizeToFit,
}

/// Paginated grid description built once at startup; the host renders it and
/// never asks for an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub column_defs: Vec<ColumnDef>,
    /// One ordered record per survey row; missing cells serialize as null.
    pub row_data: Vec<IndexMap<String, Option<String>>>,
    pub pagination: bool,
    pub column_sizing: ColumnSizing,
}

impl GridSpec {
    /// One filterable, sortable column per table column; rows verbatim.
    #[must_use]
    pub fn build(table: &SurveyTable) -> Self {
        let column_defs = table
            .columns()
            .iter()
            .map(|column| ColumnDef {
                field: column.clone(),
                filter: true,
                sortable: true,
            })
            .collect();

        let row_data = table
            .rows()
            .iter()
            .map(|row| {
                table
                    .columns()
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect();

        Self {
            column_defs,
            row_data,
            pagination: true,
            column_sizing: ColumnSizing::SizeToFit,
        }
    }
}
