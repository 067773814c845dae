pub mod divisions;
pub mod table;

pub use divisions::{DIVISION_STATES, DivisionCount, REGION_COLUMN, StateRow, expand, states_for};
pub use table::SurveyTable;
