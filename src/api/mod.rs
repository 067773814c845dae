pub mod crossfilter;
pub mod dashboard;

pub use crossfilter::{CrossFilterView, FilterRequest, on_filter_change};
pub use dashboard::Dashboard;
