//! surveydash: survey dashboard core.
//!
//! This crate turns a loaded survey dataset into serializable chart
//! specifications: a browsable grid, two US census-division choropleth maps,
//! and a cross-filtered faceted histogram recomputed per UI input change.
//! Rendering is left to a host display layer.

pub mod api;
pub mod core;
pub mod error;
pub mod loader;
pub mod spec;
pub mod telemetry;

pub use api::{CrossFilterView, Dashboard, FilterRequest};
pub use error::{DashboardError, DashboardResult};
