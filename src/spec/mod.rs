pub mod choropleth;
pub mod grid;
pub mod histogram;
pub mod style;

pub use choropleth::{ChoroplethSpec, ColorField, GeoStyle, HoverData};
pub use grid::{ColumnDef, ColumnSizing, GridSpec};
pub use histogram::{
    Annotation, DISCRETE_PALETTE, HistogramLayout, HistogramSpec, HistogramTrace,
    clean_annotation_text,
};
pub use style::{AxisStyle, StyleParams};
