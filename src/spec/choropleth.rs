use serde::{Deserialize, Serialize};

use crate::core::StateRow;
use crate::spec::StyleParams;

/// Which [`StateRow`] field drives the map's color encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorField {
    Division,
    Count,
}

/// Tooltip field toggles for the continuous-scale map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverData {
    pub state: bool,
    pub division: bool,
    pub count: bool,
}

/// Base-map cosmetics shared by both dashboard maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoStyle {
    pub show_lakes: bool,
    pub show_land: bool,
    pub show_countries: bool,
    pub show_frame: bool,
    pub visible: bool,
    pub background_color: Option<String>,
}

impl GeoStyle {
    /// Land only: lakes, country borders, outer frame, and base map hidden.
    #[must_use]
    pub fn bare_land() -> Self {
        Self {
            show_lakes: false,
            show_land: true,
            show_countries: false,
            show_frame: false,
            visible: false,
            background_color: None,
        }
    }
}

/// A renderable US choropleth description.
///
/// Built once at startup per color mode and treated as an immutable template;
/// per-request styling goes through [`ChoroplethSpec::with_style`], which
/// clones first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethSpec {
    pub title: String,
    /// Location values are 2-letter state abbreviations scoped to the US.
    pub location_mode: String,
    pub scope: String,
    pub color_field: ColorField,
    pub color_continuous_scale: Option<String>,
    /// Column surfaced as the tooltip headline.
    pub hover_name: String,
    pub hover_data: Option<HoverData>,
    pub rows: Vec<StateRow>,
    pub marker_line_width: f64,
    pub geo: GeoStyle,
    pub paper_background_color: Option<String>,
    pub font_family: Option<String>,
    pub font_color: Option<String>,
}

impl ChoroplethSpec {
    /// Builds a map spec from expanded state rows.
    ///
    /// An absent or empty `scale` selects categorical coloring with a generic
    /// title; a non-empty scale selects continuous coloring with count/division
    /// tooltips (state code hidden since it already labels the shape).
    #[must_use]
    pub fn build(rows: Vec<StateRow>, color_field: ColorField, scale: Option<&str>) -> Self {
        let scale = scale.filter(|scale| !scale.is_empty());

        let (title, hover_data) = match scale {
            None => ("Census Divisions Regions".to_owned(), None),
            Some(_) => (
                "Survey Response Count by Census Division".to_owned(),
                Some(HoverData {
                    state: false,
                    division: true,
                    count: true,
                }),
            ),
        };

        Self {
            title,
            location_mode: "USA-states".to_owned(),
            scope: "usa".to_owned(),
            color_field,
            color_continuous_scale: scale.map(str::to_owned),
            hover_name: "Census Division".to_owned(),
            hover_data,
            rows,
            marker_line_width: 0.0,
            geo: GeoStyle::bare_land(),
            paper_background_color: None,
            font_family: None,
            font_color: None,
        }
    }

    /// Clones the spec and applies host style overrides: paper background,
    /// fonts, and the geo background. Geometry and coloring are untouched.
    #[must_use]
    pub fn with_style(&self, style: &StyleParams) -> Self {
        let mut restyled = self.clone();
        restyled.paper_background_color = Some(style.background_color.clone());
        restyled.font_family = Some(style.font_family.clone());
        restyled.font_color = Some(style.text_color.clone());
        restyled.geo.background_color = Some(style.background_color.clone());
        restyled
    }
}
