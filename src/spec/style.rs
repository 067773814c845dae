use serde::{Deserialize, Serialize};

/// Free-form style strings supplied by the host's style controls.
///
/// Values are passed through to the rendering layer unvalidated; a malformed
/// color or font is the renderer's problem, not rejected here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleParams {
    pub background_color: String,
    pub text_color: String,
    pub font_family: String,
}

impl StyleParams {
    #[must_use]
    pub fn new(
        background_color: impl Into<String>,
        text_color: impl Into<String>,
        font_family: impl Into<String>,
    ) -> Self {
        Self {
            background_color: background_color.into(),
            text_color: text_color.into(),
            font_family: font_family.into(),
        }
    }
}

/// Axis cosmetics applied to the histogram's x and y axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub show_line: bool,
    pub show_grid: bool,
    pub line_width: f64,
    pub line_color: String,
    pub mirror: bool,
    pub zero_line: bool,
}

impl AxisStyle {
    /// Thin light-gray axis line mirrored on both sides, no grid.
    #[must_use]
    pub fn boxed_x_axis() -> Self {
        Self {
            show_line: true,
            show_grid: false,
            line_width: 0.5,
            line_color: "#E7E7E7".to_owned(),
            mirror: true,
            zero_line: false,
        }
    }

    /// No axis line, no grid; width and color kept for symmetry with the
    /// x axis should a host toggle the line back on.
    #[must_use]
    pub fn bare_y_axis() -> Self {
        Self {
            show_line: false,
            show_grid: false,
            line_width: 0.5,
            line_color: "#E7E7E7".to_owned(),
            mirror: false,
            zero_line: false,
        }
    }
}
