use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::spec::style::{AxisStyle, StyleParams};

/// Fixed discrete palette assigned to sorted x categories in order, cycling
/// past ten.
pub const DISCRETE_PALETTE: [&str; 10] = [
    "#00FF98", "#00E1FF", "#4600CF", "#C8FF00", "#0021FF", "#E600FF", "#FF002E", "#FFF300",
    "#37FF00", "#00FFFA",
];

/// Free-floating text attached to the chart; one per facet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
}

/// One bar group: a single x category across every facet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramTrace {
    pub name: String,
    pub color: String,
    /// Occurrence count keyed by facet category, zero-filled so every trace
    /// spans the full facet order.
    pub counts_by_facet: IndexMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramLayout {
    pub paper_background_color: String,
    pub plot_background_color: String,
    pub font_family: String,
    pub font_color: String,
    pub height: u32,
    pub bar_gap: f64,
}

impl Default for HistogramLayout {
    fn default() -> Self {
        Self {
            paper_background_color: String::new(),
            plot_background_color: String::new(),
            font_family: String::new(),
            font_color: String::new(),
            height: 500,
            bar_gap: 0.01,
        }
    }
}

/// A faceted histogram description: one facet row per category of the facet
/// column, bars along the x column, colored per x category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSpec {
    pub title: String,
    pub x_column: String,
    pub facet_column: String,
    /// Lexicographically sorted categories per involved column; renderers
    /// must follow this order instead of first-seen order.
    pub category_orders: IndexMap<String, Vec<String>>,
    pub traces: Vec<HistogramTrace>,
    pub annotations: Vec<Annotation>,
    pub layout: HistogramLayout,
    pub x_axis: AxisStyle,
    pub y_axis: AxisStyle,
}

impl HistogramSpec {
    /// Builds the histogram skeleton from filtered `(facet, x)` value pairs.
    ///
    /// Zero pairs yields a valid empty chart. Facet annotations start in the
    /// renderer's generic `column=value` form; call
    /// [`HistogramSpec::strip_facet_prefixes`] to reduce them to bare values.
    #[must_use]
    pub fn build(facet_column: &str, x_column: &str, pairs: &[(String, String)]) -> Self {
        let facet_categories = sorted_categories(pairs.iter().map(|(facet, _)| facet));
        let x_categories = sorted_categories(pairs.iter().map(|(_, x)| x));

        let mut category_orders = IndexMap::new();
        category_orders.insert(facet_column.to_owned(), facet_categories.clone());
        category_orders.insert(x_column.to_owned(), x_categories.clone());

        let traces = x_categories
            .iter()
            .enumerate()
            .map(|(index, x_category)| {
                let mut counts_by_facet: IndexMap<String, u64> = facet_categories
                    .iter()
                    .map(|facet| (facet.clone(), 0))
                    .collect();
                for (facet, x) in pairs {
                    if x == x_category {
                        if let Some(count) = counts_by_facet.get_mut(facet) {
                            *count += 1;
                        }
                    }
                }
                HistogramTrace {
                    name: x_category.clone(),
                    color: DISCRETE_PALETTE[index % DISCRETE_PALETTE.len()].to_owned(),
                    counts_by_facet,
                }
            })
            .collect();

        let annotations = facet_categories
            .iter()
            .map(|facet| Annotation {
                text: format!("{facet_column}={facet}"),
            })
            .collect();

        Self {
            title: facet_column.to_owned(),
            x_column: x_column.to_owned(),
            facet_column: facet_column.to_owned(),
            category_orders,
            traces,
            annotations,
            layout: HistogramLayout::default(),
            x_axis: AxisStyle::boxed_x_axis(),
            y_axis: AxisStyle::bare_y_axis(),
        }
    }

    /// Rewrites `column=value` facet annotations to bare `value` text.
    /// Annotations without `=` pass through unchanged.
    pub fn strip_facet_prefixes(&mut self) {
        for annotation in &mut self.annotations {
            annotation.text = clean_annotation_text(&annotation.text).to_owned();
        }
    }

    /// Applies host style controls to the chart layout.
    pub fn apply_style(&mut self, style: &StyleParams) {
        self.layout.paper_background_color = style.background_color.clone();
        self.layout.plot_background_color = style.background_color.clone();
        self.layout.font_family = style.font_family.clone();
        self.layout.font_color = style.text_color.clone();
    }
}

/// Segment after the last `=`, or the whole text when none is present.
#[must_use]
pub fn clean_annotation_text(text: &str) -> &str {
    match text.rsplit_once('=') {
        Some((_, value)) => value,
        None => text,
    }
}

fn sorted_categories<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut categories: Vec<String> = values.cloned().collect();
    categories.sort_unstable();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::clean_annotation_text;

    #[test]
    fn annotation_cleanup_takes_last_segment() {
        assert_eq!(clean_annotation_text("A=1"), "1");
        assert_eq!(clean_annotation_text("Smoke=Yes=Often"), "Often");
    }

    #[test]
    fn annotation_cleanup_passes_plain_text_through() {
        assert_eq!(clean_annotation_text("no-equals-sign"), "no-equals-sign");
    }
}
