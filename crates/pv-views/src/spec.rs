//! Chart specifications
//!
//! A `ChartSpec` is everything the drawing code needs: kind, labels,
//! values, colors. One parameterized builder produces specs for both the
//! user-created charts and the sample gallery; the two paths differ only
//! in their sampling limits.

use egui::Color32;
use pv_core::{Error, Result};
use pv_api::{SeriesData, SeriesKind};

use crate::utils::{distinct_colors, histogram_bins, sample_series};

/// Default series color, shared by bars, lines and scatter points.
pub const ACCENT: Color32 = Color32::from_rgb(102, 126, 234);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
    Histogram,
    Pie,
    Doughnut,
}

impl ChartKind {
    /// Parse the backend's chart-type tag.
    pub fn from_wire(tag: &str) -> Option<ChartKind> {
        match tag {
            "bar" => Some(ChartKind::Bar),
            "line" => Some(ChartKind::Line),
            "scatter" => Some(ChartKind::Scatter),
            "histogram" => Some(ChartKind::Histogram),
            "pie" => Some(ChartKind::Pie),
            "donut" | "doughnut" => Some(ChartKind::Doughnut),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar chart",
            ChartKind::Line => "Line chart",
            ChartKind::Scatter => "Scatter plot",
            ChartKind::Histogram => "Histogram",
            ChartKind::Pie => "Pie chart",
            ChartKind::Doughnut => "Doughnut chart",
        }
    }

    /// Scatter is the only kind needing an X and a Y column.
    pub fn needs_column_pair(&self) -> bool {
        matches!(self, ChartKind::Scatter)
    }
}

/// One named line in a multi-line chart (RGB/HSV channel histograms).
#[derive(Debug, Clone)]
pub struct SeriesLine {
    pub name: String,
    pub values: Vec<f64>,
    pub color: Color32,
}

/// A fully prepared chart, ready to draw. Stored in the slot registry.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Tick labels, parallel to `values`.
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Scatter points; empty for other kinds.
    pub points: Vec<[f64; 2]>,
    /// Per-element colors (pie slices, swatch-colored bars). Empty means
    /// everything uses [`ACCENT`].
    pub colors: Vec<Color32>,
    /// Extra lines for multi-channel charts.
    pub lines: Vec<SeriesLine>,
    /// Render bars sideways (word-frequency ranking).
    pub horizontal: bool,
}

impl ChartSpec {
    fn empty(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            labels: Vec::new(),
            values: Vec::new(),
            points: Vec::new(),
            colors: Vec::new(),
            lines: Vec::new(),
            horizontal: false,
        }
    }

    /// Sideways bar chart ranking labeled values.
    pub fn horizontal_bars(
        title: impl Into<String>,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> Self {
        Self {
            labels,
            values,
            horizontal: true,
            ..Self::empty(ChartKind::Bar, title)
        }
    }

    /// Bar chart with one explicit color per bar.
    pub fn colored_bars(
        title: impl Into<String>,
        labels: Vec<String>,
        values: Vec<f64>,
        colors: Vec<Color32>,
    ) -> Self {
        Self {
            labels,
            values,
            colors,
            ..Self::empty(ChartKind::Bar, title)
        }
    }

    /// Multi-line chart sharing one set of tick labels.
    pub fn multi_line(
        title: impl Into<String>,
        labels: Vec<String>,
        lines: Vec<SeriesLine>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            labels,
            lines,
            x_label: x_label.into(),
            y_label: y_label.into(),
            ..Self::empty(ChartKind::Line, title)
        }
    }

    /// Pie/doughnut from labeled values, slices colored from the hue wheel
    /// unless explicit colors are given.
    pub fn pie(
        kind: ChartKind,
        title: impl Into<String>,
        labels: Vec<String>,
        values: Vec<f64>,
        colors: Option<Vec<Color32>>,
    ) -> Self {
        let colors = colors.unwrap_or_else(|| distinct_colors(values.len()));
        Self {
            labels,
            values,
            colors,
            ..Self::empty(kind, title)
        }
    }
}

/// Parameters of the unified builder.
#[derive(Debug, Clone)]
pub struct ChartParams {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Point budget for numeric series and category cap for categorical ones.
    pub sample_limit: usize,
    /// Bin count when `kind` is `Histogram`.
    pub histogram_bins: usize,
}

/// Build a chart spec from one fetched series.
///
/// The mapping follows what the backend appoints per column shape: numeric
/// series render as bar/line/histogram, categorical ones as bar/pie/
/// doughnut. Anything else is a payload mismatch.
pub fn build_chart_spec(series: &SeriesData, params: &ChartParams) -> Result<ChartSpec> {
    let mut spec = ChartSpec::empty(params.kind, params.title.clone());
    spec.x_label = params.x_label.clone();
    spec.y_label = params.y_label.clone();

    match (series.kind, params.kind) {
        (SeriesKind::Numeric, ChartKind::Bar | ChartKind::Line) => {
            spec.values = sample_series(&series.data, params.sample_limit);
            spec.labels = sample_series(&series.label_strings(), params.sample_limit);
        }
        (SeriesKind::Numeric, ChartKind::Histogram) => {
            let bins = histogram_bins(&series.data, params.histogram_bins)?;
            spec.labels = bins.labels;
            spec.values = bins.frequencies.into_iter().map(|f| f as f64).collect();
        }
        (SeriesKind::Categorical, ChartKind::Bar) => {
            spec.values = series.data.iter().copied().take(params.sample_limit).collect();
            spec.labels = series
                .label_strings()
                .into_iter()
                .take(params.sample_limit)
                .collect();
        }
        (SeriesKind::Categorical, ChartKind::Pie | ChartKind::Doughnut) => {
            spec.values = series.data.clone();
            spec.labels = series.label_strings();
            spec.colors = distinct_colors(spec.values.len());
        }
        (shape, kind) => {
            return Err(Error::Payload(format!(
                "{:?} series cannot render as {}",
                shape,
                kind.label()
            )));
        }
    }
    Ok(spec)
}

/// Build a scatter spec from an X/Y column pair.
///
/// Values are paired index-wise up to the shorter column, then decimated to
/// the point budget.
pub fn build_scatter_spec(
    x: &SeriesData,
    y: &SeriesData,
    x_name: &str,
    y_name: &str,
    sample_limit: usize,
) -> Result<ChartSpec> {
    if x.data.is_empty() || y.data.is_empty() {
        return Err(Error::EmptyInput);
    }
    let paired: Vec<[f64; 2]> = x
        .data
        .iter()
        .zip(y.data.iter())
        .map(|(&a, &b)| [a, b])
        .collect();

    let mut spec = ChartSpec::empty(ChartKind::Scatter, format!("{x_name} vs {y_name}"));
    spec.points = sample_series(&paired, sample_limit);
    spec.x_label = x_name.to_string();
    spec.y_label = y_name.to_string();
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_api::LabelValue;

    fn numeric(values: Vec<f64>) -> SeriesData {
        SeriesData {
            kind: SeriesKind::Numeric,
            labels: (0..values.len())
                .map(|i| LabelValue::Number(i as f64))
                .collect(),
            data: values,
        }
    }

    fn categorical(pairs: &[(&str, f64)]) -> SeriesData {
        SeriesData {
            kind: SeriesKind::Categorical,
            labels: pairs
                .iter()
                .map(|(l, _)| LabelValue::Text(l.to_string()))
                .collect(),
            data: pairs.iter().map(|(_, v)| *v).collect(),
        }
    }

    fn params(kind: ChartKind, sample_limit: usize) -> ChartParams {
        ChartParams {
            kind,
            title: "test".into(),
            x_label: String::new(),
            y_label: String::new(),
            sample_limit,
            histogram_bins: 20,
        }
    }

    #[test]
    fn numeric_bar_honors_the_point_budget() {
        let series = numeric((0..100).map(|i| i as f64).collect());
        let spec = build_chart_spec(&series, &params(ChartKind::Bar, 30)).unwrap();
        assert_eq!(spec.values.len(), 30);
        assert_eq!(spec.labels.len(), 30);
        assert_eq!(spec.values[0], 0.0);
    }

    #[test]
    fn histogram_uses_the_configured_bin_count() {
        let series = numeric((1..=10).map(|i| i as f64).collect());
        let mut p = params(ChartKind::Histogram, 100);
        p.histogram_bins = 5;
        let spec = build_chart_spec(&series, &p).unwrap();
        assert_eq!(spec.values.len(), 5);
        assert_eq!(spec.values.iter().sum::<f64>(), 10.0);
        assert_eq!(spec.labels[0], "1.00");
    }

    #[test]
    fn categorical_pie_gets_one_color_per_slice() {
        let series = categorical(&[("FW", 120.0), ("MF", 87.0), ("GK", 3.0)]);
        let spec = build_chart_spec(&series, &params(ChartKind::Pie, 100)).unwrap();
        assert_eq!(spec.colors.len(), 3);
        assert_eq!(spec.labels, vec!["FW", "MF", "GK"]);
    }

    #[test]
    fn categorical_bar_caps_the_category_count() {
        let pairs: Vec<(String, f64)> = (0..40).map(|i| (format!("c{i}"), i as f64)).collect();
        let borrowed: Vec<(&str, f64)> = pairs.iter().map(|(l, v)| (l.as_str(), *v)).collect();
        let series = categorical(&borrowed);
        let spec = build_chart_spec(&series, &params(ChartKind::Bar, 20)).unwrap();
        assert_eq!(spec.values.len(), 20);
        assert_eq!(spec.labels[0], "c0");
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let series = numeric(vec![1.0, 2.0]);
        assert!(build_chart_spec(&series, &params(ChartKind::Pie, 10)).is_err());
        let series = categorical(&[("a", 1.0)]);
        assert!(build_chart_spec(&series, &params(ChartKind::Histogram, 10)).is_err());
    }

    #[test]
    fn scatter_pairs_to_the_shorter_column() {
        let x = numeric(vec![1.0, 2.0, 3.0, 4.0]);
        let y = numeric(vec![10.0, 20.0, 30.0]);
        let spec = build_scatter_spec(&x, &y, "Goals", "Assists", 100).unwrap();
        assert_eq!(spec.points.len(), 3);
        assert_eq!(spec.points[0], [1.0, 10.0]);
        assert_eq!(spec.title, "Goals vs Assists");
    }

    #[test]
    fn scatter_decimates_to_the_budget() {
        let x = numeric((0..200).map(|i| i as f64).collect());
        let y = numeric((0..200).map(|i| (i * 2) as f64).collect());
        let spec = build_scatter_spec(&x, &y, "x", "y", 50).unwrap();
        assert_eq!(spec.points.len(), 50);
        assert_eq!(spec.points[0], [0.0, 0.0]);
    }

    #[test]
    fn empty_scatter_input_is_rejected() {
        let x = numeric(vec![]);
        let y = numeric(vec![1.0]);
        assert!(matches!(
            build_scatter_spec(&x, &y, "x", "y", 10),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn wire_tags_parse() {
        assert_eq!(ChartKind::from_wire("bar"), Some(ChartKind::Bar));
        assert_eq!(ChartKind::from_wire("donut"), Some(ChartKind::Doughnut));
        assert_eq!(ChartKind::from_wire("sankey"), None);
    }
}
