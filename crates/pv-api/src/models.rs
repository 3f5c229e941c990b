//! Wire models for the backend API
//!
//! Shapes follow what the backend actually sends, field for field. All of
//! these are transient: deserialized once per fetch, rendered, and dropped
//! when the widget that shows them is replaced.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// Value of the `status` discriminator treated as success.
pub const STATUS_SUCCESS: &str = "success";

// ---------------------------------------------------------------------------
// CSV section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CsvStats {
    pub file_info: FileInfo,
    pub dataset_info: DatasetInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileInfo {
    pub filename: String,
    #[serde(default)]
    pub file_size_bytes: u64,
    #[serde(default)]
    pub file_size_mb: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetInfo {
    pub total_rows: u64,
    pub total_columns: u64,
    #[serde(default)]
    pub numeric_columns_count: u64,
    #[serde(default)]
    pub categorical_columns_count: u64,
    #[serde(default)]
    pub missing_values_total: u64,
    #[serde(default)]
    pub missing_percentage: f64,
}

/// One column of the dataset, with the per-column statistics the backend
/// precomputes for numeric columns.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub is_numeric: bool,
    #[serde(rename = "type", default)]
    pub dtype: Option<String>,
    #[serde(default)]
    pub unique_count: Option<u64>,
    #[serde(default)]
    pub null_count: Option<u64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub std: Option<f64>,
}

/// Shape tag of a fetched series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Numeric,
    Categorical,
}

/// Axis label as the backend sends it: category names for categorical
/// series, row indices for numeric ones.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelValue::Text(s) => f.write_str(s),
            LabelValue::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
        }
    }
}

/// Ordered values (plus optional labels) for one column or channel.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesData {
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub data: Vec<f64>,
    #[serde(default)]
    pub labels: Vec<LabelValue>,
}

impl SeriesData {
    /// Labels as plain strings, padded with indices when absent.
    pub fn label_strings(&self) -> Vec<String> {
        if self.labels.len() >= self.data.len() {
            self.labels.iter().map(|l| l.to_string()).collect()
        } else {
            (0..self.data.len()).map(|i| i.to_string()).collect()
        }
    }
}

/// A backend-appointed column + chart-type pairing for the sample gallery.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleVisualization {
    pub column: String,
    pub chart_type: String,
    pub data: SeriesData,
}

// ---------------------------------------------------------------------------
// Image section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ImageStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub valid: u64,
    #[serde(default)]
    pub width: Option<RangeStats>,
    #[serde(default)]
    pub height: Option<RangeStats>,
    #[serde(default)]
    pub size_kb: Option<RangeStats>,
    #[serde(default)]
    pub formats: HashMap<String, u64>,
}

/// min / max / mean summary of one measured dimension.
#[derive(Debug, Clone, Deserialize)]
pub struct RangeStats {
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
    pub mean: f64,
    #[serde(default)]
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogoEntry {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub size_kb: Option<f64>,
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
    /// Present when the backend failed to read this file; such entries are
    /// filtered out of the gallery.
    #[serde(default)]
    pub error: Option<String>,
}

/// Dominant-color result for one image (k-means on the backend).
#[derive(Debug, Clone, Deserialize)]
pub struct ImageAnalysis {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub colors: Vec<ColorSwatch>,
    #[serde(default)]
    pub total_pixels: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColorSwatch {
    pub hex: String,
    pub rgb: [u8; 3],
    pub percentage: f64,
}

/// 256-bucket channel histograms, RGB and HSV.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageHistograms {
    #[serde(default)]
    pub rgb: Option<RgbHistograms>,
    #[serde(default)]
    pub hsv: Option<HsvHistograms>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RgbHistograms {
    pub r: Vec<f64>,
    pub g: Vec<f64>,
    pub b: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HsvHistograms {
    pub h: Vec<f64>,
    pub s: Vec<f64>,
    pub v: Vec<f64>,
}

/// One club's top colors, for the cross-club comparison chart.
#[derive(Debug, Clone, Deserialize)]
pub struct ClubPalette {
    pub name: String,
    #[serde(default)]
    pub colors: Vec<ColorSwatch>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlobalAnalysis {
    #[serde(default)]
    pub total_images: u64,
    #[serde(default)]
    pub global_colors: Vec<ColorSwatch>,
    #[serde(default)]
    pub color_distribution: ColorDistribution,
    #[serde(default)]
    pub format_distribution: HashMap<String, u64>,
    #[serde(default)]
    pub size_distribution: Option<RangeStats>,
}

/// How many images lean towards each channel overall.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorDistribution {
    #[serde(default)]
    pub red_dominant: u64,
    #[serde(default)]
    pub green_dominant: u64,
    #[serde(default)]
    pub blue_dominant: u64,
    #[serde(default)]
    pub neutral: u64,
}

// ---------------------------------------------------------------------------
// Text section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleEntry {
    pub name: String,
    #[serde(default)]
    pub size_kb: f64,
    #[serde(rename = "type", default)]
    pub file_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextAnalysis {
    pub stats: TextStats,
    pub word_frequencies: WordFrequencies,
    pub wordcloud: WordCloudData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextStats {
    pub total_characters: u64,
    pub total_words: u64,
    pub total_sentences: u64,
    #[serde(default)]
    pub total_paragraphs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordFrequencies {
    pub words: Vec<String>,
    pub counts: Vec<u64>,
    #[serde(default)]
    pub total_words: u64,
    #[serde(default)]
    pub unique_words: u64,
}

/// Word weights for the cloud, already normalized by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct WordCloudData {
    pub words: Vec<String>,
    pub frequencies: Vec<f64>,
    #[serde(default)]
    pub max_frequency: f64,
}

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

macro_rules! envelope {
    ($name:ident, $field:ident: $ty:ty) => {
        #[derive(Debug, Deserialize)]
        pub struct $name {
            pub status: String,
            #[serde(default)]
            pub message: Option<String>,
            #[serde(default)]
            pub $field: Option<$ty>,
        }
    };
}

envelope!(CsvStatsResponse, stats: CsvStats);
envelope!(CsvColumnsResponse, columns: Vec<ColumnSummary>);
envelope!(ColumnDataResponse, data: SeriesData);
envelope!(MultipleColumnsResponse, data: HashMap<String, SeriesData>);
envelope!(SampleVisualizationResponse, visualization: SampleVisualization);
envelope!(ImageStatsResponse, stats: ImageStats);
envelope!(LogosResponse, logos: Vec<LogoEntry>);
envelope!(ImageAnalysisResponse, image: ImageAnalysis);
envelope!(ImageHistogramsResponse, histograms: ImageHistograms);
envelope!(ComparisonResponse, clubs: Vec<ClubPalette>);
envelope!(GlobalAnalysisResponse, analysis: GlobalAnalysis);
envelope!(ArticlesResponse, articles: Vec<ArticleEntry>);
envelope!(TextAnalysisResponse, result: TextAnalysis);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_csv_stats_envelope() {
        let payload = r#"{
            "status": "success",
            "stats": {
                "file_info": {"filename": "player_stats.csv", "file_size_bytes": 2097152, "file_size_mb": 2.0},
                "dataset_info": {
                    "total_rows": 2689, "total_columns": 31,
                    "numeric_columns_count": 26, "categorical_columns_count": 5,
                    "missing_values_total": 114, "missing_percentage": 0.14
                }
            }
        }"#;
        let resp: CsvStatsResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(resp.status, STATUS_SUCCESS);
        let stats = resp.stats.unwrap();
        assert_eq!(stats.file_info.filename, "player_stats.csv");
        assert_eq!(stats.dataset_info.total_rows, 2689);
    }

    #[test]
    fn decodes_soft_failure_envelope() {
        let payload = r#"{"status": "error", "message": "Fichier non trouvé"}"#;
        let resp: CsvStatsResponse = serde_json::from_str(payload).unwrap();
        assert_ne!(resp.status, STATUS_SUCCESS);
        assert!(resp.stats.is_none());
        assert_eq!(resp.message.as_deref(), Some("Fichier non trouvé"));
    }

    #[test]
    fn decodes_numeric_series_with_index_labels() {
        let payload = r#"{"type": "numeric", "data": [1.5, 2.0, 3.25], "labels": [0, 1, 2]}"#;
        let series: SeriesData = serde_json::from_str(payload).unwrap();
        assert_eq!(series.kind, SeriesKind::Numeric);
        assert_eq!(series.data.len(), 3);
        assert_eq!(series.label_strings(), vec!["0", "1", "2"]);
    }

    #[test]
    fn decodes_categorical_series_with_text_labels() {
        let payload = r#"{"type": "categorical", "data": [120, 87, 3], "labels": ["FW", "MF", "GK"]}"#;
        let series: SeriesData = serde_json::from_str(payload).unwrap();
        assert_eq!(series.kind, SeriesKind::Categorical);
        assert_eq!(series.label_strings(), vec!["FW", "MF", "GK"]);
    }

    #[test]
    fn missing_labels_fall_back_to_indices() {
        let payload = r#"{"type": "numeric", "data": [4.0, 5.0]}"#;
        let series: SeriesData = serde_json::from_str(payload).unwrap();
        assert_eq!(series.label_strings(), vec!["0", "1"]);
    }

    #[test]
    fn decodes_logo_entries_including_errors() {
        let payload = r#"{
            "status": "success",
            "logos": [
                {"name": "arsenal.png", "path": "/static/assets/images_clubs/arsenal.png",
                 "width": 512, "height": 512, "format": "PNG", "size_kb": 34.2, "aspect_ratio": 1.0},
                {"name": "broken.png", "path": "/static/assets/images_clubs/broken.png",
                 "error": "cannot identify image file"}
            ]
        }"#;
        let resp: LogosResponse = serde_json::from_str(payload).unwrap();
        let logos = resp.logos.unwrap();
        assert_eq!(logos.len(), 2);
        assert!(logos[0].error.is_none());
        assert_eq!(logos[1].error.as_deref(), Some("cannot identify image file"));
    }

    #[test]
    fn decodes_image_analysis_swatches() {
        let payload = r##"{
            "status": "success",
            "image": {
                "filename": "arsenal.png",
                "colors": [
                    {"hex": "#ef0107", "rgb": [239, 1, 7], "frequency": 10234, "percentage": 41.3},
                    {"hex": "#023474", "rgb": [2, 52, 116], "frequency": 5120, "percentage": 20.7}
                ],
                "total_pixels": 262144
            }
        }"##;
        let resp: ImageAnalysisResponse = serde_json::from_str(payload).unwrap();
        let image = resp.image.unwrap();
        assert_eq!(image.colors.len(), 2);
        assert_eq!(image.colors[0].rgb, [239, 1, 7]);
        assert!((image.colors[0].percentage - 41.3).abs() < 1e-9);
    }

    #[test]
    fn decodes_text_analysis() {
        let payload = r#"{
            "status": "success",
            "result": {
                "stats": {"total_characters": 5230, "total_words": 954, "total_sentences": 48, "total_paragraphs": 12},
                "word_frequencies": {"words": ["football", "club"], "counts": [31, 24], "total_words": 610, "unique_words": 402},
                "wordcloud": {"words": ["football", "club"], "frequencies": [1.0, 0.77], "max_frequency": 1.0}
            }
        }"#;
        let resp: TextAnalysisResponse = serde_json::from_str(payload).unwrap();
        let result = resp.result.unwrap();
        assert_eq!(result.stats.total_words, 954);
        assert_eq!(result.word_frequencies.words[0], "football");
        assert!((result.wordcloud.max_frequency - 1.0).abs() < 1e-9);
    }

    #[test]
    fn decodes_global_analysis_with_sparse_fields() {
        let payload = r##"{
            "status": "success",
            "analysis": {
                "total_images": 20,
                "global_colors": [{"hex": "#ffffff", "rgb": [255, 255, 255], "percentage": 18.5}],
                "color_distribution": {"red_dominant": 6, "green_dominant": 2, "blue_dominant": 7, "neutral": 5},
                "format_distribution": {"PNG": 18, "JPEG": 2},
                "size_distribution": {"min": 4.1, "max": 210.9, "mean": 56.2}
            }
        }"##;
        let resp: GlobalAnalysisResponse = serde_json::from_str(payload).unwrap();
        let analysis = resp.analysis.unwrap();
        assert_eq!(analysis.total_images, 20);
        assert_eq!(analysis.color_distribution.blue_dominant, 7);
        assert_eq!(analysis.format_distribution["PNG"], 18);
    }
}
