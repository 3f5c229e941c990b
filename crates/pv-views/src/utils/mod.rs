//! Numeric helpers shared by all chart builders

mod binning;
mod colors;
mod sampling;

pub use binning::{histogram_bins, HistogramBins};
pub use colors::{distinct_colors, hsl_color, word_palette_color};
pub use sampling::sample_series;
