//! View system for the pitchview dashboard
//!
//! Three independent section views (CSV, images, text) fetch from the
//! backend and render charts through a shared slot registry. A single
//! chart-spec builder turns fetched series into drawable specs.

mod charts;
mod section;
mod viewport;

pub mod spec;
pub mod utils;

mod csv_view;
mod image_view;
mod text_view;

pub use charts::{draw_chart, draw_swatch_row, draw_swatch_strip};
pub use section::{FetchLimits, Remote, SectionContext, SectionView};
pub use spec::{build_chart_spec, build_scatter_spec, ChartKind, ChartSpec, SeriesLine};
pub use viewport::Viewport;

pub use csv_view::CsvView;
pub use image_view::ImageView;
pub use text_view::TextView;
