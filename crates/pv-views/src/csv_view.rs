//! CSV section: dataset stats, a user-configured chart and a sample gallery

use std::sync::Arc;

use egui::{ComboBox, RichText, Ui};
use parking_lot::RwLock;

use pv_api::{ColumnSummary, CsvStats};
use pv_core::ReadySignal;

use crate::section::{Remote, SectionContext, SectionView};
use crate::spec::{build_chart_spec, build_scatter_spec, ChartKind, ChartParams};

/// Registry slot of the user-configured chart.
const CUSTOM_SLOT: &str = "csv.custom";

/// Chart types offered by the controls, in display order.
const KINDS: [ChartKind; 6] = [
    ChartKind::Bar,
    ChartKind::Line,
    ChartKind::Scatter,
    ChartKind::Histogram,
    ChartKind::Pie,
    ChartKind::Doughnut,
];

/// The gallery shows one card per type; the backend picks the columns.
const GALLERY_KINDS: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Histogram, ChartKind::Pie];

pub struct CsvView {
    started: bool,
    stats: Arc<RwLock<Remote<CsvStats>>>,
    columns: Arc<RwLock<Remote<Vec<ColumnSummary>>>>,
    /// Flipped once the column list has landed; the gallery waits on it.
    columns_ready: ReadySignal,

    selected_kind: ChartKind,
    selected_column: String,
    x_column: String,
    y_column: String,
    /// Lifecycle of the custom chart; the spec itself lives in the registry.
    custom: Arc<RwLock<Remote<()>>>,
    /// One entry per gallery card, holding the chosen column name.
    gallery: [Arc<RwLock<Remote<String>>>; 3],
}

impl Default for CsvView {
    fn default() -> Self {
        let (columns_ready, _) = ReadySignal::new();
        Self {
            started: false,
            stats: Arc::default(),
            columns: Arc::default(),
            columns_ready,
            selected_kind: ChartKind::Bar,
            selected_column: String::new(),
            x_column: String::new(),
            y_column: String::new(),
            custom: Arc::default(),
            gallery: Default::default(),
        }
    }
}

impl CsvView {
    fn start(&mut self, ctx: &SectionContext) {
        *self.stats.write() = Remote::Loading;
        let api = ctx.api.clone();
        let state = self.stats.clone();
        ctx.spawn(async move {
            let result = api.csv_stats().await;
            if let Err(e) = &result {
                tracing::warn!("csv stats fetch failed: {e}");
            }
            *state.write() = result.into();
        });

        *self.columns.write() = Remote::Loading;
        let api = ctx.api.clone();
        let state = self.columns.clone();
        let ready = self.columns_ready.clone();
        ctx.spawn(async move {
            let result = api.csv_columns().await;
            if let Err(e) = &result {
                tracing::warn!("csv columns fetch failed: {e}");
            }
            *state.write() = result.into();
            ready.notify();
        });

        for (index, kind) in GALLERY_KINDS.into_iter().enumerate() {
            self.start_gallery_card(ctx, index, kind);
        }
    }

    fn start_gallery_card(&self, ctx: &SectionContext, index: usize, kind: ChartKind) {
        let card = self.gallery[index].clone();
        *card.write() = Remote::Loading;

        let api = ctx.api.clone();
        let registry = ctx.registry.clone();
        let limits = ctx.limits.clone();
        let mut readiness = self.columns_ready.subscribe();
        let slot = format!("csv.sample.{index}");
        let wire = match kind {
            ChartKind::Histogram => "histogram",
            ChartKind::Pie => "pie",
            _ => "bar",
        };

        ctx.spawn(async move {
            // The gallery only makes sense once the controls know the
            // columns; wait for that fetch instead of sleeping.
            if !readiness.wait().await {
                *card.write() = Remote::Failed("column list never arrived".into());
                return;
            }

            // Ask for the requested type first; if the backend cannot
            // satisfy it, take whatever pairing it prefers.
            let fetched = match api.csv_sample_visualization(Some(wire)).await {
                Ok(viz) => Ok(viz),
                Err(e) => {
                    tracing::debug!("typed sample fetch failed, retrying untyped: {e}");
                    api.csv_sample_visualization(None).await
                }
            };

            let built = fetched.and_then(|viz| {
                let kind = ChartKind::from_wire(&viz.chart_type).unwrap_or(kind);
                let params = ChartParams {
                    kind,
                    title: format!("{} - {}", viz.column, kind.label()),
                    x_label: String::new(),
                    y_label: String::new(),
                    sample_limit: match viz.data.kind {
                        pv_api::SeriesKind::Numeric => limits.gallery_points_numeric,
                        pv_api::SeriesKind::Categorical => limits.gallery_points_categorical,
                    },
                    histogram_bins: limits.gallery_bins,
                };
                build_chart_spec(&viz.data, &params).map(|spec| (viz.column, spec))
            });

            match built {
                Ok((column, spec)) => {
                    registry.write().create(&slot, spec);
                    *card.write() = Remote::Ready(column);
                }
                Err(e) => {
                    tracing::warn!("gallery card {index} failed: {e}");
                    *card.write() = Remote::Failed(e.user_message());
                }
            }
        });
    }

    fn create_custom_chart(&self, ctx: &SectionContext) {
        *self.custom.write() = Remote::Loading;
        let api = ctx.api.clone();
        let registry = ctx.registry.clone();
        let limits = ctx.limits.clone();
        let state = self.custom.clone();

        if self.selected_kind.needs_column_pair() {
            let x_name = self.x_column.clone();
            let y_name = self.y_column.clone();
            ctx.spawn(async move {
                let columns = vec![x_name.clone(), y_name.clone()];
                let built = match api
                    .csv_multiple_columns(&columns, limits.column_points)
                    .await
                {
                    Ok(mut data) => match (data.remove(&x_name), data.remove(&y_name)) {
                        (Some(x), Some(y)) => {
                            build_scatter_spec(&x, &y, &x_name, &y_name, limits.column_points)
                        }
                        _ => Err(pv_core::Error::Payload(
                            "requested columns missing from response".into(),
                        )),
                    },
                    Err(e) => Err(e),
                };
                match built {
                    Ok(spec) => {
                        registry.write().create(CUSTOM_SLOT, spec);
                        *state.write() = Remote::Ready(());
                    }
                    Err(e) => {
                        tracing::warn!("scatter chart failed: {e}");
                        *state.write() = Remote::Failed(e.user_message());
                    }
                }
            });
        } else {
            let column = self.selected_column.clone();
            let kind = self.selected_kind;
            ctx.spawn(async move {
                let built = match api.csv_column_data(&column, limits.column_points).await {
                    Ok(series) => {
                        let params = ChartParams {
                            kind,
                            title: format!("{column} - {}", kind.label()),
                            x_label: column.clone(),
                            y_label: String::new(),
                            sample_limit: limits.column_points,
                            histogram_bins: limits.histogram_bins,
                        };
                        build_chart_spec(&series, &params)
                    }
                    Err(e) => Err(e),
                };
                match built {
                    Ok(spec) => {
                        registry.write().create(CUSTOM_SLOT, spec);
                        *state.write() = Remote::Ready(());
                    }
                    Err(e) => {
                        tracing::warn!("custom chart failed: {e}");
                        *state.write() = Remote::Failed(e.user_message());
                    }
                }
            });
        }
    }

    fn stats_row(&self, ui: &mut Ui) {
        let stats = self.stats.read();
        match &*stats {
            Remote::Ready(stats) => {
                ui.horizontal_wrapped(|ui| {
                    pv_ui::stat_card(ui, "File", &stats.file_info.filename);
                    pv_ui::stat_card(
                        ui,
                        "Size",
                        &format!("{:.1} MB", stats.file_info.file_size_mb),
                    );
                    pv_ui::stat_card(ui, "Rows", &stats.dataset_info.total_rows.to_string());
                    pv_ui::stat_card(ui, "Columns", &stats.dataset_info.total_columns.to_string());
                    pv_ui::stat_card(
                        ui,
                        "Numeric",
                        &stats.dataset_info.numeric_columns_count.to_string(),
                    );
                    pv_ui::stat_card(
                        ui,
                        "Categorical",
                        &stats.dataset_info.categorical_columns_count.to_string(),
                    );
                    pv_ui::stat_card(
                        ui,
                        "Missing",
                        &format!("{:.2}%", stats.dataset_info.missing_percentage),
                    );
                });
            }
            Remote::Failed(message) => pv_ui::error_placeholder(ui, message),
            _ => pv_ui::loading_placeholder(ui, "dataset stats"),
        }
    }

    fn controls(&mut self, ctx: &SectionContext, ui: &mut Ui) {
        let (all_columns, numeric_columns) = {
            let columns = self.columns.read();
            match &*columns {
                Remote::Ready(list) => (
                    list.iter().map(|c| c.name.clone()).collect::<Vec<_>>(),
                    list.iter()
                        .filter(|c| c.is_numeric)
                        .map(|c| c.name.clone())
                        .collect::<Vec<_>>(),
                ),
                Remote::Failed(message) => {
                    pv_ui::error_placeholder(ui, message);
                    return;
                }
                _ => {
                    pv_ui::loading_placeholder(ui, "columns");
                    return;
                }
            }
        };

        ui.horizontal(|ui| {
            ComboBox::from_label("Chart type")
                .selected_text(self.selected_kind.label())
                .show_ui(ui, |ui| {
                    for kind in KINDS {
                        ui.selectable_value(&mut self.selected_kind, kind, kind.label());
                    }
                });

            if self.selected_kind.needs_column_pair() {
                ComboBox::from_label("X column")
                    .selected_text(&self.x_column)
                    .show_ui(ui, |ui| {
                        for name in &numeric_columns {
                            ui.selectable_value(&mut self.x_column, name.clone(), name);
                        }
                    });
                ComboBox::from_label("Y column")
                    .selected_text(&self.y_column)
                    .show_ui(ui, |ui| {
                        for name in &numeric_columns {
                            ui.selectable_value(&mut self.y_column, name.clone(), name);
                        }
                    });
            } else {
                ComboBox::from_label("Column")
                    .selected_text(&self.selected_column)
                    .show_ui(ui, |ui| {
                        for name in &all_columns {
                            ui.selectable_value(&mut self.selected_column, name.clone(), name);
                        }
                    });
            }

            let ready = if self.selected_kind.needs_column_pair() {
                !self.x_column.is_empty() && !self.y_column.is_empty()
            } else {
                !self.selected_column.is_empty()
            };
            if ui
                .add_enabled(ready, egui::Button::new("Create chart"))
                .clicked()
            {
                self.create_custom_chart(ctx);
            }
        });
    }

    fn custom_chart(&self, ctx: &SectionContext, ui: &mut Ui) {
        let state = self.custom.read();
        if let Some(message) = state.error() {
            pv_ui::error_placeholder(ui, message);
            return;
        }
        let registry = ctx.registry.read();
        match registry.get(CUSTOM_SLOT) {
            Some(handle) => crate::charts::draw_chart(ui, CUSTOM_SLOT, handle),
            None if state.is_loading() => pv_ui::loading_placeholder(ui, "chart"),
            None => {
                ui.weak("Pick a chart type and a column, then create a chart.");
            }
        }
    }

    fn gallery(&self, ctx: &SectionContext, ui: &mut Ui) {
        ui.heading("Sample charts");
        ui.columns(GALLERY_KINDS.len(), |columns| {
            for (index, column_ui) in columns.iter_mut().enumerate() {
                let slot = format!("csv.sample.{index}");
                let card = self.gallery[index].read();
                match &*card {
                    Remote::Ready(column) => {
                        column_ui.label(RichText::new(column).small().weak());
                        let registry = ctx.registry.read();
                        if let Some(handle) = registry.get(&slot) {
                            crate::charts::draw_chart(column_ui, &slot, handle);
                        }
                    }
                    Remote::Failed(message) => pv_ui::error_placeholder(column_ui, message),
                    _ => pv_ui::loading_placeholder(column_ui, "sample"),
                }
            }
        });
    }
}

impl SectionView for CsvView {
    fn id(&self) -> &'static str {
        "csv"
    }

    fn title(&self) -> &'static str {
        "Player Data"
    }

    fn ui(&mut self, ctx: &SectionContext, ui: &mut Ui) {
        if !self.started {
            self.started = true;
            self.start(ctx);
        }

        self.stats_row(ui);
        ui.separator();
        self.controls(ctx, ui);
        self.custom_chart(ctx, ui);
        ui.separator();
        self.gallery(ctx, ui);
    }
}
