//! Image section: logo gallery, per-image color analysis, global analysis

use std::sync::Arc;

use egui::{Color32, RichText, Ui};
use parking_lot::RwLock;

use pv_api::{ClubPalette, GlobalAnalysis, ImageAnalysis, ImageStats, LogoEntry};
use pv_core::ReadySignal;

use crate::charts::{draw_chart, draw_swatch_row, draw_swatch_strip};
use crate::section::{Remote, SectionContext, SectionView};
use crate::spec::{ChartKind, ChartSpec, SeriesLine};
use crate::utils::sample_series;

const COLORS_SLOT: &str = "image.colors";
const RGB_SLOT: &str = "image.rgb";
const HSV_SLOT: &str = "image.hsv";
const COMPARISON_SLOT: &str = "image.comparison";
const GLOBAL_COLORS_SLOT: &str = "image.global.colors";
const GLOBAL_DOMINANCE_SLOT: &str = "image.global.dominance";
const GLOBAL_FORMATS_SLOT: &str = "image.global.formats";

const RED: Color32 = Color32::from_rgb(231, 76, 60);
const GREEN: Color32 = Color32::from_rgb(46, 204, 113);
const BLUE: Color32 = Color32::from_rgb(52, 152, 219);
const NEUTRAL: Color32 = Color32::from_rgb(149, 165, 166);

pub struct ImageView {
    started: bool,
    stats: Arc<RwLock<Remote<ImageStats>>>,
    /// Flipped once the stats layout exists; the heavier global and
    /// comparison fetches wait on it.
    stats_ready: ReadySignal,
    logos: Arc<RwLock<Remote<Vec<LogoEntry>>>>,

    selected: Option<String>,
    analysis: Arc<RwLock<Remote<ImageAnalysis>>>,
    histograms: Arc<RwLock<Remote<()>>>,

    comparison: Arc<RwLock<Remote<Vec<ClubPalette>>>>,
    global: Arc<RwLock<Remote<GlobalAnalysis>>>,
}

impl Default for ImageView {
    fn default() -> Self {
        let (stats_ready, _) = ReadySignal::new();
        Self {
            started: false,
            stats: Arc::default(),
            stats_ready,
            logos: Arc::default(),
            selected: None,
            analysis: Arc::default(),
            histograms: Arc::default(),
            comparison: Arc::default(),
            global: Arc::default(),
        }
    }
}

impl ImageView {
    fn start(&mut self, ctx: &SectionContext) {
        *self.stats.write() = Remote::Loading;
        let api = ctx.api.clone();
        let state = self.stats.clone();
        let ready = self.stats_ready.clone();
        ctx.spawn(async move {
            let result = api.image_stats().await;
            if let Err(e) = &result {
                tracing::warn!("image stats fetch failed: {e}");
            }
            *state.write() = result.into();
            ready.notify();
        });

        *self.logos.write() = Remote::Loading;
        let api = ctx.api.clone();
        let state = self.logos.clone();
        ctx.spawn(async move {
            // Entries the backend could not read carry an error field and
            // are dropped from the gallery here.
            let result = api
                .image_logos()
                .await
                .map(|logos| -> Vec<LogoEntry> {
                    logos.into_iter().filter(|l| l.error.is_none()).collect()
                });
            if let Err(e) = &result {
                tracing::warn!("logos fetch failed: {e}");
            }
            *state.write() = result.into();
        });

        self.start_comparison(ctx);
        self.start_global(ctx);
    }

    fn start_comparison(&self, ctx: &SectionContext) {
        *self.comparison.write() = Remote::Loading;
        let api = ctx.api.clone();
        let registry = ctx.registry.clone();
        let state = self.comparison.clone();
        let limit = ctx.limits.comparison_clubs;
        let mut readiness = self.stats_ready.subscribe();
        ctx.spawn(async move {
            if !readiness.wait().await {
                *state.write() = Remote::Failed("image stats never arrived".into());
                return;
            }
            match api.image_comparison(limit).await {
                Ok(clubs) => {
                    // Grouped bars: each club's top three colors side by
                    // side, filled with the colors themselves, separated by
                    // an invisible spacer bar.
                    let mut labels = Vec::new();
                    let mut values = Vec::new();
                    let mut colors = Vec::new();
                    for club in &clubs {
                        for (rank, swatch) in club.colors.iter().take(3).enumerate() {
                            labels.push(if rank == 0 {
                                club.name.clone()
                            } else {
                                String::new()
                            });
                            values.push(swatch.percentage);
                            let [r, g, b] = swatch.rgb;
                            colors.push(Color32::from_rgb(r, g, b));
                        }
                        labels.push(String::new());
                        values.push(0.0);
                        colors.push(Color32::TRANSPARENT);
                    }
                    registry.write().create(
                        COMPARISON_SLOT,
                        ChartSpec::colored_bars("Top colors per club", labels, values, colors),
                    );
                    *state.write() = Remote::Ready(clubs);
                }
                Err(e) => {
                    tracing::warn!("comparison fetch failed: {e}");
                    *state.write() = Remote::Failed(e.user_message());
                }
            }
        });
    }

    fn start_global(&self, ctx: &SectionContext) {
        *self.global.write() = Remote::Loading;
        let api = ctx.api.clone();
        let registry = ctx.registry.clone();
        let state = self.global.clone();
        let mut readiness = self.stats_ready.subscribe();
        ctx.spawn(async move {
            if !readiness.wait().await {
                *state.write() = Remote::Failed("image stats never arrived".into());
                return;
            }
            match api.image_global_analysis().await {
                Ok(analysis) => {
                    let mut registry = registry.write();

                    let labels: Vec<String> =
                        analysis.global_colors.iter().map(|c| c.hex.clone()).collect();
                    let values: Vec<f64> =
                        analysis.global_colors.iter().map(|c| c.percentage).collect();
                    let colors: Vec<Color32> = analysis
                        .global_colors
                        .iter()
                        .map(|c| Color32::from_rgb(c.rgb[0], c.rgb[1], c.rgb[2]))
                        .collect();
                    registry.create(
                        GLOBAL_COLORS_SLOT,
                        ChartSpec::colored_bars("Colors across all logos", labels, values, colors),
                    );

                    let d = &analysis.color_distribution;
                    registry.create(
                        GLOBAL_DOMINANCE_SLOT,
                        ChartSpec::pie(
                            ChartKind::Doughnut,
                            "Channel dominance",
                            vec![
                                "Red".into(),
                                "Green".into(),
                                "Blue".into(),
                                "Neutral".into(),
                            ],
                            vec![
                                d.red_dominant as f64,
                                d.green_dominant as f64,
                                d.blue_dominant as f64,
                                d.neutral as f64,
                            ],
                            Some(vec![RED, GREEN, BLUE, NEUTRAL]),
                        ),
                    );

                    let mut formats: Vec<(&String, &u64)> =
                        analysis.format_distribution.iter().collect();
                    formats.sort_by(|a, b| b.1.cmp(a.1));
                    registry.create(
                        GLOBAL_FORMATS_SLOT,
                        ChartSpec::pie(
                            ChartKind::Pie,
                            "File formats",
                            formats.iter().map(|(name, _)| (*name).clone()).collect(),
                            formats.iter().map(|(_, count)| **count as f64).collect(),
                            None,
                        ),
                    );

                    drop(registry);
                    *state.write() = Remote::Ready(analysis);
                }
                Err(e) => {
                    tracing::warn!("global analysis fetch failed: {e}");
                    *state.write() = Remote::Failed(e.user_message());
                }
            }
        });
    }

    fn select(&mut self, ctx: &SectionContext, name: String) {
        self.selected = Some(name.clone());
        *self.analysis.write() = Remote::Loading;
        *self.histograms.write() = Remote::Loading;

        let api = ctx.api.clone();
        let registry = ctx.registry.clone();
        let state = self.analysis.clone();
        let image = name.clone();
        ctx.spawn(async move {
            match api.image_analysis(&image).await {
                Ok(analysis) => {
                    let labels: Vec<String> =
                        analysis.colors.iter().map(|c| c.hex.clone()).collect();
                    let values: Vec<f64> =
                        analysis.colors.iter().map(|c| c.percentage).collect();
                    let colors: Vec<Color32> = analysis
                        .colors
                        .iter()
                        .map(|c| Color32::from_rgb(c.rgb[0], c.rgb[1], c.rgb[2]))
                        .collect();
                    registry.write().create(
                        COLORS_SLOT,
                        ChartSpec::colored_bars("Color share", labels, values, colors),
                    );
                    *state.write() = Remote::Ready(analysis);
                }
                Err(e) => {
                    tracing::warn!("image analysis failed: {e}");
                    *state.write() = Remote::Failed(e.user_message());
                }
            }
        });

        let api = ctx.api.clone();
        let registry = ctx.registry.clone();
        let state = self.histograms.clone();
        let samples = ctx.limits.channel_samples;
        ctx.spawn(async move {
            match api.image_histograms(&name).await {
                Ok(histograms) => {
                    let mut registry = registry.write();
                    if let Some(rgb) = &histograms.rgb {
                        registry.create(
                            RGB_SLOT,
                            channel_chart(
                                "RGB distribution",
                                &[
                                    ("R", rgb.r.as_slice(), RED),
                                    ("G", rgb.g.as_slice(), GREEN),
                                    ("B", rgb.b.as_slice(), BLUE),
                                ],
                                samples,
                            ),
                        );
                    }
                    if let Some(hsv) = &histograms.hsv {
                        registry.create(
                            HSV_SLOT,
                            channel_chart(
                                "HSV distribution",
                                &[
                                    ("H", hsv.h.as_slice(), Color32::from_rgb(230, 126, 34)),
                                    ("S", hsv.s.as_slice(), Color32::from_rgb(26, 188, 156)),
                                    ("V", hsv.v.as_slice(), NEUTRAL),
                                ],
                                samples,
                            ),
                        );
                    }
                    drop(registry);
                    *state.write() = Remote::Ready(());
                }
                Err(e) => {
                    tracing::warn!("histograms fetch failed: {e}");
                    *state.write() = Remote::Failed(e.user_message());
                }
            }
        });
    }

    fn stats_panel(&self, ui: &mut Ui) {
        let stats = self.stats.read();
        match &*stats {
            Remote::Ready(stats) => {
                ui.horizontal_wrapped(|ui| {
                    pv_ui::stat_card(ui, "Logos", &stats.total.to_string());
                    pv_ui::stat_card(ui, "Readable", &stats.valid.to_string());
                    if let Some(width) = &stats.width {
                        pv_ui::stat_card(ui, "Mean width", &format!("{:.0} px", width.mean));
                    }
                    if let Some(height) = &stats.height {
                        pv_ui::stat_card(ui, "Mean height", &format!("{:.0} px", height.mean));
                    }
                    if let Some(size) = &stats.size_kb {
                        pv_ui::stat_card(ui, "Mean size", &format!("{:.1} KB", size.mean));
                    }
                    for (format, count) in &stats.formats {
                        pv_ui::stat_card(ui, format, &count.to_string());
                    }
                });
            }
            Remote::Failed(message) => pv_ui::error_placeholder(ui, message),
            _ => pv_ui::loading_placeholder(ui, "image stats"),
        }
    }

    fn gallery(&mut self, ctx: &SectionContext, ui: &mut Ui) {
        ui.heading("Club logos");
        let entries: Vec<(String, String)> = {
            let logos = self.logos.read();
            match &*logos {
                Remote::Ready(list) => list
                    .iter()
                    .map(|logo| {
                        let mut detail = String::new();
                        if let (Some(w), Some(h)) = (logo.width, logo.height) {
                            detail.push_str(&format!("{w}x{h}"));
                        }
                        if let Some(format) = &logo.format {
                            if !detail.is_empty() {
                                detail.push_str(" · ");
                            }
                            detail.push_str(format);
                        }
                        if let Some(kb) = logo.size_kb {
                            if !detail.is_empty() {
                                detail.push_str(" · ");
                            }
                            detail.push_str(&format!("{kb:.1} KB"));
                        }
                        (logo.name.clone(), detail)
                    })
                    .collect(),
                Remote::Failed(message) => {
                    pv_ui::error_placeholder(ui, message);
                    return;
                }
                _ => {
                    pv_ui::loading_placeholder(ui, "logos");
                    return;
                }
            }
        };

        ui.horizontal_wrapped(|ui| {
            for (name, detail) in entries {
                let selected = self.selected.as_deref() == Some(name.as_str());
                let response = ui.selectable_label(selected, &name);
                if !detail.is_empty() {
                    ui.label(RichText::new(detail).small().weak());
                }
                if response.clicked() && !selected {
                    self.select(ctx, name);
                }
            }
        });
    }

    fn analysis_panel(&self, ctx: &SectionContext, ui: &mut Ui) {
        let Some(selected) = &self.selected else {
            return;
        };
        ui.separator();
        ui.heading(format!("Analysis: {selected}"));

        let analysis = self.analysis.read();
        match &*analysis {
            Remote::Ready(analysis) => {
                draw_swatch_row(ui, &analysis.colors);
                let registry = ctx.registry.read();
                if let Some(handle) = registry.get(COLORS_SLOT) {
                    draw_chart(ui, COLORS_SLOT, handle);
                }
            }
            Remote::Failed(message) => pv_ui::error_placeholder(ui, message),
            _ => pv_ui::loading_placeholder(ui, "color analysis"),
        }
        drop(analysis);

        let histograms = self.histograms.read();
        match &*histograms {
            Remote::Ready(()) => {
                let registry = ctx.registry.read();
                ui.columns(2, |columns| {
                    if let Some(handle) = registry.get(RGB_SLOT) {
                        draw_chart(&mut columns[0], RGB_SLOT, handle);
                    }
                    if let Some(handle) = registry.get(HSV_SLOT) {
                        draw_chart(&mut columns[1], HSV_SLOT, handle);
                    }
                });
            }
            Remote::Failed(message) => pv_ui::error_placeholder(ui, message),
            _ => pv_ui::loading_placeholder(ui, "channel histograms"),
        }
    }

    fn comparison_panel(&self, ctx: &SectionContext, ui: &mut Ui) {
        ui.separator();
        ui.heading("Club palettes");
        let comparison = self.comparison.read();
        match &*comparison {
            Remote::Ready(clubs) => {
                let registry = ctx.registry.read();
                if let Some(handle) = registry.get(COMPARISON_SLOT) {
                    draw_chart(ui, COMPARISON_SLOT, handle);
                }
                drop(registry);
                for club in clubs {
                    ui.horizontal(|ui| {
                        ui.label(&club.name);
                        draw_swatch_strip(ui, &club.colors);
                    });
                }
            }
            Remote::Failed(message) => pv_ui::error_placeholder(ui, message),
            _ => pv_ui::loading_placeholder(ui, "palette comparison"),
        }
    }

    fn global_panel(&self, ctx: &SectionContext, ui: &mut Ui) {
        ui.separator();
        ui.heading("Across all logos");
        let global = self.global.read();
        match &*global {
            Remote::Ready(analysis) => {
                ui.label(format!("{} images analyzed", analysis.total_images));
                draw_swatch_row(ui, &analysis.global_colors);
                let registry = ctx.registry.read();
                if let Some(handle) = registry.get(GLOBAL_COLORS_SLOT) {
                    draw_chart(ui, GLOBAL_COLORS_SLOT, handle);
                }
                ui.columns(2, |columns| {
                    if let Some(handle) = registry.get(GLOBAL_DOMINANCE_SLOT) {
                        draw_chart(&mut columns[0], GLOBAL_DOMINANCE_SLOT, handle);
                    }
                    if let Some(handle) = registry.get(GLOBAL_FORMATS_SLOT) {
                        draw_chart(&mut columns[1], GLOBAL_FORMATS_SLOT, handle);
                    }
                });
            }
            Remote::Failed(message) => pv_ui::error_placeholder(ui, message),
            _ => pv_ui::loading_placeholder(ui, "global analysis"),
        }
    }
}

/// Build one multi-line chart from channel histograms, decimated so the
/// lines stay readable.
fn channel_chart(title: &str, channels: &[(&str, &[f64], Color32)], samples: usize) -> ChartSpec {
    let longest = channels.iter().map(|(_, data, _)| data.len()).max().unwrap_or(0);
    let indices: Vec<usize> = (0..longest).collect();
    let labels: Vec<String> = sample_series(&indices, samples)
        .into_iter()
        .map(|i| i.to_string())
        .collect();
    let lines = channels
        .iter()
        .map(|(name, data, color)| SeriesLine {
            name: (*name).to_string(),
            values: sample_series(data, samples),
            color: *color,
        })
        .collect();
    ChartSpec::multi_line(title, labels, lines, "bucket", "pixels")
}

impl SectionView for ImageView {
    fn id(&self) -> &'static str {
        "image"
    }

    fn title(&self) -> &'static str {
        "Club Logos"
    }

    fn ui(&mut self, ctx: &SectionContext, ui: &mut Ui) {
        if !self.started {
            self.started = true;
            self.start(ctx);
        }

        self.stats_panel(ui);
        ui.separator();
        self.gallery(ctx, ui);
        self.analysis_panel(ctx, ui);
        self.comparison_panel(ctx, ui);
        self.global_panel(ctx, ui);
    }
}
