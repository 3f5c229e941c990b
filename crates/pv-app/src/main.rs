//! pitchview entry point
//!
//! Desktop dashboard over the football data backend: dataset statistics,
//! club logo color analysis and article text analysis, each as a docked
//! section.

use std::sync::Arc;

use anyhow::Result;
use eframe::egui;
use parking_lot::RwLock;
use tracing::info;

use pv_core::ChartRegistry;
use pv_views::{CsvView, ImageView, SectionContext, SectionView, TextView, Viewport};

mod config;

use config::Config;

struct PitchviewApp {
    viewport: Viewport,
    section_ctx: SectionContext,
    backend_label: String,
    /// Owns the worker threads every fetch runs on; handles to it live in
    /// `section_ctx`.
    _runtime: tokio::runtime::Runtime,
}

impl PitchviewApp {
    fn new(cc: &eframe::CreationContext<'_>, config: Config, runtime: tokio::runtime::Runtime) -> Self {
        pv_ui::apply_theme(&cc.egui_ctx);

        let api = Arc::new(pv_api::Client::new(config.backend_url.clone()));
        let registry = Arc::new(RwLock::new(ChartRegistry::new()));
        let section_ctx = SectionContext {
            api,
            registry,
            runtime: runtime.handle().clone(),
            egui_ctx: cc.egui_ctx.clone(),
            limits: config.limits.clone(),
        };

        Self {
            viewport: Viewport::new(make_sections()),
            section_ctx,
            backend_label: config.backend_url.to_string(),
            _runtime: runtime,
        }
    }

    /// Drop every live chart and rebuild the sections, which refetch on
    /// their next frame.
    fn refresh(&mut self) {
        info!("full refresh requested");
        self.section_ctx.registry.write().release_prefix("");
        self.viewport = Viewport::new(make_sections());
    }
}

fn make_sections() -> Vec<Box<dyn SectionView>> {
    vec![
        Box::new(CsvView::default()),
        Box::new(ImageView::default()),
        Box::new(TextView::default()),
    ]
}

impl eframe::App for PitchviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if pv_ui::menu_bar(ctx, &self.backend_label) {
            self.refresh();
        }
        pv_ui::status_bar(ctx, self.section_ctx.registry.read().live_count());

        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewport.ui(ui, &self.section_ctx);
        });
    }
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_new(&config.log_filter)?)
        .init();

    info!(backend = %config.backend_url, "starting pitchview");

    let runtime = tokio::runtime::Runtime::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([900.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    eframe::run_native(
        "pitchview",
        options,
        Box::new(move |cc| Box::new(PitchviewApp::new(cc, config, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run app: {e}"))?;

    Ok(())
}
