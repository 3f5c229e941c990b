//! Text section: article list, word statistics and a word cloud

use std::sync::Arc;

use egui::{RichText, TextEdit, Ui};
use parking_lot::RwLock;

use pv_api::{ArticleEntry, TextAnalysis, WordCloudData};

use crate::charts::draw_chart;
use crate::section::{Remote, SectionContext, SectionView};
use crate::spec::ChartSpec;
use crate::utils::word_palette_color;

const FREQUENCY_SLOT: &str = "text.frequency";
/// Slot prefix released when the analysis panel closes.
const SLOT_PREFIX: &str = "text.";

const TOP_WORDS: usize = 20;
const CLOUD_WORDS: usize = 100;
const CLOUD_MIN_SIZE: f32 = 12.0;
const CLOUD_MAX_SIZE: f32 = 48.0;

pub struct TextView {
    started: bool,
    articles: Arc<RwLock<Remote<Vec<ArticleEntry>>>>,
    custom_text: String,
    /// Heading of the open analysis panel; `None` means closed.
    analysis_title: Option<String>,
    analysis: Arc<RwLock<Remote<TextAnalysis>>>,
}

impl Default for TextView {
    fn default() -> Self {
        Self {
            started: false,
            articles: Arc::default(),
            custom_text: String::new(),
            analysis_title: None,
            analysis: Arc::default(),
        }
    }
}

impl TextView {
    fn start(&mut self, ctx: &SectionContext) {
        *self.articles.write() = Remote::Loading;
        let api = ctx.api.clone();
        let state = self.articles.clone();
        ctx.spawn(async move {
            let result = api.text_articles().await;
            if let Err(e) = &result {
                tracing::warn!("articles fetch failed: {e}");
            }
            *state.write() = result.into();
        });
    }

    fn analyze_article(&mut self, ctx: &SectionContext, name: String) {
        self.analysis_title = Some(name.clone());
        *self.analysis.write() = Remote::Loading;
        let api = ctx.api.clone();
        let registry = ctx.registry.clone();
        let state = self.analysis.clone();
        ctx.spawn(async move {
            let result = api.text_analysis(&name).await;
            publish_analysis(&registry, &state, result);
        });
    }

    fn analyze_custom(&mut self, ctx: &SectionContext) {
        self.analysis_title = Some("Custom text".into());
        *self.analysis.write() = Remote::Loading;
        let api = ctx.api.clone();
        let registry = ctx.registry.clone();
        let state = self.analysis.clone();
        let text = self.custom_text.clone();
        ctx.spawn(async move {
            let result = api.text_process(&text).await;
            publish_analysis(&registry, &state, result);
        });
    }

    fn close_analysis(&mut self, ctx: &SectionContext) {
        self.analysis_title = None;
        *self.analysis.write() = Remote::Idle;
        ctx.release_charts(SLOT_PREFIX);
    }

    fn article_list(&mut self, ctx: &SectionContext, ui: &mut Ui) {
        ui.heading("Articles");
        let entries: Vec<ArticleEntry> = {
            let articles = self.articles.read();
            match &*articles {
                Remote::Ready(list) => list.clone(),
                Remote::Failed(message) => {
                    pv_ui::error_placeholder(ui, message);
                    return;
                }
                _ => {
                    pv_ui::loading_placeholder(ui, "articles");
                    return;
                }
            }
        };

        for article in entries {
            ui.horizontal(|ui| {
                ui.label(&article.name);
                ui.label(
                    RichText::new(format!("{:.1} KB · {}", article.size_kb, article.file_type))
                        .small()
                        .weak(),
                );
                if ui.button("Analyze").clicked() {
                    self.analyze_article(ctx, article.name.clone());
                }
            });
        }
    }

    fn custom_input(&mut self, ctx: &SectionContext, ui: &mut Ui) {
        ui.heading("Analyze your own text");
        ui.add(
            TextEdit::multiline(&mut self.custom_text)
                .hint_text("Paste match reports, interviews, anything...")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        let has_text = !self.custom_text.trim().is_empty();
        if ui
            .add_enabled(has_text, egui::Button::new("Analyze text"))
            .clicked()
        {
            self.analyze_custom(ctx);
        }
    }

    fn analysis_panel(&mut self, ctx: &SectionContext, ui: &mut Ui) {
        let Some(title) = self.analysis_title.clone() else {
            return;
        };
        ui.separator();
        ui.horizontal(|ui| {
            ui.heading(format!("Analysis: {title}"));
            if ui.button("Close").clicked() {
                self.close_analysis(ctx);
            }
        });
        if self.analysis_title.is_none() {
            return;
        }

        let analysis = self.analysis.read();
        match &*analysis {
            Remote::Ready(analysis) => {
                ui.horizontal_wrapped(|ui| {
                    pv_ui::stat_card(
                        ui,
                        "Characters",
                        &analysis.stats.total_characters.to_string(),
                    );
                    pv_ui::stat_card(ui, "Words", &analysis.stats.total_words.to_string());
                    pv_ui::stat_card(
                        ui,
                        "Sentences",
                        &analysis.stats.total_sentences.to_string(),
                    );
                    if let Some(paragraphs) = analysis.stats.total_paragraphs {
                        pv_ui::stat_card(ui, "Paragraphs", &paragraphs.to_string());
                    }
                    pv_ui::stat_card(
                        ui,
                        "Unique words",
                        &analysis.word_frequencies.unique_words.to_string(),
                    );
                });

                let registry = ctx.registry.read();
                if let Some(handle) = registry.get(FREQUENCY_SLOT) {
                    draw_chart(ui, FREQUENCY_SLOT, handle);
                }
                drop(registry);

                ui.add_space(8.0);
                word_cloud(ui, &analysis.wordcloud);
            }
            Remote::Failed(message) => pv_ui::error_placeholder(ui, message),
            _ => pv_ui::loading_placeholder(ui, "text analysis"),
        }
    }
}

/// Store the fetched analysis and publish its frequency chart.
fn publish_analysis(
    registry: &RwLock<pv_core::ChartRegistry<ChartSpec>>,
    state: &RwLock<Remote<TextAnalysis>>,
    result: pv_core::Result<TextAnalysis>,
) {
    match result {
        Ok(analysis) => {
            // Highest-ranked word at the top of the sideways chart.
            let mut labels: Vec<String> = analysis
                .word_frequencies
                .words
                .iter()
                .take(TOP_WORDS)
                .cloned()
                .collect();
            let mut values: Vec<f64> = analysis
                .word_frequencies
                .counts
                .iter()
                .take(TOP_WORDS)
                .map(|&c| c as f64)
                .collect();
            labels.reverse();
            values.reverse();
            registry.write().create(
                FREQUENCY_SLOT,
                ChartSpec::horizontal_bars("Most frequent words", labels, values),
            );
            *state.write() = Remote::Ready(analysis);
        }
        Err(e) => {
            tracing::warn!("text analysis failed: {e}");
            *state.write() = Remote::Failed(e.user_message());
        }
    }
}

/// Weighted word cloud: font size scales with normalized frequency.
fn word_cloud(ui: &mut Ui, cloud: &WordCloudData) {
    let max = if cloud.max_frequency > 0.0 {
        cloud.max_frequency
    } else {
        cloud
            .frequencies
            .iter()
            .copied()
            .fold(0.0_f64, f64::max)
            .max(1.0)
    };
    ui.horizontal_wrapped(|ui| {
        for (i, word) in cloud.words.iter().take(CLOUD_WORDS).enumerate() {
            let weight = (cloud.frequencies.get(i).copied().unwrap_or(0.0) / max).clamp(0.0, 1.0);
            let size = CLOUD_MIN_SIZE + (CLOUD_MAX_SIZE - CLOUD_MIN_SIZE) * weight as f32;
            ui.label(
                RichText::new(word)
                    .size(size)
                    .color(word_palette_color(i)),
            );
        }
    });
}

impl SectionView for TextView {
    fn id(&self) -> &'static str {
        "text"
    }

    fn title(&self) -> &'static str {
        "Articles"
    }

    fn ui(&mut self, ctx: &SectionContext, ui: &mut Ui) {
        if !self.started {
            self.started = true;
            self.start(ctx);
        }

        self.article_list(ctx, ui);
        ui.separator();
        self.custom_input(ctx, ui);
        self.analysis_panel(ctx, ui);
    }
}
