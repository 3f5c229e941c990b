//! Small reusable widgets

use egui::{RichText, Ui};

use crate::theme;

/// A labeled value card, used for dataset and article statistics.
pub fn stat_card(ui: &mut Ui, label: &str, value: &str) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(value).heading().color(theme::accent_color()));
                ui.label(RichText::new(label).small().weak());
            });
        });
}

/// Placeholder shown while a fetch is in flight.
pub fn loading_placeholder(ui: &mut Ui, what: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.weak(format!("Loading {what}..."));
    });
}

/// Inline error frame shown where the chart or panel would have been.
pub fn error_placeholder(ui: &mut Ui, message: &str) {
    egui::Frame::none()
        .fill(theme::error_color().linear_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, theme::error_color()))
        .rounding(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚠").color(theme::error_color()));
                ui.label(message);
            });
        });
}
