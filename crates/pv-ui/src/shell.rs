//! Top and bottom shell panels

use egui::{Context, TopBottomPanel};

/// Render the main menu bar. Returns true when the user asked for a
/// full data refresh.
pub fn menu_bar(ctx: &Context, backend_url: &str) -> bool {
    let mut refresh = false;
    TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Refresh All").clicked() {
                    refresh = true;
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close_menu();
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(backend_url).weak().monospace());
                ui.separator();
                ui.label("backend");
            });
        });
    });
    refresh
}

/// Render the bottom status bar.
pub fn status_bar(ctx: &Context, live_charts: usize) {
    TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("pitchview {}", env!("CARGO_PKG_VERSION")));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{live_charts} chart(s) live"));
            });
        });
    });
}
