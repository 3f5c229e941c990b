//! Chart drawing
//!
//! Renders a [`ChartSpec`] into egui. Bar, line, histogram and scatter
//! charts go through `egui_plot`; pie and doughnut charts are painted
//! directly as arc segments since `egui_plot` has no radial primitives.

use std::ops::RangeInclusive;

use egui::{Color32, Pos2, Rect, RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Corner, Legend, Line, Plot, PlotPoints, Points};

use pv_api::ColorSwatch;
use pv_core::ChartHandle;

use crate::spec::{ChartKind, ChartSpec, ACCENT};

const PLOT_HEIGHT: f32 = 240.0;
const PIE_DIAMETER: f32 = 220.0;

/// Draw the chart held by a registry slot.
///
/// The plot id combines the slot name with the handle revision, so
/// recreating a slot resets pan/zoom state instead of inheriting the
/// previous chart's.
pub fn draw_chart(ui: &mut Ui, slot: &str, handle: &ChartHandle<ChartSpec>) {
    let spec = handle.payload();
    if !spec.title.is_empty() {
        ui.label(RichText::new(&spec.title).strong());
    }
    match spec.kind {
        ChartKind::Pie | ChartKind::Doughnut => draw_pie(ui, spec),
        _ => draw_plot(ui, slot, handle.revision(), spec),
    }
}

fn draw_plot(ui: &mut Ui, slot: &str, revision: u64, spec: &ChartSpec) {
    let mut plot = Plot::new((slot, revision))
        .height(PLOT_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false);

    if !spec.x_label.is_empty() {
        plot = plot.x_axis_label(spec.x_label.clone());
    }
    if !spec.y_label.is_empty() {
        plot = plot.y_axis_label(spec.y_label.clone());
    }
    if !spec.lines.is_empty() {
        plot = plot.legend(Legend::default().position(Corner::RightTop));
    }

    if !spec.labels.is_empty() {
        let labels = spec.labels.clone();
        // Ticks land on integer positions; everything in between stays blank.
        let formatter = move |val: f64, _max_chars: usize, _range: &RangeInclusive<f64>| {
            let idx = val.round();
            if (val - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < labels.len() {
                labels[idx as usize].clone()
            } else {
                String::new()
            }
        };
        // Labels tick the argument axis, which flips for sideways bars.
        plot = if spec.horizontal {
            plot.y_axis_formatter(formatter)
        } else {
            plot.x_axis_formatter(formatter)
        };
    }

    plot.show(ui, |plot_ui| match spec.kind {
        ChartKind::Bar | ChartKind::Histogram => {
            let width = if spec.kind == ChartKind::Histogram {
                1.0
            } else {
                0.7
            };
            let bars: Vec<Bar> = spec
                .values
                .iter()
                .enumerate()
                .map(|(i, &value)| {
                    let mut bar = Bar::new(i as f64, value)
                        .width(width)
                        .fill(spec.colors.get(i).copied().unwrap_or(ACCENT));
                    if let Some(label) = spec.labels.get(i) {
                        bar = bar.name(label);
                    }
                    bar
                })
                .collect();
            let mut chart = BarChart::new(bars);
            if spec.horizontal {
                chart = chart.horizontal();
            }
            plot_ui.bar_chart(chart);
        }
        ChartKind::Line => {
            if spec.lines.is_empty() {
                let points: Vec<[f64; 2]> = spec
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| [i as f64, v])
                    .collect();
                plot_ui.line(Line::new(PlotPoints::new(points)).color(ACCENT).width(2.0));
            } else {
                for line in &spec.lines {
                    let points: Vec<[f64; 2]> = line
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| [i as f64, v])
                        .collect();
                    plot_ui.line(
                        Line::new(PlotPoints::new(points))
                            .color(line.color)
                            .name(&line.name)
                            .width(1.5),
                    );
                }
            }
        }
        ChartKind::Scatter => {
            plot_ui.points(
                Points::new(PlotPoints::new(spec.points.clone()))
                    .color(ACCENT)
                    .radius(3.0),
            );
        }
        ChartKind::Pie | ChartKind::Doughnut => {}
    });
}

/// Painted pie/doughnut with an inline legend.
fn draw_pie(ui: &mut Ui, spec: &ChartSpec) {
    let total: f64 = spec.values.iter().filter(|v| v.is_finite()).sum();
    if total <= 0.0 {
        ui.weak("No data");
        return;
    }

    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(PIE_DIAMETER), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let outer = PIE_DIAMETER * 0.45;
        let inner = if spec.kind == ChartKind::Doughnut {
            outer * 0.55
        } else {
            0.0
        };

        // Start at twelve o'clock, sweep clockwise.
        let mut start = -std::f64::consts::FRAC_PI_2;
        for (i, &value) in spec.values.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                continue;
            }
            let sweep = value / total * std::f64::consts::TAU;
            let color = spec.colors.get(i).copied().unwrap_or(ACCENT);
            draw_arc(
                &painter,
                center,
                inner,
                outer,
                start as f32,
                (start + sweep) as f32,
                color,
            );
            start += sweep;
        }

        ui.add_space(8.0);
        ui.vertical(|ui| {
            for (i, label) in spec.labels.iter().enumerate() {
                let value = spec.values.get(i).copied().unwrap_or(0.0);
                let color = spec.colors.get(i).copied().unwrap_or(ACCENT);
                ui.horizontal(|ui| {
                    let (swatch, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, color);
                    ui.label(format!(
                        "{label}: {value:.0} ({:.1}%)",
                        value / total * 100.0
                    ));
                });
            }
        });
    });
}

/// Fill an annular arc as a fan of thin quads.
fn draw_arc(
    painter: &egui::Painter,
    center: Pos2,
    inner: f32,
    outer: f32,
    start: f32,
    end: f32,
    color: Color32,
) {
    let steps = (((end - start).abs() / 0.05).ceil() as usize).max(2);
    for i in 0..steps {
        let a0 = start + (end - start) * i as f32 / steps as f32;
        let a1 = start + (end - start) * (i + 1) as f32 / steps as f32;
        let quad = vec![
            center + Vec2::new(a0.cos(), a0.sin()) * inner,
            center + Vec2::new(a0.cos(), a0.sin()) * outer,
            center + Vec2::new(a1.cos(), a1.sin()) * outer,
            center + Vec2::new(a1.cos(), a1.sin()) * inner,
        ];
        painter.add(Shape::convex_polygon(quad, color, Stroke::NONE));
    }
}

/// Labeled swatch cards for a dominant-color breakdown.
pub fn draw_swatch_row(ui: &mut Ui, swatches: &[ColorSwatch]) {
    ui.horizontal_wrapped(|ui| {
        for swatch in swatches {
            ui.vertical(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(44.0), Sense::hover());
                let [r, g, b] = swatch.rgb;
                ui.painter().rect_filled(rect, 4.0, Color32::from_rgb(r, g, b));
                ui.label(RichText::new(&swatch.hex).small().monospace());
                ui.label(
                    RichText::new(format!("{:.1}%", swatch.percentage))
                        .small()
                        .weak(),
                );
            });
            ui.add_space(6.0);
        }
    });
}

/// Thin palette strip, segment widths proportional to color share.
pub fn draw_swatch_strip(ui: &mut Ui, swatches: &[ColorSwatch]) {
    if swatches.is_empty() {
        return;
    }
    let width = ui.available_width().min(240.0);
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 16.0), Sense::hover());
    let painter = ui.painter_at(rect);
    let total: f64 = swatches.iter().map(|s| s.percentage.max(0.0)).sum();

    let mut x = rect.left();
    for swatch in swatches {
        let share = if total > 0.0 {
            swatch.percentage.max(0.0) / total
        } else {
            1.0 / swatches.len() as f64
        };
        let w = rect.width() * share as f32;
        let [r, g, b] = swatch.rgb;
        painter.rect_filled(
            Rect::from_min_max(Pos2::new(x, rect.top()), Pos2::new(x + w, rect.bottom())),
            0.0,
            Color32::from_rgb(r, g, b),
        );
        x += w;
    }
}
