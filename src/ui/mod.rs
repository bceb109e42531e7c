// src/ui/mod.rs
use eframe::egui;

use crate::report::Level;

pub mod help;
pub mod report;
pub mod upload;

pub fn level_color(level: Level) -> egui::Color32 {
    match level {
        Level::Low => egui::Color32::from_rgb(46, 160, 67),
        Level::Medium => egui::Color32::from_rgb(219, 145, 20),
        Level::High => egui::Color32::from_rgb(208, 52, 44),
        Level::Unknown => egui::Color32::GRAY,
    }
}

/// Coloured pill showing the service's own wording for a severity or risk.
pub fn level_badge(ui: &mut egui::Ui, text: &str, level: Level) -> egui::Response {
    let label = if text.trim().is_empty() { "?" } else { text };
    egui::Frame::none()
        .fill(level_color(level))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(label)
                    .color(egui::Color32::WHITE)
                    .small()
                    .strong(),
            )
        })
        .response
        .on_hover_text(format!("Classified as {}", level))
}
