// src/ui/report.rs
use eframe::egui;

use super::level_badge;
use crate::report::{EventRow, ScenarioRow};
use crate::state::ReceivedReport;

pub fn show_report_view(ui: &mut egui::Ui, received: &ReceivedReport) {
    ui.horizontal(|ui| {
        ui.heading("Report");
        ui.label(format!(
            "{} · received {}",
            received.file_name,
            received.received_at.format("%Y-%m-%d %H:%M:%S")
        ));
    });
    ui.add_space(8.0);

    let view = &received.view;
    ui.columns(3, |columns| {
        show_events_card(&mut columns[0], &view.events);
        show_recommendations_card(&mut columns[1], &view.recommendations);
        show_scenarios_card(&mut columns[2], &view.scenarios);
    });
}

fn show_events_card(ui: &mut egui::Ui, events: &[EventRow]) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Detected Events");
        ui.add_space(4.0);

        if events.is_empty() {
            ui.weak("No events detected");
            return;
        }

        egui::ScrollArea::vertical()
            .id_source("events_scroll")
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for event in events {
                    ui.group(|ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal_wrapped(|ui| {
                            ui.monospace(format!("[{}]", event.timestamp));
                            ui.strong(&event.kind);
                            ui.label(format!("- {}", event.description));
                        });
                        level_badge(ui, &event.severity, event.level);
                    });
                    ui.add_space(4.0);
                }
            });
    });
}

fn show_recommendations_card(ui: &mut egui::Ui, recommendations: &[String]) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Recommendations");
        ui.add_space(4.0);

        if recommendations.is_empty() {
            ui.weak("No recommendations");
            return;
        }

        egui::ScrollArea::vertical()
            .id_source("recommendations_scroll")
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for recommendation in recommendations {
                    ui.horizontal_wrapped(|ui| {
                        ui.label("•");
                        ui.label(recommendation);
                    });
                    ui.add_space(4.0);
                }
            });
    });
}

fn show_scenarios_card(ui: &mut egui::Ui, scenarios: &[ScenarioRow]) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Scenarios");
        ui.add_space(4.0);

        egui::Grid::new("scenarios_grid")
            .num_columns(3)
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Name");
                ui.strong("Score");
                ui.strong("Risk");
                ui.end_row();

                for row in scenarios {
                    ui.label(&row.name).on_hover_text(&row.key);
                    ui.label(&row.score);
                    level_badge(ui, &row.risk, row.level);
                    ui.end_row();
                }
            });

        if scenarios.is_empty() {
            ui.weak("No scenarios");
        }
    });
}
