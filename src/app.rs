// src/app.rs
use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Instant;

use crate::client::{AnalysisBackend, VideoUpload};
use crate::state::AppState;
use crate::ui;

pub struct AuditorApp {
    state: AppState,
    backend: Arc<dyn AnalysisBackend>,
    endpoint: String,
    rng: StdRng,
}

impl AuditorApp {
    pub fn new(backend: Arc<dyn AnalysisBackend>, endpoint: String) -> Self {
        Self {
            state: AppState::new(),
            backend,
            endpoint,
            rng: StdRng::from_entropy(),
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Video...").clicked() {
                    ui::upload::pick_video(&mut self.state);
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("❓ How to use").clicked() {
                    self.state.toggle_help();
                    ui.close_menu();
                }
            });
        });
    }

    fn take_dropped_file(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .find_map(|file| file.path.clone())
        });
        if let Some(path) = dropped {
            self.state.select_file(VideoUpload::from_path(path));
        }
    }
}

impl eframe::App for AuditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.poll();
        self.state.tick_progress(now, &mut self.rng);
        if let Some(delay) = self.state.repaint_after(now) {
            ctx.request_repaint_after(delay);
        }

        self.take_dropped_file(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(format!("Endpoint: {}", self.endpoint));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("UXStream Auditor");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("❓").on_hover_text("Help / Instructions").clicked() {
                        self.state.toggle_help();
                    }
                });
            });
            ui.add_space(8.0);

            ui::upload::show_upload_card(ui, &mut self.state, &self.backend);

            if let Some(received) = &self.state.report {
                ui.add_space(16.0);
                ui::report::show_report_view(ui, received);
            }
        });

        ui::help::show_help_overlay(ctx, &mut self.state);
    }
}
