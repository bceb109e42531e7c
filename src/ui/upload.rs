// src/ui/upload.rs
use eframe::egui;
use rfd::FileDialog;
use std::sync::Arc;

use crate::client::{AnalysisBackend, VideoUpload, VIDEO_EXTENSIONS};
use crate::state::AppState;

pub fn show_upload_card(ui: &mut egui::Ui, state: &mut AppState, backend: &Arc<dyn AnalysisBackend>) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.add_space(4.0);

            if ui.button("📂 Choose Video...").clicked() {
                pick_video(state);
            }

            if let Some(upload) = &state.upload.selected_file {
                ui.add_space(4.0);
                let label = match upload.size_label() {
                    Some(size) => format!("{} ({})", upload.file_name, size),
                    None => upload.file_name.clone(),
                };
                ui.strong(label).on_hover_text(upload.path.display().to_string());

                if !upload.has_video_extension() {
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        "⚠ This does not look like a video file",
                    );
                }
            } else {
                ui.label("No video selected. You can also drop a file onto the window.");
            }

            ui.add_space(8.0);

            let button_text = if state.upload.is_submitting {
                "Analyzing..."
            } else {
                "Analyze Video"
            };
            let button = egui::Button::new(egui::RichText::new(button_text).heading());
            if ui.add_enabled(state.can_submit(), button).clicked() {
                state.submit(Arc::clone(backend));
            }

            if state.upload.is_submitting || state.upload.progress.is_active() {
                ui.add_space(8.0);
                ui.add(
                    egui::ProgressBar::new(state.upload.progress.fraction())
                        .desired_width(ui.available_width() * 0.6)
                        .show_percentage()
                        .animate(state.upload.is_submitting),
                );
            }

            if let Some(error) = &state.upload.error_message {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::RED, error);
            }

            ui.add_space(4.0);
        });
    });
}

pub fn pick_video(state: &mut AppState) {
    let file_dialog = FileDialog::new()
        .add_filter("Video files", VIDEO_EXTENSIONS)
        .set_title("Choose Video");

    if let Some(path) = file_dialog.pick_file() {
        state.select_file(VideoUpload::from_path(path));
    }
}
