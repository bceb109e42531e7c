// src/ui/help.rs
use eframe::egui;

use crate::state::AppState;

struct Definition {
    term: &'static str,
    meaning: &'static str,
}

const INSTRUCTIONS: &[&str] = &[
    "Upload a video of the user interacting with your web/app/game interface.",
    "Click \"Analyze Video\" and wait until the process completes.",
    "Review detected events and severity to understand usability issues.",
    "Check scenarios and recommendations to improve the user experience.",
    "Use this feedback to iteratively refine your product and reduce user friction.",
];

const EVENT_TYPES: &[Definition] = &[
    Definition { term: "Error", meaning: "Action failed to meet goal" },
    Definition { term: "Pause", meaning: "Unintended stop in activity" },
    Definition { term: "Repetition", meaning: "Redundant actions due to lack of feedback or similar" },
    Definition { term: "Hesitation", meaning: "Uncertainty or delay in decision making" },
];

const SEVERITIES: &[Definition] = &[
    Definition { term: "High", meaning: "Prevents task completion or causes significant frustration" },
    Definition { term: "Medium", meaning: "Noticeable break of flow" },
    Definition { term: "Low", meaning: "Minor annoyance" },
];

const RISKS: &[Definition] = &[
    Definition { term: "High", meaning: "Significant change that could alienate users or require high dev effort" },
    Definition { term: "Medium", meaning: "May cause minor side effects" },
    Definition { term: "Low", meaning: "Safe improvement" },
];

/// Modal help dialog over a dimmed backdrop. Clicking the backdrop or
/// pressing Escape closes it; clicks inside the dialog do not.
pub fn show_help_overlay(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_help {
        return;
    }

    let screen = ctx.screen_rect();
    let backdrop = egui::Area::new("help_backdrop")
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let (rect, response) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
            ui.painter()
                .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(160));
            response
        })
        .inner;

    // Tooltip order keeps the dialog above the backdrop so it swallows its own clicks
    let mut close_clicked = false;
    egui::Area::new("help_dialog")
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::window(&ctx.style()).show(ui, |ui| {
                ui.set_max_width(screen.width().min(640.0) - 32.0);
                ui.horizontal(|ui| {
                    ui.heading("How to use UXStream Auditor");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        close_clicked = ui.button("✖").clicked();
                    });
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .id_source("help_scroll")
                    .max_height(screen.height() * 0.7)
                    .show(ui, help_contents);
            });
        });

    let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
    if backdrop.clicked() || close_clicked || escape {
        state.close_help();
    }
}

fn help_contents(ui: &mut egui::Ui) {
    ui.label(
        "UXStream Auditor is an AI Tool that analyze the uploaded video and generates a report \
         regarding the User Experience that the AI considers that could be improved.",
    );

    ui.add_space(8.0);
    ui.heading("Instructions");
    for (index, step) in INSTRUCTIONS.iter().enumerate() {
        ui.label(format!("{}. {}", index + 1, step));
    }

    ui.add_space(8.0);
    ui.heading("Understanding the report");
    ui.label("The report will have 3 columns: Events, Recommendations and Scenarios");

    ui.add_space(4.0);
    ui.strong("Events");
    ui.label(
        "Events will show moments on the video where the tool detected something wrong. Each \
         event will be detailed with timestamp, type, description and severity.",
    );
    ui.label(
        "To understand the Events, you should know what types and severities exist and what \
         does each of them imply.",
    );
    definition_list(ui, "Type (classification of the user friction with the product)", EVENT_TYPES);
    definition_list(ui, "Severity (impact on User Experience)", SEVERITIES);

    ui.add_space(4.0);
    ui.strong("Recommendations");
    ui.label(
        "This is where the AI Tool will explain you the recommendations that thinks that could \
         help improve the degradations noted on the UX.",
    );
    ui.label(
        egui::RichText::new(
            "Please note that these are AI given recommendations. Always double check the \
             recommendations and use it as a complement and not as the main tool",
        )
        .italics(),
    );

    ui.add_space(4.0);
    ui.strong("Scenarios");
    ui.label("On this card, you will have the projected scenarios referenced to each change applicable.");
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("To understand the card, the important values to read are ");
        ui.strong("Score");
        ui.label(" and ");
        ui.strong("Risk");
        ui.label(":");
    });
    ui.add_space(4.0);
    ui.label(egui::RichText::new("Score").underline());
    ui.label(
        "A predictive metric (0-100) representing the overall usability and user satisfaction \
         expected from the scenario.",
    );
    definition_list(ui, "Risk (The potential for negative consequences)", RISKS);
}

fn definition_list(ui: &mut egui::Ui, title: &str, definitions: &[Definition]) {
    ui.add_space(4.0);
    ui.label(egui::RichText::new(title).underline());
    for definition in definitions {
        ui.horizontal_wrapped(|ui| {
            ui.strong(format!("{}:", definition.term));
            ui.label(definition.meaning);
        });
    }
}
