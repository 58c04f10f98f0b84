use eframe::egui;
use std::sync::mpsc::Sender;

use crate::engine::protocol::EngineCommand;
use crate::ui::app::UiState;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io;

const AMBER: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);
const RED: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
const INDIGO: egui::Color32 = egui::Color32::from_rgb(129, 140, 248);

pub fn draw_left_panel(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    settings: &mut UiSettings,
    cmd_tx: &Sender<EngineCommand>,
) {
    let mut settings_dirty = false;

    egui::SidePanel::left("left")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(egui::RichText::new("ṚTA-SAMVĀDA").color(AMBER));
            ui.label(
                egui::RichText::new("NARRATIVE COGNITION ENGINE")
                    .small()
                    .weak(),
            );

            ui.separator();

            draw_stats(ui, ui_state);

            ui.separator();

            ui.collapsing("Options", |ui| {
                ui.label("UI Scale");
                if ui
                    .add(egui::Slider::new(&mut settings.ui_scale, 0.75..=2.0))
                    .changed()
                {
                    settings_dirty = true;
                }

                if ui
                    .checkbox(&mut settings.show_debug, "Show debug panel")
                    .changed()
                {
                    settings_dirty = true;
                }

                ui.separator();

                if ui.button("Test LLM Connection").clicked() {
                    let _ = cmd_tx.send(EngineCommand::TestLlmConnection);
                }
                if let Some(status) = &ui_state.connection_status {
                    ui.label(egui::RichText::new(status).small().weak());
                }

                ui.separator();

                ui.collapsing("Speaker Colors", |ui| {
                    let mut keys: Vec<String> =
                        settings.speaker_colors.keys().cloned().collect();
                    keys.sort();

                    for key in keys {
                        let mut color = settings.color(&key);
                        ui.horizontal(|ui| {
                            if ui.color_edit_button_srgba(&mut color).changed() {
                                settings.set_color(&key, color);
                                settings_dirty = true;
                            }
                            ui.label(&key);
                        });
                    }
                });
            });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                ui.add_space(8.0);
                draw_reset_controls(ui, ui_state, cmd_tx);
            });
        });

    if settings_dirty {
        settings_io::save_settings(settings);
    }
}

fn draw_stats(ui: &mut egui::Ui, ui_state: &UiState) {
    let state = &ui_state.state;

    ui.label(egui::RichText::new("SABHĀ LEVEL").small().weak());
    ui.label(
        egui::RichText::new(format!("{:02}", state.current_level))
            .size(24.0)
            .strong()
            .color(INDIGO),
    );
    ui.add(
        egui::ProgressBar::new((state.current_level.max(0) as f32 / 6.0).min(1.0)).fill(INDIGO),
    );

    ui.add_space(8.0);

    let score = state.rta_integrity_score;
    let score_color = if score > 60 { AMBER } else { RED };
    ui.label(egui::RichText::new("ṚTA INTEGRITY").small().weak());
    ui.label(
        egui::RichText::new(format!("{score}%"))
            .size(24.0)
            .strong()
            .color(score_color),
    );
    ui.add(
        egui::ProgressBar::new((score.max(0) as f32 / 100.0).min(1.0)).fill(score_color),
    );

    ui.add_space(8.0);

    ui.label(
        egui::RichText::new("IDENTIFIED CONTRADICTIONS")
            .small()
            .weak(),
    );
    ui.label(
        egui::RichText::new(format!("{} / 5", state.contradictions.len()))
            .strong()
            .color(RED),
    );
}

fn draw_reset_controls(
    ui: &mut egui::Ui,
    ui_state: &mut UiState,
    cmd_tx: &Sender<EngineCommand>,
) {
    if ui_state.show_reset_confirm {
        // Bottom-up layout: widgets are written bottom-first.
        ui.horizontal(|ui| {
            if ui.button("Confirm").clicked() {
                let _ = cmd_tx.send(EngineCommand::ResetSession);
                ui_state.show_reset_confirm = false;
            }
            if ui.button("Cancel").clicked() {
                ui_state.show_reset_confirm = false;
            }
        });
        ui.label("Restart narrative?");
    } else if ui.button("Dissolve Self (Restart)").clicked() {
        ui_state.show_reset_confirm = true;
    }
}
