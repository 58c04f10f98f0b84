use eframe::egui;

use crate::ui::app::UiState;

const PANEL_GREEN: egui::Color32 = egui::Color32::from_rgb(110, 231, 183);

/// The raw debug text of the most recent model turn, verbatim. Only three
/// of its lines drive state; the rest exist for this panel.
pub fn draw_right_panel(ctx: &egui::Context, ui_state: &UiState) {
    egui::SidePanel::right("right")
        .resizable(true)
        .default_width(320.0)
        .min_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(egui::RichText::new("DEBUG PANEL").small().strong());
            ui.separator();

            let latest = ui_state
                .state
                .session_history
                .iter()
                .rev()
                .find_map(|m| m.debug.as_deref());

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                draw_footer(ui, ui_state);

                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| match latest {
                    Some(debug) => {
                        ui.label(
                            egui::RichText::new(debug)
                                .monospace()
                                .size(10.0)
                                .color(PANEL_GREEN),
                        );
                    }
                    None => {
                        ui.label(
                            egui::RichText::new("Awaiting narrative input for cognitive dump…")
                                .weak()
                                .italics(),
                        );
                    }
                });
            });
        });
}

fn draw_footer(ui: &mut egui::Ui, ui_state: &UiState) {
    let entropy = 100 - ui_state.state.rta_integrity_score;
    ui.label(
        egui::RichText::new(format!("COGNITIVE ENTROPY: {entropy}%"))
            .small()
            .weak(),
    );
    ui.label(egui::RichText::new("MEMORY PERSISTENCE: ACTIVE").small().weak());
}
