use eframe::egui;

use super::app::MyApp;

pub fn draw_center_panel(ctx: &egui::Context, app: &mut MyApp) {
    let input_id = egui::Id::new("chat_input_box");

    // ---------- Input bar ----------
    egui::TopBottomPanel::bottom("chat_input").show(ctx, |ui| {
        let mut send_now = false;

        ui.horizontal(|ui| {
            let response = ui.add_sized(
                [ui.available_width() - 60.0, 60.0],
                egui::TextEdit::multiline(&mut app.ui.input_text)
                    .id(input_id)
                    .hint_text("Speak your truth…")
                    .lock_focus(true),
            );

            // Enter vs Shift+Enter
            if response.has_focus() {
                let input = ui.input(|i| i.clone());

                if input.key_pressed(egui::Key::Enter) && !input.modifiers.shift {
                    send_now = true;
                }
            }

            let can_send = !app.ui.is_loading && !app.ui.input_text.trim().is_empty();
            if ui.add_enabled(can_send, egui::Button::new("Utter")).clicked() {
                send_now = true;
            }
        });

        if send_now {
            // submit_input re-checks the in-flight gate.
            app.submit_input();

            // Keep cursor focused
            ui.memory_mut(|m| m.request_focus(input_id));
        }
    });

    // ---------- Chat history ----------
    egui::CentralPanel::default().show(ctx, |ui| {
        if app.ui.state.session_history.is_empty() && !app.ui.is_loading {
            draw_intro(ui, app);
            return;
        }

        egui::ScrollArea::vertical()
            .stick_to_bottom(app.ui.should_auto_scroll)
            .show(ui, |ui| {
                for msg in &app.ui.state.session_history {
                    app.draw_message(ui, msg);
                }

                if app.ui.is_loading {
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.weak("The Sabhā reasons…");
                    });
                }
            });
    });
}

fn draw_intro(ui: &mut egui::Ui, app: &mut MyApp) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);

        ui.label(
            egui::RichText::new("ॐ")
                .size(40.0)
                .color(egui::Color32::from_rgb(245, 158, 11)),
        );
        ui.add_space(8.0);
        ui.label(egui::RichText::new("\"Truth is not binary. It must be coherent.\"").italics());
        ui.add_space(8.0);
        ui.label(
            "You stand before the Sabhā. The Devas watch. Every claim you make \
is woven into your Ṛta. Do not falter. Do not contradict.",
        );
        ui.add_space(12.0);

        if ui.button("Begin Prostration").clicked() {
            app.ui.input_text = "I am ready to be judged.".to_string();
        }
    });
}
