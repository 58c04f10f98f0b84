use eframe::egui;
use std::sync::mpsc;
use std::time::Duration;

use crate::engine::engine::{Engine, DISSOLUTION_NOTICE};
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::game_state::GameState;
use crate::model::message::{Message, Role};
use crate::ui::settings::UiSettings;
use crate::ui::settings_io;
use crate::ui::{center_panel, left_panel, right_panel};

/* =========================
   UI State
   ========================= */

pub struct UiState {
    pub input_text: String,

    /// In-flight gate: set on submit, cleared when the turn resolves.
    /// Submissions while set are ignored.
    pub is_loading: bool,

    pub should_auto_scroll: bool,
    pub show_reset_confirm: bool,
    pub show_dissolution_notice: bool,
    pub connection_status: Option<String>,

    /// Latest snapshot from the engine; the UI never mutates it.
    pub state: GameState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            input_text: String::new(),
            is_loading: false,
            should_auto_scroll: false,
            show_reset_confirm: false,
            show_dissolution_notice: false,
            connection_status: None,
            state: GameState::new(),
        }
    }
}

/* =========================
   App
   ========================= */

pub struct MyApp {
    pub ui: UiState,
    pub settings: UiSettings,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl MyApp {
    pub fn new() -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx);
            engine.run();
        });

        Self {
            ui: UiState::default(),
            settings: settings_io::load_settings(),
            cmd_tx,
            resp_rx,
        }
    }

    pub fn send_command(&self, cmd: EngineCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn submit_input(&mut self) {
        let text = self.ui.input_text.trim().to_string();
        if text.is_empty() || self.ui.is_loading {
            return;
        }

        self.ui.is_loading = true;
        self.ui.input_text.clear();
        self.send_command(EngineCommand::SubmitPlayerInput(text));
    }

    pub fn draw_message(&self, ui: &mut egui::Ui, msg: &Message) {
        ui.add_space(6.0);

        match msg.role {
            Role::User => {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    bubble(
                        ui,
                        self.settings.color("User"),
                        &format!("You: {}", msg.text),
                    );
                });
            }
            Role::Model => {
                // An empty speaker was present on the wire but is not
                // worth a label.
                if let Some(speaker) = msg.speaker.as_deref() {
                    if !speaker.is_empty() {
                        ui.label(
                            egui::RichText::new(speaker)
                                .small()
                                .strong()
                                .color(self.settings.color(speaker)),
                        );
                    }
                }
                bubble(ui, egui::Color32::from_rgb(28, 28, 30), &msg.text);
            }
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        while let Ok(resp) = self.resp_rx.try_recv() {
            match resp {
                EngineResponse::StateChanged(state) => {
                    self.ui.state = state;
                    self.ui.should_auto_scroll = true;
                }
                EngineResponse::TurnResolved(state) => {
                    self.ui.state = state;
                    self.ui.is_loading = false;
                    self.ui.should_auto_scroll = true;
                }
                EngineResponse::Dissolved(state) => {
                    self.ui.state = state;
                    self.ui.is_loading = false;
                    self.ui.show_dissolution_notice = true;
                    self.ui.should_auto_scroll = true;
                }
                EngineResponse::ConnectionStatus(status) => {
                    self.ui.connection_status = Some(status);
                }
            }
        }

        // The engine replies over a channel, not through egui events, so
        // keep repainting while a turn is in flight.
        if self.ui.is_loading {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        left_panel::draw_left_panel(ctx, &mut self.ui, &mut self.settings, &self.cmd_tx);

        if self.settings.show_debug {
            right_panel::draw_right_panel(ctx, &self.ui);
        }

        center_panel::draw_center_panel(ctx, self);

        if self.ui.show_dissolution_notice {
            egui::Window::new("Narrative Dissolution")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(DISSOLUTION_NOTICE);
                    ui.label("A fresh soul stands before the Sabhā.");
                    if ui.button("Acknowledge").clicked() {
                        self.ui.show_dissolution_notice = false;
                    }
                });
        }

        self.ui.should_auto_scroll = false;
    }
}

/* =========================
   UI Helpers
   ========================= */

pub fn bubble(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    egui::Frame::new()
        .fill(color)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(egui::Color32::WHITE));
        });
}
