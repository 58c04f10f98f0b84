use egui::Color32;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Clone)]
pub struct UiSettings {
    pub ui_scale: f32,
    pub show_debug: bool,

    // Speaker → color mapping (extensible)
    pub speaker_colors: HashMap<String, [u8; 4]>,
}

impl Default for UiSettings {
    fn default() -> Self {
        let mut speaker_colors = HashMap::new();

        speaker_colors.insert("User".into(), [40, 70, 120, 255]);
        speaker_colors.insert("SYSTEM".into(), [80, 80, 80, 255]);
        speaker_colors.insert("SMṚTI".into(), [40, 90, 60, 255]);
        speaker_colors.insert("BUDDHI".into(), [90, 60, 120, 255]);
        speaker_colors.insert("MANAS".into(), [120, 80, 40, 255]);
        speaker_colors.insert("MĀYĀ".into(), [120, 40, 80, 255]);
        speaker_colors.insert("KARMA".into(), [40, 100, 100, 255]);

        Self {
            ui_scale: 1.0,
            show_debug: true,
            speaker_colors,
        }
    }
}

impl UiSettings {
    pub fn color(&self, key: &str) -> Color32 {
        self.speaker_colors
            .get(key)
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::from_rgb(60, 60, 60))
    }

    pub fn set_color(&mut self, key: &str, color: Color32) {
        self.speaker_colors.insert(
            key.to_string(),
            [color.r(), color.g(), color.b(), color.a()],
        );
    }
}
