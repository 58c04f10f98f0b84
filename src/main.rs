mod engine;
mod model;
mod ui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Ṛta-Samvāda",
        options,
        Box::new(|_cc| Ok(Box::new(ui::app::MyApp::new()))),
    )
}
