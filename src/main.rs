mod app;
mod mock;
mod notes;
mod panels;
mod utils;

use app::StudyGenie;
use eframe::CreationContext;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([820.0, 600.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "StudyGenie – AI Study Assistant",
        options,
        Box::new(|cc: &CreationContext| Box::new(StudyGenie::new(cc))),
    ) {
        log::error!("failed to launch StudyGenie: {e}");
    }
}
