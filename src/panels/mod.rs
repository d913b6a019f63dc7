mod dashboard;
mod flashcards;
mod quiz;
mod summarizer;
mod translator;
mod tutor;
mod upload;

pub use dashboard::DashboardPanel;
pub use flashcards::FlashcardsPanel;
pub use quiz::QuizPanel;
pub use summarizer::SummarizerPanel;
pub use translator::TranslatorPanel;
pub use tutor::TutorPanel;
pub use upload::UploadPanel;

use eframe::egui::{Color32, RichText, Ui};

pub(crate) const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);
pub(crate) const SUCCESS: Color32 = Color32::from_rgb(0, 180, 0);
pub(crate) const DANGER: Color32 = Color32::from_rgb(220, 50, 50);
pub(crate) const MUTED: Color32 = Color32::from_rgb(150, 150, 150);

pub(crate) fn panel_heading(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.heading(title);
        ui.add_space(5.0);
        ui.label(
            RichText::new(subtitle).color(ui.visuals().text_color().gamma_multiply(0.7)),
        );
    });
    ui.add_space(20.0);
}

/// Transient panel notices, rendered under the triggering control.
pub(crate) fn notice_line(ui: &mut Ui, error: &Option<String>, status: &Option<String>) {
    if let Some(error) = error {
        ui.add_space(5.0);
        ui.colored_label(DANGER, error);
    }
    if let Some(status) = status {
        ui.add_space(5.0);
        ui.colored_label(SUCCESS, status);
    }
}
