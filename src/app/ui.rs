use eframe::egui::{self, Align, Color32, Layout, RichText};

use super::{StudyGenie, View};

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);

impl StudyGenie {
    pub fn render(&mut self, ctx: &egui::Context) {
        self.render_header(ctx);
        self.render_sidebar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("central")
                .show(ui, |ui| {
                    ui.add_space(10.0);
                    match self.current_view {
                        View::Upload => self.upload.show(ui),
                        View::Summarize => self.summarizer.show(ui),
                        View::Quiz => self.quiz.show(ui),
                        View::Flashcards => self.flashcards.show(ui),
                        View::Tutor => self.tutor.show(ui),
                        View::Translate => self.translator.show(ui),
                        View::Dashboard => self.dashboard.show(ui),
                    }
                    ui.add_space(20.0);
                });
        });
    }

    fn render_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("📚 StudyGenie – Personalized Study Guide Generator")
                        .color(ACCENT)
                        .strong(),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new("✨ Built at SUNHACKS 2025 – GenAI Track")
                            .color(ui.visuals().text_color().gamma_multiply(0.7))
                            .small(),
                    );
                });
            });
            ui.add_space(4.0);
        });
    }

    fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("📖").size(20.0));
                    ui.vertical(|ui| {
                        ui.label(RichText::new("StudyGenie").color(ACCENT).strong());
                        ui.label(
                            RichText::new("AI Study Assistant")
                                .color(ui.visuals().text_color().gamma_multiply(0.7))
                                .small(),
                        );
                    });
                });
                ui.separator();

                ui.label(
                    RichText::new("Features")
                        .color(ui.visuals().text_color().gamma_multiply(0.7))
                        .small(),
                );
                ui.add_space(4.0);

                for view in View::ALL {
                    let selected = self.current_view == view;
                    let label = format!("{}  {}", view.icon(), view.title());
                    if ui
                        .add_sized(
                            [ui.available_width(), 30.0],
                            egui::SelectableLabel::new(selected, label),
                        )
                        .clicked()
                    {
                        self.current_view = view;
                    }
                    ui.add_space(2.0);
                }

                ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("GenAI Track")
                            .color(ui.visuals().text_color().gamma_multiply(0.7))
                            .small(),
                    );
                    ui.label(
                        RichText::new("✨ Built at SUNHACKS 2025")
                            .color(ui.visuals().text_color().gamma_multiply(0.7))
                            .small(),
                    );
                });
            });
    }
}
