use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;

use crate::mock::{self, Language, TranslationResult};

use super::{notice_line, panel_heading, MUTED};

/// Fully local panel; never touches the notes store.
pub struct TranslatorPanel {
    input_text: String,
    source_language: Language,
    target_language: Language,
    translation: Option<TranslationResult>,
    pending: Option<Receiver<TranslationResult>>,
    error_message: Option<String>,
    status_message: Option<String>,
}

impl TranslatorPanel {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            source_language: Language::Auto,
            target_language: Language::Hindi,
            translation: None,
            pending: None,
            error_message: None,
            status_message: None,
        }
    }

    pub fn poll(&mut self, ctx: &egui::Context) {
        if let Some(receiver) = &self.pending {
            match receiver.try_recv() {
                Ok(result) => {
                    self.translation = Some(result);
                    self.pending = None;
                    self.status_message = Some("Text has been successfully translated".to_string());
                    ctx.request_repaint();
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.pending = None;
                    self.error_message =
                        Some("Translation failed. Please try again.".to_string());
                    ctx.request_repaint();
                }
            }
        }
        if self.pending.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn start_translation(&mut self) {
        self.error_message = None;
        self.status_message = None;

        if self.input_text.trim().is_empty() {
            self.error_message = Some("Please enter some text to translate".to_string());
            return;
        }
        if self.source_language == self.target_language && self.source_language != Language::Auto {
            self.error_message =
                Some("Please select different source and target languages".to_string());
            return;
        }

        log::info!(
            "translating {:?} -> {:?}",
            self.source_language,
            self.target_language
        );
        let input = self.input_text.clone();
        let source = self.source_language;
        let target = self.target_language;
        self.pending = Some(mock::defer(mock::TRANSLATION_DELAY, move || {
            mock::translation(&input, source, target)
        }));
    }

    fn swap_languages(&mut self) {
        if self.source_language == Language::Auto {
            return;
        }

        std::mem::swap(&mut self.source_language, &mut self.target_language);

        if let Some(translation) = &mut self.translation {
            self.input_text = translation.translated_text.clone();
            std::mem::swap(
                &mut translation.original_text,
                &mut translation.translated_text,
            );
            std::mem::swap(
                &mut translation.source_language,
                &mut translation.target_language,
            );
        }
    }

    fn copy_to_clipboard(&mut self, ui: &egui::Ui, text: &str) {
        ui.ctx().output_mut(|out| out.copied_text = text.to_string());
        self.status_message = Some("Text copied to clipboard".to_string());
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        panel_heading(
            ui,
            "AI Multilingual Translator",
            "Translate your study materials into multiple languages",
        );

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label("From");
                egui::ComboBox::from_id_source("translate-source")
                    .selected_text(format!(
                        "{} {}",
                        self.source_language.flag(),
                        self.source_language.name()
                    ))
                    .show_ui(ui, |ui| {
                        for language in Language::ALL {
                            ui.selectable_value(
                                &mut self.source_language,
                                language,
                                format!("{} {}", language.flag(), language.name()),
                            );
                        }
                    });

                ui.add_enabled_ui(self.source_language != Language::Auto, |ui| {
                    if ui
                        .button("⇄")
                        .on_hover_text("Swap source and target languages")
                        .clicked()
                    {
                        self.swap_languages();
                    }
                });

                ui.label("To");
                egui::ComboBox::from_id_source("translate-target")
                    .selected_text(format!(
                        "{} {}",
                        self.target_language.flag(),
                        self.target_language.name()
                    ))
                    .show_ui(ui, |ui| {
                        for language in Language::ALL {
                            if language == Language::Auto {
                                continue;
                            }
                            ui.selectable_value(
                                &mut self.target_language,
                                language,
                                format!("{} {}", language.flag(), language.name()),
                            );
                        }
                    });
            });
        });

        ui.add_space(10.0);
        ui.columns(2, |columns| {
            self.show_input_column(&mut columns[0]);
            self.show_output_column(&mut columns[1]);
        });
    }

    fn show_input_column(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.strong("🌐 Original Text");
            ui.add_space(8.0);

            egui::ScrollArea::vertical()
                .id_source("translate-input")
                .max_height(240.0)
                .show(ui, |ui| {
                    ui.add_sized(
                        [ui.available_width(), 220.0],
                        egui::TextEdit::multiline(&mut self.input_text)
                            .hint_text("Enter text to translate..."),
                    );
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.add_enabled_ui(!self.input_text.trim().is_empty(), |ui| {
                    if ui.button("📋 Copy").clicked() {
                        let text = self.input_text.clone();
                        self.copy_to_clipboard(ui, &text);
                    }
                });
            });

            ui.add_space(8.0);
            let busy = self.pending.is_some();
            ui.add_enabled_ui(!busy, |ui| {
                let label = if busy { "⏳ Translating..." } else { "🌐 Translate" };
                if ui
                    .add_sized([ui.available_width(), 30.0], egui::Button::new(label))
                    .clicked()
                {
                    self.start_translation();
                }
            });

            notice_line(ui, &self.error_message, &self.status_message);
        });
    }

    fn show_output_column(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.strong("🌐 Translation");
            ui.add_space(8.0);

            if self.pending.is_some() {
                ui.vertical_centered(|ui| {
                    ui.add_space(100.0);
                    ui.spinner();
                    ui.label("Translating...");
                    ui.add_space(100.0);
                });
                return;
            }

            let Some(translation) = self.translation.clone() else {
                ui.vertical_centered(|ui| {
                    ui.add_space(110.0);
                    ui.colored_label(MUTED, "Translation will appear here");
                    ui.add_space(110.0);
                });
                return;
            };

            egui::ScrollArea::vertical()
                .id_source("translate-output")
                .max_height(220.0)
                .show(ui, |ui| {
                    ui.label(&translation.translated_text);
                });

            ui.add_space(8.0);
            if ui.button("📋 Copy").clicked() {
                self.copy_to_clipboard(ui, &translation.translated_text);
            }

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!(
                    "Translated from {} to {}",
                    translation.source_language.name(),
                    translation.target_language.name()
                ))
                .color(MUTED)
                .small(),
            );
        });
    }
}
