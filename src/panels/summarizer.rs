use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;

use crate::mock::{self, Language, SummaryResult};
use crate::notes::NotesHandle;

use super::{notice_line, panel_heading, ACCENT, MUTED};

/// Reads the notes store, never writes it. Generation runs against whatever
/// is in the input box; the store feeds it through "Use Uploaded Notes".
pub struct SummarizerPanel {
    notes: NotesHandle,
    input_text: String,
    language: Language,
    summary: Option<SummaryResult>,
    pending: Option<Receiver<SummaryResult>>,
    error_message: Option<String>,
    status_message: Option<String>,
}

impl SummarizerPanel {
    pub fn new(notes: NotesHandle) -> Self {
        Self {
            notes,
            input_text: String::new(),
            language: Language::English,
            summary: None,
            pending: None,
            error_message: None,
            status_message: None,
        }
    }

    pub fn poll(&mut self, ctx: &egui::Context) {
        if let Some(receiver) = &self.pending {
            match receiver.try_recv() {
                Ok(result) => {
                    self.summary = Some(result);
                    self.pending = None;
                    self.status_message = Some("Summary generated!".to_string());
                    ctx.request_repaint();
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.pending = None;
                    self.error_message =
                        Some("Failed to generate summary. Please try again.".to_string());
                    ctx.request_repaint();
                }
            }
        }
        if self.pending.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn start_generation(&mut self) {
        self.error_message = None;
        self.status_message = None;

        if self.input_text.trim().is_empty() {
            self.error_message = Some("Please enter some text to summarize".to_string());
            return;
        }

        log::info!("generating summary ({:?})", self.language);
        let input = self.input_text.clone();
        let language = self.language;
        self.pending = Some(mock::defer(mock::SUMMARY_DELAY, move || {
            mock::summary(&input, language)
        }));
    }

    fn load_uploaded_notes(&mut self) {
        self.input_text = self.notes.with(|store| store.notes_content());
        self.status_message = Some("Loaded content from your uploaded notes".to_string());
        self.error_message = None;
    }

    fn export_summary(&mut self, summary: &SummaryResult) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("summary.json")
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };

        let result = serde_json::to_string_pretty(summary)
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(&path, json).map_err(|e| e.to_string()));

        match result {
            Ok(()) => {
                log::info!("summary exported to {}", path.display());
                self.status_message = Some(format!("Summary exported to {}", path.display()));
            }
            Err(e) => self.error_message = Some(format!("Failed to export summary: {e}")),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        panel_heading(
            ui,
            "AI Text Summarizer",
            "Transform lengthy content into concise, digestible summaries",
        );

        let ready_files = self.notes.with(|store| store.ready_count());

        ui.columns(2, |columns| {
            self.show_input_column(&mut columns[0], ready_files);
            self.show_output_column(&mut columns[1]);
        });
    }

    fn show_input_column(&mut self, ui: &mut egui::Ui, ready_files: usize) {
        ui.group(|ui| {
            ui.strong("🗒 Input Text");
            ui.add_space(8.0);

            egui::ScrollArea::vertical()
                .id_source("summary-input")
                .max_height(260.0)
                .show(ui, |ui| {
                    ui.add_sized(
                        [ui.available_width(), 240.0],
                        egui::TextEdit::multiline(&mut self.input_text)
                            .hint_text("Paste your text here to get an AI-powered summary..."),
                    );
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.add_enabled_ui(ready_files > 0, |ui| {
                    if ui
                        .button("📄 Use Uploaded Notes")
                        .on_hover_text("Insert the combined content of your uploaded files")
                        .clicked()
                    {
                        self.load_uploaded_notes();
                    }
                });
                if ready_files == 0 {
                    ui.label(
                        egui::RichText::new("No uploaded notes are ready yet")
                            .color(MUTED)
                            .small(),
                    );
                } else {
                    ui.label(
                        egui::RichText::new(format!("{ready_files} file(s) ready"))
                            .color(MUTED)
                            .small(),
                    );
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                egui::ComboBox::from_id_source("summary-language")
                    .selected_text(self.language.name())
                    .show_ui(ui, |ui| {
                        for language in Language::SUMMARY_CHOICES {
                            ui.selectable_value(&mut self.language, language, language.name());
                        }
                    });

                let busy = self.pending.is_some();
                ui.add_enabled_ui(!busy, |ui| {
                    let label = if busy { "⏳ Generating..." } else { "✨ Summarize" };
                    if ui
                        .add_sized([ui.available_width(), 28.0], egui::Button::new(label))
                        .clicked()
                    {
                        self.start_generation();
                    }
                });
            });

            notice_line(ui, &self.error_message, &self.status_message);
        });
    }

    fn show_output_column(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.strong("✨ AI Summary");
            ui.add_space(8.0);

            if self.pending.is_some() {
                ui.vertical_centered(|ui| {
                    ui.add_space(100.0);
                    ui.spinner();
                    ui.label("Generating...");
                    ui.add_space(100.0);
                });
                return;
            }

            let Some(summary) = self.summary.clone() else {
                ui.vertical_centered(|ui| {
                    ui.add_space(110.0);
                    ui.colored_label(MUTED, "Your summary will appear here");
                    ui.add_space(110.0);
                });
                return;
            };

            egui::ScrollArea::vertical()
                .id_source("summary-output")
                .max_height(300.0)
                .show(ui, |ui| {
                    ui.colored_label(ACCENT, "Summary");
                    ui.label(&summary.summary);
                    ui.add_space(10.0);

                    ui.colored_label(ACCENT, "Key Points");
                    for point in &summary.key_points {
                        ui.horizontal(|ui| {
                            ui.colored_label(ACCENT, "•");
                            ui.label(point);
                        });
                    }
                });

            ui.add_space(10.0);
            if ui
                .add_sized([ui.available_width(), 28.0], egui::Button::new("Export Summary"))
                .clicked()
            {
                self.export_summary(&summary);
            }
        });
    }
}
