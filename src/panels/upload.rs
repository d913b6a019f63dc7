use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;

use crate::mock;
use crate::notes::{FileUpdate, NotesHandle, UploadedFile};
use crate::utils::file_size::format_size;
use crate::utils::media::{media_kind, PICKER_EXTENSIONS};

use super::{panel_heading, MUTED, SUCCESS};

/// Sole writer of the notes store. Selected or dropped files become store
/// records immediately; their `uploaded` flags flip as staggered completion
/// messages arrive from the worker. Completions are applied here, on the UI
/// thread, so clearing the receivers cancels anything still pending.
pub struct UploadPanel {
    notes: NotesHandle,
    completion_receivers: Vec<Receiver<String>>,
    status_message: Option<String>,
}

impl UploadPanel {
    pub fn new(notes: NotesHandle) -> Self {
        Self {
            notes,
            completion_receivers: Vec::new(),
            status_message: None,
        }
    }

    pub fn poll(&mut self, ctx: &egui::Context) {
        let mut completed = Vec::new();
        self.completion_receivers.retain(|receiver| loop {
            match receiver.try_recv() {
                Ok(id) => completed.push(id),
                Err(TryRecvError::Empty) => break true,
                Err(TryRecvError::Disconnected) => break false,
            }
        });

        if !completed.is_empty() {
            for id in &completed {
                self.notes
                    .with_mut(|store| store.update_file(id, FileUpdate::uploaded(true)));
            }
            ctx.request_repaint();
        }

        // Keep the spinners turning while a batch is in flight.
        if !self.completion_receivers.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn ingest(&mut self, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }

        let batch: Vec<UploadedFile> = paths
            .iter()
            .map(|path| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
                let content = mock::extracted_content(&name);
                UploadedFile::new(name, size, media_kind(path), Some(content))
            })
            .collect();

        let ids: Vec<String> = batch.iter().map(|f| f.id.clone()).collect();
        let count = batch.len();

        log::info!("ingesting {count} file(s)");
        self.notes.with_mut(|store| store.add_files(batch));
        self.completion_receivers
            .push(mock::schedule_upload_completions(ids));
        self.status_message = Some(format!("{count} file(s) being processed"));
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        panel_heading(
            ui,
            "Upload Your Study Materials",
            "Upload PDFs, images, or documents to get started with AI-powered study tools",
        );

        let dropped: Vec<PathBuf> = ui.ctx().input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.ingest(dropped);
        }
        let drag_active = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(egui::RichText::new("📤").size(36.0));
                ui.add_space(8.0);
                if drag_active {
                    ui.strong("Release to add the files");
                } else {
                    ui.strong("Drag and drop your files here");
                }
                ui.label(
                    egui::RichText::new("Supports PDF, PNG, JPG, and TXT files up to 10MB")
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
                ui.add_space(10.0);
                if ui
                    .add(egui::Button::new("Browse Files").min_size(egui::vec2(140.0, 32.0)))
                    .clicked()
                {
                    if let Some(paths) = rfd::FileDialog::new()
                        .add_filter("Study materials", &PICKER_EXTENSIONS)
                        .pick_files()
                    {
                        self.ingest(paths);
                    }
                }
                ui.add_space(24.0);
            });
        });

        if let Some(status) = &self.status_message {
            ui.add_space(5.0);
            ui.colored_label(MUTED, status);
        }

        let files = self.notes.with(|store| store.files().to_vec());
        if files.is_empty() {
            return;
        }

        ui.add_space(15.0);
        ui.group(|ui| {
            ui.strong(format!("🗄 Uploaded Files ({})", files.len()));
            ui.add_space(8.0);

            let mut remove_id = None;
            for file in &files {
                ui.horizontal(|ui| {
                    if file.uploaded {
                        ui.colored_label(SUCCESS, "✅");
                    } else {
                        ui.spinner();
                    }
                    ui.vertical(|ui| {
                        ui.strong(&file.name);
                        ui.label(
                            egui::RichText::new(format!(
                                "{} • {}",
                                format_size(file.size),
                                file.kind
                            ))
                            .color(MUTED)
                            .small(),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✖").clicked() {
                            remove_id = Some(file.id.clone());
                        }
                    });
                });
                ui.add_space(4.0);
            }

            if let Some(id) = remove_id {
                log::info!("removing file {id}");
                self.notes.with_mut(|store| store.remove_file(&id));
            }
        });
    }
}
