use std::sync::mpsc::{Receiver, TryRecvError};

use chrono::{DateTime, Local};
use eframe::egui;

use crate::mock;

use super::{panel_heading, ACCENT, DANGER, MUTED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone)]
struct ChatMessage {
    role: Role,
    content: String,
    timestamp: DateTime<Local>,
}

/// Fully local chat panel; never touches the notes store.
pub struct TutorPanel {
    messages: Vec<ChatMessage>,
    input_message: String,
    pending: Option<Receiver<String>>,
    error_message: Option<String>,
}

impl TutorPanel {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::Bot,
                content: mock::tutor_greeting(),
                timestamp: Local::now(),
            }],
            input_message: String::new(),
            pending: None,
            error_message: None,
        }
    }

    pub fn poll(&mut self, ctx: &egui::Context) {
        if let Some(receiver) = &self.pending {
            match receiver.try_recv() {
                Ok(reply) => {
                    self.messages.push(ChatMessage {
                        role: Role::Bot,
                        content: reply,
                        timestamp: Local::now(),
                    });
                    self.pending = None;
                    ctx.request_repaint();
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.pending = None;
                    self.error_message =
                        Some("Failed to get response. Please try again.".to_string());
                    ctx.request_repaint();
                }
            }
        }
        if self.pending.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn send_message(&mut self) {
        let question = self.input_message.trim().to_string();
        if question.is_empty() || self.pending.is_some() {
            return;
        }

        self.messages.push(ChatMessage {
            role: Role::User,
            content: question.clone(),
            timestamp: Local::now(),
        });
        self.input_message.clear();
        self.error_message = None;

        log::info!("tutor question sent");
        self.pending = Some(mock::defer(mock::TUTOR_DELAY, move || {
            mock::tutor_reply(&question)
        }));
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        panel_heading(
            ui,
            "Interactive AI Tutor",
            "Get personalized explanations and answers to your study questions",
        );

        ui.group(|ui| {
            ui.strong("💬 Chat with Your AI Tutor");
            ui.separator();

            let transcript_height = (ui.available_height() - 90.0).max(220.0);
            egui::ScrollArea::vertical()
                .id_source("tutor-transcript")
                .max_height(transcript_height)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in &self.messages {
                        show_message(ui, message);
                        ui.add_space(8.0);
                    }
                    if self.pending.is_some() {
                        ui.horizontal(|ui| {
                            ui.colored_label(ACCENT, "🤖");
                            ui.spinner();
                            ui.label(egui::RichText::new("Thinking...").color(MUTED).small());
                        });
                    }
                });

            ui.separator();
            let mut submit = false;
            ui.horizontal(|ui| {
                let response = ui.add_sized(
                    [ui.available_width() - 70.0, 24.0],
                    egui::TextEdit::singleline(&mut self.input_message)
                        .hint_text("Ask me anything about your study material..."),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                    response.request_focus();
                }

                let can_send =
                    !self.input_message.trim().is_empty() && self.pending.is_none();
                ui.add_enabled_ui(can_send, |ui| {
                    if ui.button("📨 Send").clicked() {
                        submit = true;
                    }
                });
            });
            if submit {
                self.send_message();
            }

            if let Some(error) = &self.error_message {
                ui.colored_label(DANGER, error);
            }
            ui.label(egui::RichText::new("Press Enter to send").color(MUTED).small());
        });
    }
}

fn show_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let (icon, align) = match message.role {
        Role::Bot => ("🤖", egui::Align::Min),
        Role::User => ("👤", egui::Align::Max),
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        ui.set_max_width(ui.available_width() * 0.8);
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.colored_label(ACCENT, icon);
                ui.vertical(|ui| {
                    ui.label(&message.content);
                    ui.label(
                        egui::RichText::new(message.timestamp.format("%H:%M:%S").to_string())
                            .color(MUTED)
                            .small(),
                    );
                });
            });
        });
    });
}
