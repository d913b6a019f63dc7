use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;

use crate::mock::{self, Flashcard};

use super::{notice_line, panel_heading, ACCENT, MUTED};

/// Fully local panel; never touches the notes store.
pub struct FlashcardsPanel {
    input_text: String,
    num_cards: usize,
    cards: Vec<Flashcard>,
    current_card: usize,
    flipped: bool,
    pending: Option<Receiver<Vec<Flashcard>>>,
    error_message: Option<String>,
    status_message: Option<String>,
}

impl FlashcardsPanel {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            num_cards: 10,
            cards: Vec::new(),
            current_card: 0,
            flipped: false,
            pending: None,
            error_message: None,
            status_message: None,
        }
    }

    pub fn poll(&mut self, ctx: &egui::Context) {
        if let Some(receiver) = &self.pending {
            match receiver.try_recv() {
                Ok(cards) => {
                    self.status_message =
                        Some(format!("{} flashcards ready for study", cards.len()));
                    self.cards = cards;
                    self.current_card = 0;
                    self.flipped = false;
                    self.pending = None;
                    ctx.request_repaint();
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.pending = None;
                    self.error_message =
                        Some("Failed to generate flashcards. Please try again.".to_string());
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
            self.error_message =
                Some("Please enter some text to generate flashcards from".to_string());
            return;
        }

        log::info!("generating {} flashcards", self.num_cards);
        let count = self.num_cards;
        self.pending = Some(mock::defer(mock::FLASHCARD_DELAY, move || {
            mock::flashcards(count)
        }));
    }

    fn next_card(&mut self) {
        if self.current_card < self.cards.len().saturating_sub(1) {
            self.current_card += 1;
            self.flipped = false;
        }
    }

    fn prev_card(&mut self) {
        if self.current_card > 0 {
            self.current_card -= 1;
            self.flipped = false;
        }
    }

    fn reset_study(&mut self) {
        self.cards.clear();
        self.current_card = 0;
        self.flipped = false;
        self.status_message = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        if self.cards.is_empty() {
            self.show_setup(ui);
        } else {
            self.show_study(ui);
        }
    }

    fn show_setup(&mut self, ui: &mut egui::Ui) {
        panel_heading(
            ui,
            "AI Flashcard Generator",
            "Create interactive flashcards from your study material",
        );

        ui.group(|ui| {
            ui.strong("🗂 Create Flashcards");
            ui.add_space(8.0);

            ui.label("Study Material");
            egui::ScrollArea::vertical()
                .id_source("flashcard-input")
                .max_height(200.0)
                .show(ui, |ui| {
                    ui.add_sized(
                        [ui.available_width(), 180.0],
                        egui::TextEdit::multiline(&mut self.input_text)
                            .hint_text("Paste your study material here to generate flashcards..."),
                    );
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("Number of Flashcards");
                ui.add(egui::DragValue::new(&mut self.num_cards).clamp_range(5..=50));
            });

            ui.add_space(8.0);
            let busy = self.pending.is_some();
            ui.add_enabled_ui(!busy, |ui| {
                let label = if busy {
                    "⏳ Generating Flashcards..."
                } else {
                    "➕ Generate Flashcards"
                };
                if ui
                    .add_sized([ui.available_width(), 32.0], egui::Button::new(label))
                    .clicked()
                {
                    self.start_generation();
                }
            });

            notice_line(ui, &self.error_message, &self.status_message);
        });
    }

    fn show_study(&mut self, ui: &mut egui::Ui) {
        let total = self.cards.len();
        panel_heading(
            ui,
            "Study Flashcards",
            &format!("Card {} of {}", self.current_card + 1, total),
        );

        // Keyboard shortcuts: space flips, arrows navigate.
        if !ui.ctx().wants_keyboard_input() {
            let (space, left, right) = ui.ctx().input(|i| {
                (
                    i.key_pressed(egui::Key::Space),
                    i.key_pressed(egui::Key::ArrowLeft),
                    i.key_pressed(egui::Key::ArrowRight),
                )
            });
            if space {
                self.flipped = !self.flipped;
            }
            if left {
                self.prev_card();
            }
            if right {
                self.next_card();
            }
        }

        ui.add(egui::ProgressBar::new((self.current_card + 1) as f32 / total as f32).fill(ACCENT));
        ui.add_space(15.0);

        let card = &self.cards[self.current_card];
        let (face, hint) = if self.flipped {
            (card.back.clone(), "Click to flip back • Use arrow keys to navigate")
        } else {
            (card.front.clone(), "Click to reveal answer • Press Space to flip")
        };

        let card_button = egui::Button::new(
            egui::RichText::new(&face).size(if self.flipped { 15.0 } else { 24.0 }),
        )
        .wrap(true)
        .min_size(egui::vec2(ui.available_width(), 240.0));
        if ui.add(card_button).clicked() {
            self.flipped = !self.flipped;
        }
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(hint).color(MUTED).small());
        });

        ui.add_space(15.0);
        ui.horizontal(|ui| {
            ui.add_enabled_ui(self.current_card > 0, |ui| {
                if ui.button("⬅ Previous").clicked() {
                    self.prev_card();
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_enabled_ui(self.current_card < total - 1, |ui| {
                    if ui.button("Next ➡").clicked() {
                        self.next_card();
                    }
                });
                if ui.button("🔄 New Set").clicked() {
                    self.reset_study();
                }
                if ui.button("Flip Card").clicked() {
                    self.flipped = !self.flipped;
                }
            });
        });

        ui.add_space(15.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Keyboard shortcuts: Space to flip • ← → to navigate")
                    .color(MUTED)
                    .small(),
            );
        });
    }
}
