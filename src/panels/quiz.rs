use std::collections::HashMap;
use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;

use crate::mock::{self, Question};
use crate::notes::NotesHandle;

use super::{notice_line, panel_heading, ACCENT, DANGER, MUTED, SUCCESS};

#[derive(Debug, Clone)]
pub struct QuizScore {
    pub score: usize,
    pub total_questions: usize,
}

/// Count of answers matching the correct option; unanswered counts as wrong.
pub fn score(questions: &[Question], answers: &HashMap<usize, usize>) -> usize {
    questions
        .iter()
        .enumerate()
        .filter(|(index, question)| answers.get(index) == Some(&question.correct_answer))
        .count()
}

pub struct QuizPanel {
    notes: NotesHandle,
    input_text: String,
    num_questions: usize,
    questions: Vec<Question>,
    current_question: usize,
    user_answers: HashMap<usize, usize>,
    quiz_result: Option<QuizScore>,
    pending: Option<Receiver<Vec<Question>>>,
    error_message: Option<String>,
    status_message: Option<String>,
}

impl QuizPanel {
    pub fn new(notes: NotesHandle) -> Self {
        Self {
            notes,
            input_text: String::new(),
            num_questions: 5,
            questions: Vec::new(),
            current_question: 0,
            user_answers: HashMap::new(),
            quiz_result: None,
            pending: None,
            error_message: None,
            status_message: None,
        }
    }

    pub fn poll(&mut self, ctx: &egui::Context) {
        if let Some(receiver) = &self.pending {
            match receiver.try_recv() {
                Ok(questions) => {
                    self.status_message = Some(format!("{} questions ready", questions.len()));
                    self.questions = questions;
                    self.current_question = 0;
                    self.user_answers.clear();
                    self.quiz_result = None;
                    self.pending = None;
                    ctx.request_repaint();
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.pending = None;
                    self.error_message =
                        Some("Failed to generate quiz. Please try again.".to_string());
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
            self.error_message = Some("Please enter some text to generate quiz from".to_string());
            return;
        }

        log::info!("generating quiz with {} questions", self.num_questions);
        let count = self.num_questions;
        self.pending = Some(mock::defer(mock::QUIZ_DELAY, move || mock::quiz(count)));
    }

    fn finish_quiz(&mut self) {
        self.quiz_result = Some(QuizScore {
            score: score(&self.questions, &self.user_answers),
            total_questions: self.questions.len(),
        });
    }

    fn reset_quiz(&mut self) {
        self.questions.clear();
        self.current_question = 0;
        self.user_answers.clear();
        self.quiz_result = None;
        self.status_message = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        if self.questions.is_empty() {
            self.show_setup(ui);
        } else if self.quiz_result.is_some() {
            self.show_result(ui);
        } else {
            self.show_question(ui);
        }
    }

    fn show_setup(&mut self, ui: &mut egui::Ui) {
        panel_heading(
            ui,
            "AI Quiz Generator",
            "Generate personalized quizzes from your study materials",
        );

        let ready_files = self.notes.with(|store| store.ready_count());

        ui.group(|ui| {
            ui.strong("❓ Create Quiz");
            ui.add_space(8.0);

            ui.label("Study Material");
            egui::ScrollArea::vertical()
                .id_source("quiz-input")
                .max_height(200.0)
                .show(ui, |ui| {
                    ui.add_sized(
                        [ui.available_width(), 180.0],
                        egui::TextEdit::multiline(&mut self.input_text).hint_text(
                            "Paste your study material here to generate quiz questions...",
                        ),
                    );
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.add_enabled_ui(ready_files > 0, |ui| {
                    if ui.button("📄 Use Uploaded Notes").clicked() {
                        self.input_text = self.notes.with(|store| store.notes_content());
                        self.status_message =
                            Some("Loaded content from your uploaded notes".to_string());
                        self.error_message = None;
                    }
                });
                if ready_files == 0 {
                    ui.label(
                        egui::RichText::new("No uploaded notes are ready yet")
                            .color(MUTED)
                            .small(),
                    );
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("Number of Questions");
                ui.add(egui::DragValue::new(&mut self.num_questions).clamp_range(3..=20));
            });

            ui.add_space(8.0);
            let busy = self.pending.is_some();
            ui.add_enabled_ui(!busy, |ui| {
                let label = if busy {
                    "⏳ Generating Quiz..."
                } else {
                    "❓ Generate Quiz"
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

    fn show_question(&mut self, ui: &mut egui::Ui) {
        let total = self.questions.len();
        panel_heading(
            ui,
            "Quiz Time!",
            &format!("Question {} of {}", self.current_question + 1, total),
        );

        let progress = (self.current_question + 1) as f32 / total as f32;
        ui.add(
            egui::ProgressBar::new(progress)
                .show_percentage()
                .fill(ACCENT),
        );
        ui.add_space(15.0);

        let question = self.questions[self.current_question].clone();
        let mut advance = false;

        ui.group(|ui| {
            ui.strong(&question.prompt);
            ui.add_space(10.0);

            for (index, option) in question.options.iter().enumerate() {
                let selected = self.user_answers.get(&self.current_question) == Some(&index);
                let label = format!("{}. {}", ['A', 'B', 'C', 'D'][index], option);
                if ui
                    .add_sized(
                        [ui.available_width(), 34.0],
                        egui::SelectableLabel::new(selected, label),
                    )
                    .clicked()
                {
                    self.user_answers.insert(self.current_question, index);
                }
                ui.add_space(4.0);
            }

            ui.add_space(10.0);
            let answered = self.user_answers.contains_key(&self.current_question);
            ui.add_enabled_ui(answered, |ui| {
                let label = if self.current_question < total - 1 {
                    "Next Question"
                } else {
                    "Finish Quiz"
                };
                if ui
                    .add_sized([ui.available_width(), 32.0], egui::Button::new(label))
                    .clicked()
                {
                    advance = true;
                }
            });
        });

        if advance {
            if self.current_question < total - 1 {
                self.current_question += 1;
            } else {
                self.finish_quiz();
            }
        }
    }

    fn show_result(&mut self, ui: &mut egui::Ui) {
        let Some(result) = self.quiz_result.clone() else {
            return;
        };
        let percentage = if result.total_questions == 0 {
            0
        } else {
            ((result.score as f32 / result.total_questions as f32) * 100.0).round() as u32
        };

        panel_heading(ui, "🏆 Quiz Complete!", "");

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("{percentage}%"))
                    .size(36.0)
                    .color(ACCENT)
                    .strong(),
            );
            ui.label(format!(
                "{} out of {} questions correct",
                result.score, result.total_questions
            ));
        });

        ui.add_space(10.0);
        ui.add(
            egui::ProgressBar::new(percentage as f32 / 100.0)
                .show_percentage()
                .fill(ACCENT),
        );

        ui.add_space(15.0);
        ui.strong("Question Review");
        ui.add_space(5.0);

        egui::ScrollArea::vertical()
            .id_source("quiz-review")
            .max_height(260.0)
            .show(ui, |ui| {
                for (index, question) in self.questions.iter().enumerate() {
                    let user_answer = self.user_answers.get(&index);
                    let correct = user_answer == Some(&question.correct_answer);

                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            if correct {
                                ui.colored_label(SUCCESS, "✅");
                            } else {
                                ui.colored_label(DANGER, "❌");
                            }
                            ui.strong(format!("Question {}", index + 1));
                        });
                        ui.label(egui::RichText::new(&question.prompt).color(MUTED));
                        if !correct {
                            ui.label(
                                egui::RichText::new(format!(
                                    "Correct answer: {}",
                                    question.options[question.correct_answer]
                                ))
                                .color(MUTED)
                                .small(),
                            );
                        }
                    });
                    ui.add_space(4.0);
                }
            });

        ui.add_space(10.0);
        if ui
            .add_sized(
                [ui.available_width(), 32.0],
                egui::Button::new("🔄 Create New Quiz"),
            )
            .clicked()
        {
            self.reset_quiz();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(correct: &[usize]) -> Vec<Question> {
        correct
            .iter()
            .enumerate()
            .map(|(i, &answer)| Question {
                id: i + 1,
                prompt: format!("q{}", i + 1),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct_answer: answer,
                explanation: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_score_counts_matches() {
        let qs = questions(&[0, 1, 2]);
        let mut answers = HashMap::new();
        answers.insert(0, 0);
        answers.insert(1, 3);
        answers.insert(2, 2);
        assert_eq!(score(&qs, &answers), 2);
    }

    #[test]
    fn test_unanswered_questions_count_as_wrong() {
        let qs = questions(&[1, 1]);
        let mut answers = HashMap::new();
        answers.insert(0, 1);
        assert_eq!(score(&qs, &answers), 1);
    }

    #[test]
    fn test_empty_quiz_scores_zero() {
        assert_eq!(score(&[], &HashMap::new()), 0);
    }
}
