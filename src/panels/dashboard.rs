use std::time::Instant;

use eframe::egui;

use super::{panel_heading, ACCENT, MUTED};

const COUNT_UP_SECONDS: f32 = 1.2;
const WEEK_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

struct Subject {
    name: &'static str,
    progress: u32,
}

/// Placeholder study statistics; a real build would aggregate these from
/// recorded sessions.
struct StudyStats {
    total_quizzes: u32,
    average_score: u32,
    study_streak: u32,
    hours_studied: u32,
    weekly_progress: [u32; 7],
    subjects: [Subject; 4],
}

impl Default for StudyStats {
    fn default() -> Self {
        Self {
            total_quizzes: 24,
            average_score: 85,
            study_streak: 7,
            hours_studied: 32,
            weekly_progress: [65, 72, 80, 85, 78, 90, 88],
            subjects: [
                Subject { name: "Mathematics", progress: 85 },
                Subject { name: "Science", progress: 92 },
                Subject { name: "History", progress: 78 },
                Subject { name: "Literature", progress: 88 },
            ],
        }
    }
}

/// Fully local panel; never touches the notes store.
pub struct DashboardPanel {
    stats: StudyStats,
    opened_at: Option<Instant>,
}

impl DashboardPanel {
    pub fn new() -> Self {
        Self {
            stats: StudyStats::default(),
            opened_at: None,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        panel_heading(
            ui,
            "Study Progress Dashboard",
            "Track your learning journey and celebrate your achievements",
        );

        // Counters ramp up over the first moments after the panel opens.
        let opened_at = *self.opened_at.get_or_insert_with(Instant::now);
        let ramp = (opened_at.elapsed().as_secs_f32() / COUNT_UP_SECONDS).clamp(0.0, 1.0);
        if ramp < 1.0 {
            ui.ctx().request_repaint();
        }
        let counted = |target: u32| ((target as f32) * ramp).floor() as u32;

        ui.columns(4, |columns| {
            stat_card(
                &mut columns[0],
                "Quizzes Completed",
                &counted(self.stats.total_quizzes).to_string(),
                "📖",
            );
            stat_card(
                &mut columns[1],
                "Average Score",
                &format!("{}%", counted(self.stats.average_score)),
                "🎯",
            );
            stat_card(
                &mut columns[2],
                "Study Streak",
                &format!("{} days", counted(self.stats.study_streak)),
                "🔥",
            );
            stat_card(
                &mut columns[3],
                "Hours Studied",
                &format!("{}h", counted(self.stats.hours_studied)),
                "⏱",
            );
        });

        ui.add_space(15.0);
        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.strong("📈 Weekly Progress");
                ui.add_space(8.0);
                weekly_chart(ui, &self.stats.weekly_progress);
            });

            columns[1].group(|ui| {
                ui.strong("📊 Subject Progress");
                ui.add_space(8.0);
                for subject in &self.stats.subjects {
                    ui.horizontal(|ui| {
                        ui.strong(subject.name);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(format!("{}%", subject.progress))
                                    .color(MUTED)
                                    .small(),
                            );
                        });
                    });
                    ui.add(
                        egui::ProgressBar::new(subject.progress as f32 / 100.0)
                            .fill(ACCENT)
                            .desired_width(ui.available_width()),
                    );
                    ui.add_space(6.0);
                }
            });
        });

        ui.add_space(15.0);
        ui.columns(3, |columns| {
            columns[0].group(|ui| {
                ui.strong("Recent Activity");
                ui.add_space(8.0);
                for entry in [
                    "Completed Mathematics Quiz",
                    "Generated Science Summary",
                    "Reviewed 15 Flashcards",
                ] {
                    ui.horizontal(|ui| {
                        ui.colored_label(ACCENT, "•");
                        ui.label(entry);
                    });
                }
            });

            columns[1].group(|ui| {
                ui.strong("🏆 Achievements");
                ui.add_space(8.0);
                achievement(ui, "Quiz Master", "Scored 90%+ on 5 quizzes");
                achievement(ui, "Study Streak", "7 days in a row");
            });

            columns[2].group(|ui| {
                ui.strong("Study Goals");
                ui.add_space(8.0);
                goal(ui, "Weekly Goal", 80);
                goal(ui, "Monthly Target", 65);
            });
        });
    }
}

fn stat_card(ui: &mut egui::Ui, label: &str, value: &str, icon: &str) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(label).color(MUTED).small());
                ui.label(egui::RichText::new(value).size(24.0).color(ACCENT).strong());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(icon).size(20.0));
            });
        });
    });
}

fn weekly_chart(ui: &mut egui::Ui, values: &[u32; 7]) {
    let desired = egui::vec2(ui.available_width(), 140.0);
    let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let label_height = 16.0;
    let chart_height = rect.height() - label_height;
    let gap = 8.0;
    let n = values.len() as f32;
    let bar_width = (rect.width() - gap * (n - 1.0)) / n;

    for (i, value) in values.iter().enumerate() {
        let x = rect.left() + i as f32 * (bar_width + gap);
        let height = chart_height * (*value as f32 / 100.0);
        let bar = egui::Rect::from_min_max(
            egui::pos2(x, rect.top() + chart_height - height),
            egui::pos2(x + bar_width, rect.top() + chart_height),
        );
        painter.rect_filled(bar, 2.0, ACCENT);
        painter.text(
            egui::pos2(x + bar_width / 2.0, rect.bottom() - label_height / 2.0),
            egui::Align2::CENTER_CENTER,
            WEEK_DAYS[i],
            egui::FontId::proportional(10.0),
            MUTED,
        );
    }
}

fn achievement(ui: &mut egui::Ui, title: &str, detail: &str) {
    ui.horizontal(|ui| {
        ui.colored_label(ACCENT, "🏅");
        ui.vertical(|ui| {
            ui.strong(title);
            ui.label(egui::RichText::new(detail).color(MUTED).small());
        });
    });
    ui.add_space(4.0);
}

fn goal(ui: &mut egui::Ui, label: &str, percent: u32) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(format!("{percent}%")).color(MUTED).small());
        });
    });
    ui.add(egui::ProgressBar::new(percent as f32 / 100.0).fill(ACCENT));
    ui.add_space(6.0);
}
