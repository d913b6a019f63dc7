mod ui;
mod view;

pub use view::View;

use eframe::{egui, App};

use crate::notes::NotesProvider;
use crate::panels::{
    DashboardPanel, FlashcardsPanel, QuizPanel, SummarizerPanel, TranslatorPanel, TutorPanel,
    UploadPanel,
};

/// The application shell: owns the notes provider and one instance of each
/// feature panel. Panels receive their store handle at construction and keep
/// it for the life of the app, so store access is always under the
/// provider's scope.
pub struct StudyGenie {
    current_view: View,
    upload: UploadPanel,
    summarizer: SummarizerPanel,
    quiz: QuizPanel,
    flashcards: FlashcardsPanel,
    tutor: TutorPanel,
    translator: TranslatorPanel,
    dashboard: DashboardPanel,
    _notes: NotesProvider,
}

impl StudyGenie {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("initializing StudyGenie");
        let notes = NotesProvider::new();
        Self {
            current_view: View::default(),
            upload: UploadPanel::new(notes.handle()),
            summarizer: SummarizerPanel::new(notes.handle()),
            quiz: QuizPanel::new(notes.handle()),
            flashcards: FlashcardsPanel::new(),
            tutor: TutorPanel::new(),
            translator: TranslatorPanel::new(),
            dashboard: DashboardPanel::new(),
            _notes: notes,
        }
    }

    /// Drains every panel's pending background results before rendering.
    /// Deferred work never mutates state from its worker thread; it all
    /// lands here, on the UI thread.
    fn poll_background(&mut self, ctx: &egui::Context) {
        self.upload.poll(ctx);
        self.summarizer.poll(ctx);
        self.quiz.poll(ctx);
        self.flashcards.poll(ctx);
        self.tutor.poll(ctx);
        self.translator.poll(ctx);
    }
}

impl App for StudyGenie {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_background(ctx);
        self.render(ctx);
    }
}
