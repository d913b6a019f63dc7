mod generate;
mod types;

pub use generate::{
    defer, extracted_content, flashcards, quiz, schedule_upload_completions, summary,
    translation, tutor_greeting, tutor_reply, FLASHCARD_DELAY, QUIZ_DELAY, SUMMARY_DELAY,
    TRANSLATION_DELAY, TUTOR_DELAY, UPLOAD_STEP,
};
pub use types::{Flashcard, Language, Question, SummaryResult, TranslationResult};
