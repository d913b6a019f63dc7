use serde::Serialize;

/// Languages offered across the summarizer and translator panels. `Auto`
/// is only a source-side choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Auto,
    English,
    Hindi,
    Marathi,
    Spanish,
    French,
    German,
    Chinese,
    Japanese,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::Auto,
        Language::English,
        Language::Hindi,
        Language::Marathi,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Chinese,
        Language::Japanese,
        Language::Arabic,
    ];

    pub const SUMMARY_CHOICES: [Language; 3] =
        [Language::English, Language::Hindi, Language::Marathi];

    pub fn name(self) -> &'static str {
        match self {
            Language::Auto => "Detect Language",
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Marathi => "Marathi",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::Arabic => "Arabic",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::Auto => "🌐",
            Language::English => "🇺🇸",
            Language::Hindi => "🇮🇳",
            Language::Marathi => "🇮🇳",
            Language::Spanish => "🇪🇸",
            Language::French => "🇫🇷",
            Language::German => "🇩🇪",
            Language::Chinese => "🇨🇳",
            Language::Japanese => "🇯🇵",
            Language::Arabic => "🇸🇦",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    pub summary: String,
    pub key_points: Vec<String>,
    pub language: Language,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Flashcard {
    pub id: usize,
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: Language,
    pub target_language: Language,
}
