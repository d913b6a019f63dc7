/// The single active-view identifier. Exactly one panel renders at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Upload,
    Summarize,
    Quiz,
    Flashcards,
    Tutor,
    Translate,
    Dashboard,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Upload,
        View::Summarize,
        View::Quiz,
        View::Flashcards,
        View::Tutor,
        View::Translate,
        View::Dashboard,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::Upload => "Upload Notes",
            View::Summarize => "Summarizer",
            View::Quiz => "Quiz Generator",
            View::Flashcards => "Flashcards",
            View::Tutor => "AI Tutor",
            View::Translate => "Translate",
            View::Dashboard => "Dashboard",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            View::Upload => "📤",
            View::Summarize => "🗒",
            View::Quiz => "❓",
            View::Flashcards => "🗂",
            View::Tutor => "💬",
            View::Translate => "🌐",
            View::Dashboard => "📊",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_upload() {
        assert_eq!(View::default(), View::Upload);
    }

    #[test]
    fn test_nav_titles_are_unique() {
        for (i, a) in View::ALL.iter().enumerate() {
            for b in View::ALL.iter().skip(i + 1) {
                assert_ne!(a.title(), b.title());
            }
        }
    }
}
