//! Placeholder generation: every "AI" operation here is a fixed delay on a
//! worker thread followed by templated output, delivered over a channel the
//! requesting panel owns. Dropping the receiver invalidates the pending
//! result; the worker's send fails and nothing else happens.

use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

use rand::Rng;
use tokio::runtime::Runtime;

use super::types::{Flashcard, Language, Question, SummaryResult, TranslationResult};

pub const SUMMARY_DELAY: Duration = Duration::from_millis(2000);
pub const QUIZ_DELAY: Duration = Duration::from_millis(2000);
pub const FLASHCARD_DELAY: Duration = Duration::from_millis(2000);
pub const TUTOR_DELAY: Duration = Duration::from_millis(2000);
pub const TRANSLATION_DELAY: Duration = Duration::from_millis(1500);
/// Gap between successive upload completions in one batch.
pub const UPLOAD_STEP: Duration = Duration::from_millis(1000);

/// Runs `produce` on a worker thread after `delay` and delivers the result
/// over the returned channel.
pub fn defer<T, F>(delay: Duration, produce: F) -> Receiver<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (sender, receiver) = channel();
    std::thread::spawn(move || {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            tokio::time::sleep(delay).await;
            let _ = sender.send(produce());
        });
    });
    receiver
}

/// Emits each file id in turn, one `UPLOAD_STEP` apart, matching the
/// staggered completion of a simulated upload batch. Stops early if the
/// receiving panel went away.
pub fn schedule_upload_completions(ids: Vec<String>) -> Receiver<String> {
    let (sender, receiver) = channel();
    std::thread::spawn(move || {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            for id in ids {
                tokio::time::sleep(UPLOAD_STEP).await;
                if sender.send(id).is_err() {
                    break;
                }
            }
        });
    });
    receiver
}

/// Stand-in for the text extraction a real pipeline would run on upload.
pub fn extracted_content(file_name: &str) -> String {
    format!(
        "Sample extracted content from {file_name}. This would be the actual text content \
         extracted from your uploaded file using OCR for images or text extraction for PDFs. \
         The content would be processed and made available for summarization, quiz generation, \
         and flashcard creation."
    )
}

pub fn summary(_input: &str, language: Language) -> SummaryResult {
    SummaryResult {
        summary: "This is a comprehensive summary of the provided text, highlighting the main \
                  concepts and ideas in a concise format. The content covers key topics and \
                  provides essential insights for better understanding."
            .to_string(),
        key_points: vec![
            "Main concept identification and analysis".to_string(),
            "Key relationships between different topics".to_string(),
            "Important definitions and terminology".to_string(),
            "Critical insights and conclusions".to_string(),
            "Practical applications and examples".to_string(),
        ],
        language,
    }
}

pub fn quiz(count: usize) -> Vec<Question> {
    let mut rng = rand::thread_rng();
    (1..=count)
        .map(|i| Question {
            id: i,
            prompt: format!(
                "Sample question {i}: What is the main concept discussed in the text \
                 regarding topic {i}?"
            ),
            options: vec![
                format!("Option A for question {i}"),
                format!("Option B for question {i}"),
                format!("Option C for question {i}"),
                format!("Option D for question {i}"),
            ],
            correct_answer: rng.gen_range(0..4),
            explanation: format!(
                "This is the explanation for question {i}, providing detailed reasoning \
                 for the correct answer."
            ),
        })
        .collect()
}

pub fn flashcards(count: usize) -> Vec<Flashcard> {
    (1..=count)
        .map(|i| Flashcard {
            id: i,
            front: format!("Concept {i}"),
            back: format!(
                "This is the detailed explanation for concept {i}, providing comprehensive \
                 information about the topic discussed in your study material. It includes \
                 key points, definitions, and important details that you should remember."
            ),
        })
        .collect()
}

pub fn translation(input: &str, source: Language, target: Language) -> TranslationResult {
    TranslationResult {
        original_text: input.to_string(),
        translated_text: format!(
            "This is the translated version of your text in {}. The translation maintains \
             the meaning and context while adapting to the target language's structure and \
             cultural nuances.",
            target.name()
        ),
        source_language: if source == Language::Auto {
            Language::English
        } else {
            source
        },
        target_language: target,
    }
}

pub fn tutor_greeting() -> String {
    "Hi! I'm your AI tutor. I'm here to help you understand your study material. Ask me \
     anything about your topics, and I'll provide detailed explanations and examples!"
        .to_string()
}

pub fn tutor_reply(question: &str) -> String {
    format!(
        "Great question! Let me explain that concept in detail. {question} is an important \
         topic that connects to several key principles in your study material. Here's a \
         comprehensive explanation with examples and practical applications that will help \
         you understand it better."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_shape() {
        let result = summary("some study text", Language::Hindi);
        assert_eq!(result.key_points.len(), 5);
        assert_eq!(result.language, Language::Hindi);
        assert!(!result.summary.is_empty());
    }

    #[test]
    fn test_quiz_shape() {
        let questions = quiz(7);
        assert_eq!(questions.len(), 7);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.id, i + 1);
            assert_eq!(q.options.len(), 4);
            assert!(q.correct_answer < 4);
        }
    }

    #[test]
    fn test_flashcards_shape() {
        let cards = flashcards(12);
        assert_eq!(cards.len(), 12);
        assert_eq!(cards[0].front, "Concept 1");
        assert_eq!(cards[11].id, 12);
    }

    #[test]
    fn test_translation_names_target_language() {
        let result = translation("hello", Language::Auto, Language::French);
        assert!(result.translated_text.contains("French"));
        assert_eq!(result.source_language, Language::English);
        assert_eq!(result.target_language, Language::French);
        assert_eq!(result.original_text, "hello");
    }

    #[test]
    fn test_defer_delivers_result() {
        let receiver = defer(Duration::from_millis(10), || 41 + 1);
        let value = receiver
            .recv_timeout(Duration::from_secs(5))
            .expect("deferred value");
        assert_eq!(value, 42);
    }

    #[test]
    fn test_dropped_receiver_is_harmless() {
        let receiver = defer(Duration::from_millis(10), || "ignored");
        drop(receiver);
        // The worker's send fails silently; give it time to run through.
        std::thread::sleep(Duration::from_millis(50));
    }

    #[test]
    fn test_upload_completions_arrive_in_order() {
        let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let receiver = schedule_upload_completions(ids.clone());
        let mut seen = Vec::new();
        while let Ok(id) = receiver.recv_timeout(Duration::from_secs(10)) {
            seen.push(id);
        }
        assert_eq!(seen, ids);
    }
}
