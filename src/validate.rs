//! Structural validation of index entries and quiz documents.
//!
//! Validation is a three-level filter. Each level can drop its own item
//! without failing its parent:
//!
//! ```text
//! document  title + non-empty questions array    → whole page skipped
//! question  non-blank question + answers array   → question skipped
//! answer    string answer + boolean correct      → answer dropped
//! ```
//!
//! The document and index-entry rules live in one function, [`validate`], so
//! the shared title rule cannot drift between the two.

use crate::types::{Answer, IndexEntry, Question, QuizDocument};
use serde_json::Value;
use tracing::warn;

/// Which contract [`validate`] checks a value against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// An element of `index.json`: `{title, file}`.
    Index,
    /// A quiz file: `{title, questions}`.
    Document,
}

/// Check `value` against the rules for `mode`, logging the reason on failure.
///
/// - Both modes: `value` is an object and `title` is a string with
///   non-whitespace content.
/// - [`Mode::Index`]: `file` is a non-blank string ending in `.json`.
/// - [`Mode::Document`]: `questions` is an array with at least one element.
///   The questions themselves are not inspected here.
pub fn validate(value: &Value, mode: Mode) -> bool {
    let Some(object) = value.as_object() else {
        warn!(mode = ?mode, "Skipping invalid entry: not an object");
        return false;
    };

    let has_title = object.get("title").is_some_and(is_non_blank);
    let valid = has_title
        && match mode {
            Mode::Index => object
                .get("file")
                .and_then(Value::as_str)
                .is_some_and(|f| !f.trim().is_empty() && f.ends_with(".json")),
            Mode::Document => object
                .get("questions")
                .and_then(Value::as_array)
                .is_some_and(|q| !q.is_empty()),
        };

    if !valid {
        match mode {
            Mode::Index => warn!(entry = %value, "Skipping invalid index entry"),
            Mode::Document => warn!(entry = %value, "Skipping invalid question file"),
        }
    }
    valid
}

fn is_non_blank(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

/// Validate and convert one element of `index.json`.
pub fn index_entry(value: &Value) -> Option<IndexEntry> {
    if !validate(value, Mode::Index) {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

/// Validate a quiz document and keep only its well-formed questions.
///
/// Returns `None` when the document itself fails [`Mode::Document`]. A
/// document whose questions are all malformed comes back with an empty
/// `questions` list.
pub fn quiz_document(value: &Value) -> Option<QuizDocument> {
    if !validate(value, Mode::Document) {
        return None;
    }
    let title = value.get("title")?.as_str()?.to_string();
    let questions = value
        .get("questions")?
        .as_array()?
        .iter()
        .filter_map(question)
        .collect();
    Some(QuizDocument { title, questions })
}

/// Convert one question, dropping its malformed answers.
///
/// A question needs a non-blank `question` string and an `answers` array; an
/// empty array is fine.
pub fn question(value: &Value) -> Option<Question> {
    let text = value.get("question").filter(|q| is_non_blank(q));
    let answers = value.get("answers").and_then(Value::as_array);

    match (text.and_then(Value::as_str), answers) {
        (Some(text), Some(answers)) => Some(Question {
            question: text.to_string(),
            answers: answers.iter().filter_map(answer).collect(),
        }),
        _ => {
            warn!(question = %value, "Skipping invalid question");
            None
        }
    }
}

/// Convert one answer. Anything other than `{answer: string, correct: bool}`
/// is dropped.
pub fn answer(value: &Value) -> Option<Answer> {
    let text = value.get("answer").and_then(Value::as_str);
    let correct = value.get("correct").and_then(Value::as_bool);
    match (text, correct) {
        (Some(text), Some(correct)) => Some(Answer {
            answer: text.to_string(),
            correct,
        }),
        _ => {
            tracing::debug!(answer = %value, "Dropping malformed answer");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =========================================================================
    // Shared title rule
    // =========================================================================

    #[test]
    fn missing_or_blank_title_fails_both_modes() {
        let cases = [
            json!({"file": "a.json", "questions": [1]}),
            json!({"title": "", "file": "a.json", "questions": [1]}),
            json!({"title": "   \t", "file": "a.json", "questions": [1]}),
            json!({"title": 42, "file": "a.json", "questions": [1]}),
            json!({"title": null, "file": "a.json", "questions": [1]}),
        ];
        for value in &cases {
            assert!(!validate(value, Mode::Index), "index accepted {value}");
            assert!(!validate(value, Mode::Document), "document accepted {value}");
        }
    }

    #[test]
    fn non_objects_fail_both_modes() {
        for value in [json!(null), json!([]), json!("title"), json!(3)] {
            assert!(!validate(&value, Mode::Index));
            assert!(!validate(&value, Mode::Document));
        }
    }

    // =========================================================================
    // Index mode
    // =========================================================================

    #[test]
    fn index_accepts_title_and_json_file() {
        assert!(validate(
            &json!({"title": "HTML", "file": "html.json"}),
            Mode::Index
        ));
    }

    #[test]
    fn index_rejects_files_not_ending_in_json() {
        for file in ["html.txt", "html.JSON", "html.json ", "html", "json", ""] {
            let value = json!({"title": "HTML", "file": file});
            assert!(!validate(&value, Mode::Index), "accepted file {file:?}");
        }
    }

    #[test]
    fn index_rejects_blank_or_missing_file() {
        assert!(!validate(&json!({"title": "HTML"}), Mode::Index));
        assert!(!validate(&json!({"title": "HTML", "file": "  "}), Mode::Index));
        assert!(!validate(&json!({"title": "HTML", "file": 1}), Mode::Index));
    }

    #[test]
    fn index_entry_converts_valid_values() {
        let entry = index_entry(&json!({"title": "CSS", "file": "css.json", "extra": 1})).unwrap();
        assert_eq!(entry.title, "CSS");
        assert_eq!(entry.file, "css.json");
        assert!(index_entry(&json!({"title": "CSS"})).is_none());
    }

    // =========================================================================
    // Document mode
    // =========================================================================

    #[test]
    fn document_requires_non_empty_questions_array() {
        assert!(!validate(&json!({"title": "T"}), Mode::Document));
        assert!(!validate(&json!({"title": "T", "questions": []}), Mode::Document));
        assert!(!validate(&json!({"title": "T", "questions": "q"}), Mode::Document));
        assert!(validate(&json!({"title": "T", "questions": [{}]}), Mode::Document));
    }

    #[test]
    fn document_mode_does_not_inspect_questions() {
        let value = json!({"title": "T", "questions": [1, "two", null]});
        assert!(validate(&value, Mode::Document));
        assert!(quiz_document(&value).unwrap().questions.is_empty());
    }

    // =========================================================================
    // Question and answer filtering
    // =========================================================================

    #[test]
    fn question_with_empty_answers_is_kept() {
        let q = question(&json!({"question": "Why?", "answers": []})).unwrap();
        assert_eq!(q.question, "Why?");
        assert!(q.answers.is_empty());
    }

    #[test]
    fn question_with_non_array_answers_is_skipped() {
        assert!(question(&json!({"question": "Why?", "answers": "because"})).is_none());
        assert!(question(&json!({"question": "Why?"})).is_none());
    }

    #[test]
    fn question_with_blank_text_is_skipped() {
        assert!(question(&json!({"question": "", "answers": []})).is_none());
        assert!(question(&json!({"question": " ", "answers": []})).is_none());
        assert!(question(&json!({"answers": []})).is_none());
    }

    #[test]
    fn malformed_answers_are_dropped_not_fatal() {
        let q = question(&json!({
            "question": "Pick one",
            "answers": [
                {"answer": "yes", "correct": true},
                {"answer": "no"},
                {"answer": 3, "correct": false},
                {"answer": "maybe", "correct": "false"},
                "loose string",
                ["array", true],
                {"answer": "", "correct": false}
            ]
        }))
        .unwrap();

        let texts: Vec<&str> = q.answers.iter().map(|a| a.answer.as_str()).collect();
        assert_eq!(texts, vec!["yes", ""]);
        assert!(q.answers[0].correct);
    }

    #[test]
    fn array_shaped_answers_are_dropped() {
        assert!(answer(&json!(["sneaky", true])).is_none());
        let q = question(&json!({"question": "Q", "answers": [["sneaky", true]]})).unwrap();
        assert!(q.answers.is_empty());
    }

    #[test]
    fn quiz_document_keeps_valid_questions_in_order() {
        let doc = quiz_document(&json!({
            "title": "Mixed",
            "questions": [
                {"question": "First", "answers": []},
                {"question": "Broken", "answers": "nope"},
                {"question": "Second", "answers": [{"answer": "a", "correct": false}]}
            ]
        }))
        .unwrap();

        assert_eq!(doc.title, "Mixed");
        let texts: Vec<&str> = doc.questions.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(texts, vec!["First", "Second"]);
    }
}
