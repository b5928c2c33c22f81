//! Boundary validation for quiz JSON.
//!
//! The engines assume a well-formed document; every structural rule is
//! enforced here, once, when the JSON enters the system.

use std::collections::BTreeSet;

use anyhow::{bail, Context, Result};

use crate::model::QuizDocument;

/// Parse and validate a quiz from its JSON representation.
pub fn from_json(json: &str) -> Result<QuizDocument> {
    let document: QuizDocument =
        serde_json::from_str(json).context("Invalid JSON structure")?;
    validate(&document)?;
    Ok(document)
}

/// Structural checks on an already-parsed document.
pub fn validate(document: &QuizDocument) -> Result<()> {
    if document.title.trim().is_empty() {
        bail!("Quiz must have a title");
    }
    if document.questions.is_empty() {
        bail!("Quiz must have at least one question");
    }

    let mut seen_ids = BTreeSet::new();
    for (index, question) in document.questions.iter().enumerate() {
        let number = index + 1;

        if !seen_ids.insert(question.id) {
            bail!("Question {number} reuses id {}", question.id);
        }
        if question.text.trim().is_empty() {
            bail!("Question {number} must have a question text");
        }
        if question.options.len() < 2 {
            bail!("Question {number} must have at least 2 options");
        }
        if !question.options.iter().any(|opt| opt.correct) {
            bail!("Question {number} must have at least one correct option");
        }
        for (opt_index, option) in question.options.iter().enumerate() {
            if option.text.trim().is_empty() {
                bail!("Question {number}, Option {} must have text", opt_index + 1);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionId;

    const VALID: &str = r#"{
        "title": "Sample Quiz",
        "description": "Two questions",
        "questions": [
            {
                "id": 1,
                "question": "Pick the right one",
                "options": [
                    {"text": "no", "correct": false},
                    {"text": "yes", "correct": true, "explanation": "because"}
                ]
            },
            {
                "id": 2,
                "question": "Pick all that apply",
                "multipleCorrect": true,
                "options": [
                    {"text": "a", "correct": true},
                    {"text": "b", "correct": false},
                    {"text": "c", "correct": true}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_valid_quiz_parses() {
        let document = from_json(VALID).unwrap();
        assert_eq!(document.title, "Sample Quiz");
        assert_eq!(document.question_count(), 2);
        assert!(document.question(QuestionId::new(2)).unwrap().multiple_correct);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = from_json("not json").unwrap_err();
        assert!(err.to_string().contains("Invalid JSON structure"));
    }

    #[test]
    fn test_empty_question_list_is_rejected() {
        let err = from_json(r#"{"title": "t", "questions": []}"#).unwrap_err();
        assert_eq!(err.to_string(), "Quiz must have at least one question");
    }

    #[test]
    fn test_too_few_options_is_rejected() {
        let json = r#"{
            "title": "t",
            "questions": [
                {"id": 1, "question": "q", "options": [{"text": "only", "correct": true}]}
            ]
        }"#;
        let err = from_json(json).unwrap_err();
        assert_eq!(err.to_string(), "Question 1 must have at least 2 options");
    }

    #[test]
    fn test_no_correct_option_is_rejected() {
        let json = r#"{
            "title": "t",
            "questions": [
                {"id": 1, "question": "q", "options": [
                    {"text": "a", "correct": false},
                    {"text": "b", "correct": false}
                ]}
            ]
        }"#;
        let err = from_json(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Question 1 must have at least one correct option"
        );
    }

    #[test]
    fn test_duplicate_question_ids_are_rejected() {
        let json = r#"{
            "title": "t",
            "questions": [
                {"id": 1, "question": "q1", "options": [
                    {"text": "a", "correct": true},
                    {"text": "b", "correct": false}
                ]},
                {"id": 1, "question": "q2", "options": [
                    {"text": "a", "correct": true},
                    {"text": "b", "correct": false}
                ]}
            ]
        }"#;
        let err = from_json(json).unwrap_err();
        assert_eq!(err.to_string(), "Question 2 reuses id 1");
    }
}
