use serde::{Deserialize, Serialize};

use super::QuestionId;

/// A loaded quiz: title, optional description, and an ordered question list.
///
/// Immutable once loaded. Structural validity (non-empty title, at least
/// one question, >= 2 options and >= 1 correct option per question) is
/// checked at the boundary by [`crate::load::from_json`]; the engines
/// assume it holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDocument {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

impl QuizDocument {
    pub fn new(title: String, questions: Vec<Question>) -> Self {
        Self {
            title,
            description: None,
            questions,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Look up a question by id.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// One question with its answer key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    /// Prompt text; the quiz JSON schema names this field `question`.
    #[serde(rename = "question")]
    pub text: String,
    /// Selection mode: false = radio (single-select), true = checkbox.
    #[serde(default)]
    pub multiple_correct: bool,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Positions of the options marked correct, in option order.
    pub fn correct_indices(&self) -> Vec<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, opt)| opt.correct)
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// A single answer choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub text: String,
    pub correct: bool,
    /// Shown only for correct options in review mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_json_schema_field_names() {
        let json = r#"{
            "id": 1,
            "question": "Pick one",
            "options": [
                {"text": "a", "correct": true},
                {"text": "b", "correct": false}
            ]
        }"#;

        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.text, "Pick one");
        assert!(!q.multiple_correct, "multipleCorrect defaults to false");
        assert_eq!(q.correct_indices(), vec![0]);
    }

    #[test]
    fn test_multiple_correct_round_trips_camel_case() {
        let q = Question {
            id: QuestionId::new(7),
            text: "Select all".to_string(),
            multiple_correct: true,
            options: vec![
                AnswerOption {
                    text: "x".to_string(),
                    correct: true,
                    explanation: None,
                },
                AnswerOption {
                    text: "y".to_string(),
                    correct: true,
                    explanation: Some("why".to_string()),
                },
            ],
        };

        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"multipleCorrect\":true"));
        assert!(json.contains("\"question\":\"Select all\""));
        assert_eq!(q.correct_indices(), vec![0, 1]);
    }
}
