//! Results export: a serializable report of a graded session, plus a
//! plain-text summary for sharing outside the app.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::review::{OptionAnnotation, QuestionStatus};
use crate::scoring::ScoreResult;
use crate::session::QuizSession;

/// Report of one graded quiz session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizReport {
    pub id: String,
    pub title: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub score: ScoreResult,
    pub questions: Vec<QuestionReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReport {
    pub id: u32,
    pub text: String,
    pub status: QuestionStatus,
    pub options: Vec<OptionReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionReport {
    pub text: String,
    pub annotation: OptionAnnotation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl From<&QuizSession> for QuizReport {
    fn from(session: &QuizSession) -> Self {
        let review = session.review();
        let score = session
            .score()
            .unwrap_or_else(|| crate::scoring::compute_score(&session.document, session.answers()));

        let questions = session
            .document
            .questions
            .iter()
            .map(|question| {
                let question_review = &review[&question.id];
                let options = question
                    .options
                    .iter()
                    .zip(&question_review.options)
                    .map(|(option, option_review)| OptionReport {
                        text: option.text.clone(),
                        annotation: option_review.annotation,
                        explanation: if option_review.show_explanation {
                            option.explanation.clone()
                        } else {
                            None
                        },
                    })
                    .collect();

                QuestionReport {
                    id: question.id.value(),
                    text: question.text.clone(),
                    status: question_review.status,
                    options,
                }
            })
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            title: session.document.title.clone(),
            completed_at: session.submitted_at,
            score,
            questions,
        }
    }
}

/// Serialize a report as pretty JSON.
pub fn to_json(report: &QuizReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Generate a human-readable summary of a graded session.
pub fn generate_summary(session: &QuizSession) -> String {
    let review = session.review();
    let score = session
        .score()
        .unwrap_or_else(|| crate::scoring::compute_score(&session.document, session.answers()));

    let mut summary = String::new();
    summary.push_str(&format!("## {}\n\n", session.document.title));
    summary.push_str(&format!("Score: {}\n\n", score));

    for (number, question) in session.document.questions.iter().enumerate() {
        let question_review = &review[&question.id];
        summary.push_str(&format!(
            "{}. [{}] {}\n",
            number + 1,
            question_review.status.marker(),
            question.text
        ));

        for (option, option_review) in question.options.iter().zip(&question_review.options) {
            let mark = match option_review.annotation {
                OptionAnnotation::CorrectChosen => "[x] ✓",
                OptionAnnotation::CorrectUnchosen => "[ ] ✓",
                OptionAnnotation::IncorrectChosen => "[x] ✗",
                OptionAnnotation::Neutral => "[ ]  ",
            };
            summary.push_str(&format!("   {} {}\n", mark, option.text));

            if option_review.show_explanation {
                if let Some(explanation) = &option.explanation {
                    summary.push_str(&format!("       {}\n", explanation));
                }
            }
        }
        summary.push('\n');
    }

    summary
}
