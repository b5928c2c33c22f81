//! Grading: turns a final answer state into a score.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{AnswerState, Question, QuizDocument};

/// Outcome of grading one submission. Derived, never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_correct: usize,
    pub total_questions: usize,
}

impl ScoreResult {
    pub fn is_perfect(&self) -> bool {
        self.total_correct == self.total_questions
    }
}

impl std::fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.total_correct, self.total_questions)
    }
}

/// Per-question correctness predicate.
///
/// Single-select: exactly one option selected and it is correct.
/// Multi-select: the selected set equals the correct set exactly; no
/// omissions, no extras, no partial credit. Empty selections are never
/// correct in either mode.
pub fn question_correct(question: &Question, selected: &BTreeSet<usize>) -> bool {
    let correct: BTreeSet<usize> = question.correct_indices().into_iter().collect();

    if question.multiple_correct {
        !selected.is_empty() && *selected == correct
    } else {
        selected.len() == 1 && selected.iter().all(|idx| correct.contains(idx))
    }
}

/// Grade the whole quiz. Questions absent from the answer state count as
/// unanswered, never as an error.
pub fn compute_score(document: &QuizDocument, answers: &AnswerState) -> ScoreResult {
    let total_correct = document
        .questions
        .iter()
        .filter(|q| question_correct(q, &answers.selected(q.id)))
        .count();

    ScoreResult {
        total_correct,
        total_questions: document.questions.len(),
    }
}
