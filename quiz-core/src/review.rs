//! Review annotation: derives the per-option display classification shown
//! after submission. Pure and idempotent; presentation stays out of the
//! grading path.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::{AnswerState, Question, QuestionId, QuizDocument};
use crate::scoring::question_correct;

/// How one option renders in review mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OptionAnnotation {
    CorrectChosen,
    CorrectUnchosen,
    IncorrectChosen,
    Neutral,
}

impl OptionAnnotation {
    pub fn is_correct(&self) -> bool {
        matches!(self, OptionAnnotation::CorrectChosen | OptionAnnotation::CorrectUnchosen)
    }

    pub fn is_chosen(&self) -> bool {
        matches!(self, OptionAnnotation::CorrectChosen | OptionAnnotation::IncorrectChosen)
    }
}

/// Overall outcome for one question.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionStatus {
    FullyCorrect,
    PartiallyCorrect,
    Incorrect,
    Unanswered,
}

impl QuestionStatus {
    /// Marker glyph used by renderers next to the question number.
    pub fn marker(&self) -> &'static str {
        match self {
            QuestionStatus::FullyCorrect => "✓",
            QuestionStatus::PartiallyCorrect => "~",
            QuestionStatus::Incorrect => "✗",
            QuestionStatus::Unanswered => "-",
        }
    }
}

/// Review state of one option, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OptionReview {
    pub annotation: OptionAnnotation,
    /// True when the option is correct and carries an explanation; model
    /// answers surface whether or not the option was chosen.
    pub show_explanation: bool,
}

/// Full review state of one question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReview {
    pub status: QuestionStatus,
    pub options: Vec<OptionReview>,
}

fn review_question(question: &Question, selected: &BTreeSet<usize>) -> QuestionReview {
    let correct: BTreeSet<usize> = question.correct_indices().into_iter().collect();

    let status = if selected.is_empty() {
        QuestionStatus::Unanswered
    } else if question_correct(question, selected) {
        QuestionStatus::FullyCorrect
    } else if selected.intersection(&correct).next().is_some() {
        QuestionStatus::PartiallyCorrect
    } else {
        QuestionStatus::Incorrect
    };

    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(idx, opt)| {
            let annotation = match (correct.contains(&idx), selected.contains(&idx)) {
                (true, true) => OptionAnnotation::CorrectChosen,
                (true, false) => OptionAnnotation::CorrectUnchosen,
                (false, true) => OptionAnnotation::IncorrectChosen,
                (false, false) => OptionAnnotation::Neutral,
            };
            OptionReview {
                annotation,
                show_explanation: opt.correct && opt.explanation.is_some(),
            }
        })
        .collect();

    QuestionReview { status, options }
}

/// Derive the review classification for every option of every question.
///
/// Reads the answer state without mutating it; calling twice on the same
/// inputs yields identical output.
pub fn annotate(
    document: &QuizDocument,
    answers: &AnswerState,
) -> BTreeMap<QuestionId, QuestionReview> {
    document
        .questions
        .iter()
        .map(|q| (q.id, review_question(q, &answers.selected(q.id))))
        .collect()
}
