//! One quiz-taking session: owns the document and answer state and walks
//! the `Taking -> Reviewing` state machine.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::{AnswerState, QuestionId, QuizDocument};
use crate::review::{self, QuestionReview};
use crate::scoring::{self, ScoreResult};
use crate::selection;

/// Session phase. `Reviewing` is terminal until a reset discards the
/// session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Taking,
    Reviewing,
}

/// Live state of one person taking one quiz.
pub struct QuizSession {
    pub id: Uuid,
    pub document: QuizDocument,
    answers: AnswerState,
    phase: Phase,
    pub started_at: DateTime<Utc>,
    pub submitted_at: Option<DateTime<Utc>>,
    score: Option<ScoreResult>,
}

impl QuizSession {
    pub fn new(document: QuizDocument) -> Self {
        Self::with_answers(document, AnswerState::new())
    }

    /// Start with pre-seeded answers, e.g. when re-entering a quiz with
    /// prior selections.
    pub fn with_answers(document: QuizDocument, answers: AnswerState) -> Self {
        Self {
            id: Uuid::new_v4(),
            document,
            answers,
            phase: Phase::Taking,
            started_at: Utc::now(),
            submitted_at: None,
            score: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn answers(&self) -> &AnswerState {
        &self.answers
    }

    /// Score computed at submission; `None` while still taking.
    pub fn score(&self) -> Option<ScoreResult> {
        self.score
    }

    /// Handle one selection event from the UI.
    ///
    /// Ignored in `Reviewing`: the answer state is frozen after grading
    /// and a stray click is not an error.
    pub fn select(&mut self, question_id: QuestionId, option_index: usize) {
        if self.phase == Phase::Reviewing {
            return;
        }
        selection::apply_selection(&self.document, &mut self.answers, question_id, option_index);
    }

    /// Grade the current answers and freeze the session for review.
    ///
    /// Repeat calls return the already-computed score without regrading.
    pub fn submit(&mut self) -> ScoreResult {
        if let Some(score) = self.score {
            return score;
        }

        let score = scoring::compute_score(&self.document, &self.answers);
        self.score = Some(score);
        self.submitted_at = Some(Utc::now());
        self.phase = Phase::Reviewing;
        score
    }

    /// Review classification for every question; read-only over the
    /// answer state, so valid in either phase.
    pub fn review(&self) -> BTreeMap<QuestionId, QuestionReview> {
        review::annotate(&self.document, &self.answers)
    }

    /// Discard all answers and return to `Taking` with a fresh session
    /// identity, keeping the loaded document.
    pub fn reset(&mut self) {
        self.id = Uuid::new_v4();
        self.answers = AnswerState::new();
        self.phase = Phase::Taking;
        self.started_at = Utc::now();
        self.submitted_at = None;
        self.score = None;
    }

    /// Reset onto a newly loaded document.
    pub fn reset_with(&mut self, document: QuizDocument) {
        self.document = document;
        self.reset();
    }
}
