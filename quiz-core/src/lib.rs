//! Quiz Core - answer/scoring state machine for multiple-choice quizzes
//!
//! This crate provides the data structures and grading logic for taking
//! a quiz: selection rules (radio vs checkbox semantics), exact-match
//! scoring, and review-mode annotation. It performs no I/O; frontends
//! feed it selection events and render what it derives.

pub mod export;
pub mod load;
pub mod model;
pub mod review;
pub mod scoring;
pub mod selection;
pub mod session;

pub use export::{generate_summary, to_json, QuizReport};
pub use model::{AnswerOption, AnswerState, Question, QuestionId, QuizDocument};
pub use review::{annotate, OptionAnnotation, OptionReview, QuestionReview, QuestionStatus};
pub use scoring::{compute_score, question_correct, ScoreResult};
pub use selection::apply_selection;
pub use session::{Phase, QuizSession};
