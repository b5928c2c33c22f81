mod answers;
mod document;

pub use answers::{AnswerState, QuestionId};
pub use document::{AnswerOption, Question, QuizDocument};
