//! Selection rules: how a click on an option mutates the answer state.

use crate::model::{AnswerState, QuestionId, QuizDocument};

/// Apply one selection event to the answer state.
///
/// Single-select questions get radio semantics: the new selection set
/// becomes the singleton `{option_index}`. Multi-select questions get
/// checkbox semantics: membership of `option_index` is toggled and the
/// set may become empty.
///
/// The UI only emits indices it rendered, so an unknown question id or
/// an out-of-range option index is a desynchronization bug and panics.
pub fn apply_selection(
    document: &QuizDocument,
    answers: &mut AnswerState,
    question_id: QuestionId,
    option_index: usize,
) {
    let question = document
        .question(question_id)
        .unwrap_or_else(|| panic!("selection for unknown question id {question_id}"));
    assert!(
        option_index < question.options.len(),
        "option index {option_index} out of range for question {question_id}"
    );

    if question.multiple_correct {
        answers.toggle(question_id, option_index);
    } else {
        answers.replace(question_id, option_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, Question};
    use std::collections::BTreeSet;

    fn option(text: &str, correct: bool) -> AnswerOption {
        AnswerOption {
            text: text.to_string(),
            correct,
            explanation: None,
        }
    }

    fn doc() -> QuizDocument {
        QuizDocument::new(
            "Selection".to_string(),
            vec![
                Question {
                    id: QuestionId::new(1),
                    text: "single".to_string(),
                    multiple_correct: false,
                    options: vec![option("a", false), option("b", true), option("c", false)],
                },
                Question {
                    id: QuestionId::new(2),
                    text: "multi".to_string(),
                    multiple_correct: true,
                    options: vec![option("a", true), option("b", false), option("c", true)],
                },
            ],
        )
    }

    #[test]
    fn test_single_select_is_exclusive() {
        let document = doc();
        let mut answers = AnswerState::new();
        let q = QuestionId::new(1);

        apply_selection(&document, &mut answers, q, 0);
        apply_selection(&document, &mut answers, q, 1);

        assert_eq!(answers.selected(q), BTreeSet::from([1]));
    }

    #[test]
    fn test_multi_select_accumulates() {
        let document = doc();
        let mut answers = AnswerState::new();
        let q = QuestionId::new(2);

        apply_selection(&document, &mut answers, q, 0);
        apply_selection(&document, &mut answers, q, 2);

        assert_eq!(answers.selected(q), BTreeSet::from([0, 2]));
    }

    #[test]
    fn test_multi_select_toggle_can_empty_the_set() {
        let document = doc();
        let mut answers = AnswerState::new();
        let q = QuestionId::new(2);

        apply_selection(&document, &mut answers, q, 1);
        apply_selection(&document, &mut answers, q, 1);

        assert!(answers.selected(q).is_empty());
    }

    #[test]
    #[should_panic(expected = "unknown question id")]
    fn test_unknown_question_id_panics() {
        let document = doc();
        let mut answers = AnswerState::new();
        apply_selection(&document, &mut answers, QuestionId::new(99), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_option_index_panics() {
        let document = doc();
        let mut answers = AnswerState::new();
        apply_selection(&document, &mut answers, QuestionId::new(1), 3);
    }
}
