use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Identifier of a question within one quiz document.
///
/// Wraps the numeric id from the quiz JSON so answer maps are keyed by a
/// dedicated type rather than a bare integer.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Mapping from question id to the set of currently selected option
/// indices (0-based, in option order).
///
/// Mutated only through the selection rules in [`crate::selection`].
/// Ordered containers keep iteration and serialization deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AnswerState {
    selections: BTreeMap<QuestionId, BTreeSet<usize>>,
}

impl AnswerState {
    /// Fresh, empty state for a new quiz-taking session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded state, e.g. when re-entering review mode with prior
    /// answers.
    pub fn from_selections(selections: BTreeMap<QuestionId, BTreeSet<usize>>) -> Self {
        Self { selections }
    }

    /// Selected option indices for a question; empty if it has no entry.
    pub fn selected(&self, question: QuestionId) -> BTreeSet<usize> {
        self.selections.get(&question).cloned().unwrap_or_default()
    }

    pub fn is_selected(&self, question: QuestionId, option_index: usize) -> bool {
        self.selections
            .get(&question)
            .map(|set| set.contains(&option_index))
            .unwrap_or(false)
    }

    pub fn is_answered(&self, question: QuestionId) -> bool {
        self.selections
            .get(&question)
            .map(|set| !set.is_empty())
            .unwrap_or(false)
    }

    /// Number of questions with at least one selection.
    pub fn answered_count(&self) -> usize {
        self.selections.values().filter(|set| !set.is_empty()).count()
    }

    /// Replace the selection set for a question with a singleton.
    pub(crate) fn replace(&mut self, question: QuestionId, option_index: usize) {
        let set = self.selections.entry(question).or_default();
        set.clear();
        set.insert(option_index);
    }

    /// Toggle one option in the selection set; the set may become empty.
    pub(crate) fn toggle(&mut self, question: QuestionId, option_index: usize) {
        let set = self.selections.entry(question).or_default();
        if !set.insert(option_index) {
            set.remove(&option_index);
        }
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_question_reads_as_empty() {
        let state = AnswerState::new();
        let q = QuestionId::new(3);

        assert!(state.selected(q).is_empty());
        assert!(!state.is_selected(q, 0));
        assert!(!state.is_answered(q));
        assert_eq!(state.answered_count(), 0);
    }

    #[test]
    fn test_replace_discards_prior_selection() {
        let mut state = AnswerState::new();
        let q = QuestionId::new(1);

        state.replace(q, 0);
        state.replace(q, 2);

        assert_eq!(state.selected(q), BTreeSet::from([2]));
    }

    #[test]
    fn test_toggle_twice_returns_to_prior_state() {
        let mut state = AnswerState::new();
        let q = QuestionId::new(1);

        state.toggle(q, 1);
        assert!(state.is_selected(q, 1));

        state.toggle(q, 1);
        assert!(!state.is_selected(q, 1));
        assert!(state.selected(q).is_empty());
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut state = AnswerState::new();
        state.toggle(QuestionId::new(2), 0);
        state.toggle(QuestionId::new(2), 3);

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"2":[0,3]}"#);
    }
}
