//! Terminal-side application state: a cursor over the loaded quiz plus
//! the status line. Grading state lives in the core session.

use quiz_core::{Phase, Question, QuestionId, QuizDocument, QuizSession};

/// Frontend state for the TUI.
pub struct QuizApp {
    pub session: Option<QuizSession>,
    pub running: bool,

    // Cursor state
    pub current_question: usize,
    pub current_option: usize,

    // Status message
    pub status_message: Option<String>,
}

impl QuizApp {
    pub fn new() -> Self {
        Self {
            session: None,
            running: true,
            current_question: 0,
            current_option: 0,
            status_message: None,
        }
    }

    pub fn load_quiz(&mut self, document: QuizDocument) {
        self.session = Some(QuizSession::new(document));
        self.current_question = 0;
        self.current_option = 0;
    }

    pub fn phase(&self) -> Option<Phase> {
        self.session.as_ref().map(|s| s.phase())
    }

    /// Title for display.
    pub fn title(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.document.title.clone())
            .unwrap_or_else(|| "No quiz loaded".to_string())
    }

    pub fn question_count(&self) -> usize {
        self.session
            .as_ref()
            .map(|s| s.document.question_count())
            .unwrap_or(0)
    }

    /// Question under the cursor.
    pub fn current(&self) -> Option<&Question> {
        self.session
            .as_ref()
            .and_then(|s| s.document.questions.get(self.current_question))
    }

    fn current_id(&self) -> Option<QuestionId> {
        self.current().map(|q| q.id)
    }

    pub fn next_question(&mut self) {
        let count = self.question_count();
        if count > 0 {
            self.current_question = (self.current_question + 1) % count;
            self.current_option = 0;
        }
    }

    pub fn prev_question(&mut self) {
        let count = self.question_count();
        if count > 0 {
            self.current_question = if self.current_question == 0 {
                count - 1
            } else {
                self.current_question - 1
            };
            self.current_option = 0;
        }
    }

    pub fn next_option(&mut self) {
        if let Some(question) = self.current() {
            let count = question.options.len();
            self.current_option = (self.current_option + 1) % count;
        }
    }

    pub fn prev_option(&mut self) {
        if let Some(question) = self.current() {
            let count = question.options.len();
            self.current_option = if self.current_option == 0 {
                count - 1
            } else {
                self.current_option - 1
            };
        }
    }

    /// Select the option under the cursor. The session ignores this in
    /// review mode.
    pub fn select_current(&mut self) {
        let (id, index) = match self.current_id() {
            Some(id) => (id, self.current_option),
            None => return,
        };
        if let Some(session) = self.session.as_mut() {
            session.select(id, index);
        }
    }

    /// Submit the quiz and move the cursor back to the first question
    /// for review.
    pub fn submit(&mut self) {
        if let Some(session) = self.session.as_mut() {
            let score = session.submit();
            self.current_question = 0;
            self.current_option = 0;
            self.set_status(&format!("Submitted. Score: {}", score));
        }
    }

    /// Discard answers and retake the loaded quiz.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.reset();
            self.current_question = 0;
            self.current_option = 0;
            self.set_status("Quiz reset");
        }
    }

    /// Set status message
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::AnswerOption;

    fn document() -> QuizDocument {
        let options = vec![
            AnswerOption {
                text: "a".to_string(),
                correct: true,
                explanation: None,
            },
            AnswerOption {
                text: "b".to_string(),
                correct: false,
                explanation: None,
            },
        ];
        QuizDocument::new(
            "Nav".to_string(),
            vec![
                Question {
                    id: QuestionId::new(1),
                    text: "one".to_string(),
                    multiple_correct: false,
                    options: options.clone(),
                },
                Question {
                    id: QuestionId::new(2),
                    text: "two".to_string(),
                    multiple_correct: false,
                    options,
                },
            ],
        )
    }

    #[test]
    fn test_question_navigation_wraps() {
        let mut app = QuizApp::new();
        app.load_quiz(document());

        app.next_question();
        assert_eq!(app.current_question, 1);
        app.next_question();
        assert_eq!(app.current_question, 0);
        app.prev_question();
        assert_eq!(app.current_question, 1);
    }

    #[test]
    fn test_changing_question_resets_option_cursor() {
        let mut app = QuizApp::new();
        app.load_quiz(document());

        app.next_option();
        assert_eq!(app.current_option, 1);
        app.next_question();
        assert_eq!(app.current_option, 0);
    }

    #[test]
    fn test_select_and_submit_through_the_session() {
        let mut app = QuizApp::new();
        app.load_quiz(document());

        app.select_current(); // q1 option 0, correct
        app.next_question();
        app.next_option();
        app.select_current(); // q2 option 1, wrong
        app.submit();

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.phase(), Phase::Reviewing);
        assert_eq!(session.score().unwrap().total_correct, 1);
        assert_eq!(app.current_question, 0);
    }
}
