use crate::quiz::generator::{QuestionId, QuizQuestion};
use std::collections::HashMap;

/// Tracks one pass through a fixed question sequence: chosen answers,
/// cursor position, and the score once submitted.
///
/// Answers are stored as given without validation; scoring happens only
/// at submission. Restarting clears progress but keeps the questions.
#[derive(Clone, Debug, Default)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: HashMap<QuestionId, String>,
    position: usize,
    submitted: bool,
    score: usize,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            answers: HashMap::new(),
            position: 0,
            submitted: false,
            score: 0,
        }
    }

    /// Records or overwrites the answer for a question. Ignored once the
    /// session is submitted.
    pub fn select_answer(&mut self, id: QuestionId, option: impl Into<String>) {
        if self.submitted {
            return;
        }
        self.answers.insert(id, option.into());
    }

    /// Moves the cursor forward, stopping at the last question.
    pub fn next(&mut self) {
        if self.position + 1 < self.questions.len() {
            self.position += 1;
        }
    }

    /// Moves the cursor back, stopping at the first question.
    pub fn previous(&mut self) {
        if self.position > 0 {
            self.position -= 1;
        }
    }

    /// Closes the session and counts correct answers. Calling it again
    /// leaves the score unchanged.
    pub fn submit(&mut self) {
        self.submitted = true;
        self.score = self
            .questions
            .iter()
            .filter(|question| {
                self.answers
                    .get(&question.id)
                    .is_some_and(|chosen| *chosen == question.answer)
            })
            .count();
    }

    /// Returns to a fresh state over the same question sequence.
    pub fn restart(&mut self) {
        self.answers.clear();
        self.position = 0;
        self.submitted = false;
        self.score = 0;
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn all_answered(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    pub fn selected_answer(&self, id: QuestionId) -> Option<&str> {
        self.answers.get(&id).map(String::as_str)
    }
}
