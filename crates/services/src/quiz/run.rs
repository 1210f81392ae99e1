use std::fmt;

use study_core::model::QuizQuestion;

/// Position within a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizProgress {
    NotStarted { total: usize },
    InProgress { position: usize, total: usize },
    Finished,
}

impl fmt::Display for QuizProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted { total } => write!(f, "{total} questions"),
            Self::InProgress { position, total } => write!(f, "Question: {position} / {total}"),
            Self::Finished => f.write_str("Quiz finished!"),
        }
    }
}

/// Steps through generated questions in the order they were returned.
///
/// Unlike a flashcard session there is no shuffling and nothing is recorded.
#[derive(Debug, Clone)]
pub struct QuizRun {
    questions: Vec<QuizQuestion>,
    cursor: Option<usize>,
}

impl QuizRun {
    #[must_use]
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            cursor: None,
        }
    }

    /// Advance to the next question. Returns `None` once every question was shown.
    pub fn next_question(&mut self) -> Option<&QuizQuestion> {
        let next = self.cursor.map_or(0, |i| i.saturating_add(1));
        self.cursor = Some(next.min(self.questions.len()));
        self.questions.get(next)
    }

    #[must_use]
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.cursor.and_then(|i| self.questions.get(i))
    }

    /// Answer to the current question, if one is showing.
    #[must_use]
    pub fn reveal_answer(&self) -> Option<&str> {
        self.current().map(QuizQuestion::answer)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor.is_some_and(|i| i >= self.questions.len())
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        match self.cursor {
            None => QuizProgress::NotStarted {
                total: self.total(),
            },
            Some(i) if i < self.questions.len() => QuizProgress::InProgress {
                position: i + 1,
                total: self.total(),
            },
            Some(_) => QuizProgress::Finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run() -> QuizRun {
        QuizRun::new(vec![QuizQuestion::new("Q1", "A1"), QuizQuestion::new("Q2", "A2")])
    }

    #[test]
    fn questions_come_in_returned_order() {
        let mut quiz = run();
        assert_eq!(quiz.progress(), QuizProgress::NotStarted { total: 2 });
        assert_eq!(quiz.reveal_answer(), None);

        assert_eq!(quiz.next_question().map(QuizQuestion::question), Some("Q1"));
        assert_eq!(quiz.progress().to_string(), "Question: 1 / 2");
        assert_eq!(quiz.reveal_answer(), Some("A1"));

        assert_eq!(quiz.next_question().map(QuizQuestion::question), Some("Q2"));
        assert_eq!(quiz.progress(), QuizProgress::InProgress { position: 2, total: 2 });
    }

    #[test]
    fn finishing_is_sticky() {
        let mut quiz = run();
        quiz.next_question();
        quiz.next_question();
        assert!(quiz.next_question().is_none());
        assert!(quiz.next_question().is_none());
        assert!(quiz.is_finished());
        assert_eq!(quiz.progress(), QuizProgress::Finished);
        assert_eq!(quiz.reveal_answer(), None);
    }
}
