use thiserror::Error;

/// Question shown for a generated entry that carries no question field.
pub const MISSING_QUESTION: &str = "No question";

/// A generated question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    question: String,
    answer: String,
}

impl QuizQuestion {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizRequestError {
    #[error("start page must be at least 1")]
    StartPageTooLow,

    #[error("end page ({end}) is before start page ({start})")]
    InvalidPageRange { start: u32, end: u32 },

    #[error("question count must be at least 1")]
    NoQuestionsRequested,
}

/// Validated parameters for generating a quiz from a document excerpt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizRequest {
    start_page: u32,
    end_page: u32,
    question_count: u32,
}

impl QuizRequest {
    /// Pages are 1-based and inclusive.
    ///
    /// # Errors
    ///
    /// Returns `QuizRequestError` when the page range or count is invalid.
    pub fn new(start_page: u32, end_page: u32, question_count: u32) -> Result<Self, QuizRequestError> {
        if start_page < 1 {
            return Err(QuizRequestError::StartPageTooLow);
        }
        if end_page < start_page {
            return Err(QuizRequestError::InvalidPageRange {
                start: start_page,
                end: end_page,
            });
        }
        if question_count < 1 {
            return Err(QuizRequestError::NoQuestionsRequested);
        }
        Ok(Self {
            start_page,
            end_page,
            question_count,
        })
    }

    #[must_use]
    pub fn start_page(&self) -> u32 {
        self.start_page
    }

    #[must_use]
    pub fn end_page(&self) -> u32 {
        self.end_page
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Every page number in the requested range.
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        self.start_page..=self.end_page
    }
}
