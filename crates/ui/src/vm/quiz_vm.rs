use std::path::PathBuf;

use services::{QuizOutcome, QuizRun};
use study_core::model::{QuizQuestion, QuizRequest, QuizRequestError};
use thiserror::Error;

/// Raw text typed into the quiz setup form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizSetupInput {
    pub document: String,
    pub start_page: String,
    pub end_page: String,
    pub question_count: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizSetupError {
    #[error("Choose a PDF document first.")]
    MissingDocument,
    #[error("'{value}' is not a valid {field}.")]
    NotANumber { field: &'static str, value: String },
    #[error("Invalid quiz settings: {0}.")]
    Request(#[from] QuizRequestError),
}

impl QuizSetupInput {
    /// # Errors
    ///
    /// Returns `QuizSetupError` for a missing path, non-numeric fields, or an
    /// invalid page range or count.
    pub fn parse(&self) -> Result<(PathBuf, QuizRequest), QuizSetupError> {
        let document = normalize_path(&self.document);
        if document.is_empty() {
            return Err(QuizSetupError::MissingDocument);
        }
        let start = parse_number(&self.start_page, "start page")?;
        let end = parse_number(&self.end_page, "end page")?;
        let count = parse_number(&self.question_count, "number of questions")?;
        let request = QuizRequest::new(start, end, count)?;
        Ok((PathBuf::from(document), request))
    }
}

// Paths copied from a file manager often come quoted.
fn normalize_path(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    trimmed
}

fn parse_number(raw: &str, field: &'static str) -> Result<u32, QuizSetupError> {
    raw.trim()
        .parse()
        .map_err(|_| QuizSetupError::NotANumber {
            field,
            value: raw.trim().to_owned(),
        })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Question,
    Answer,
    Finished,
}

/// Steps through generated questions one at a time.
pub struct QuizVm {
    run: QuizRun,
    phase: QuizPhase,
    attempt: String,
}

impl QuizVm {
    #[must_use]
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let mut vm = Self {
            run: QuizRun::new(questions),
            phase: QuizPhase::Question,
            attempt: String::new(),
        };
        vm.next();
        vm
    }

    /// A quiz only opens when the generator produced questions.
    #[must_use]
    pub fn from_outcome(outcome: QuizOutcome) -> Option<Self> {
        match outcome {
            QuizOutcome::Ready(questions) if !questions.is_empty() => Some(Self::new(questions)),
            _ => None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn question_text(&self) -> Option<&str> {
        self.run.current().map(QuizQuestion::question)
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        self.run.progress().to_string()
    }

    /// Answer of the current question once it was revealed.
    #[must_use]
    pub fn answer_text(&self) -> Option<&str> {
        if self.phase == QuizPhase::Answer {
            self.run.reveal_answer()
        } else {
            None
        }
    }

    /// The user's own answer, typed before revealing. Optional and never graded.
    pub fn set_attempt(&mut self, attempt: impl Into<String>) {
        if self.phase == QuizPhase::Question {
            self.attempt = attempt.into();
        }
    }

    #[must_use]
    pub fn attempt(&self) -> &str {
        &self.attempt
    }

    pub fn reveal(&mut self) -> Option<&str> {
        if self.phase == QuizPhase::Question {
            self.phase = QuizPhase::Answer;
        }
        self.run.reveal_answer()
    }

    pub fn next(&mut self) {
        self.attempt.clear();
        self.phase = if self.run.next_question().is_some() {
            QuizPhase::Question
        } else {
            QuizPhase::Finished
        };
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.run.total()
    }
}
