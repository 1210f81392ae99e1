use dioxus::prelude::*;
use services::{CardServiceError, QuizError, SessionError, SubjectServiceError};
use study_core::model::SubjectKey;
use thiserror::Error;

use crate::vm::QuizSetupError;

/// Failure shown inside a view. Carries its user-facing text so resources can
/// hand it out by clone.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ViewError {
    #[error("No cards to study. Add some first!")]
    EmptySubject,
    #[error("Unknown subject '{0}'.")]
    UnknownSubject(String),
    #[error("AI quizzes are not configured. Set GEMINI_API_KEY and restart.")]
    QuizDisabled,
    /// Input the user can correct: validation failures and duplicates.
    #[error("{0}")]
    Rejected(String),
    #[error("Could not access the subject files: {0}.")]
    Storage(String),
    #[error("{0}")]
    Quiz(String),
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<SessionError> for ViewError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Empty => Self::EmptySubject,
            other => Self::Storage(other.to_string()),
        }
    }
}

impl From<SubjectServiceError> for ViewError {
    fn from(err: SubjectServiceError) -> Self {
        match err {
            SubjectServiceError::AlreadyExists { name } => {
                Self::Rejected(format!("Subject '{name}' already exists."))
            }
            SubjectServiceError::Subject(err) => Self::Rejected(capitalize(&err.to_string())),
            other => Self::Storage(other.to_string()),
        }
    }
}

impl From<CardServiceError> for ViewError {
    fn from(err: CardServiceError) -> Self {
        match err {
            CardServiceError::Card(err) => Self::Rejected(capitalize(&err.to_string())),
            other => Self::Storage(other.to_string()),
        }
    }
}

impl From<QuizSetupError> for ViewError {
    fn from(err: QuizSetupError) -> Self {
        Self::Rejected(err.to_string())
    }
}

impl From<QuizError> for ViewError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::MissingApiKey => Self::QuizDisabled,
            QuizError::Http(_) | QuizError::HttpStatus(_) | QuizError::EmptyResponse => {
                Self::Quiz(format!(
                    "AI error: the service could not generate questions ({err}). Check your API key or quota."
                ))
            }
            QuizError::MalformedOutput(_) => Self::Quiz(
                "AI error: the reply was not a list of questions. Please try again.".to_owned(),
            ),
            QuizError::DocumentNotFound(_) | QuizError::Document(_) | QuizError::EmptyExtract => {
                Self::Quiz(format!("Could not use the PDF: {err}."))
            }
            other => Self::Quiz(format!("Quiz generation failed: {other}.")),
        }
    }
}

/// Subject key carried in a route.
pub(crate) fn route_subject_key(raw: &str) -> Result<SubjectKey, ViewError> {
    SubjectKey::from_stem(raw).map_err(|err| {
        tracing::debug!(key = raw, error = %err, "rejected subject key");
        ViewError::UnknownSubject(raw.to_owned())
    })
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Storage("no result".to_owned())),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
