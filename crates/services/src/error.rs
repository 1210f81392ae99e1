//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use study_core::model::{CardError, SubjectError};

/// Errors emitted by the quiz generator.
///
/// An empty but well-formed result is not an error; see `QuizOutcome::NoQuestions`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz generation is not configured: set GEMINI_API_KEY")]
    MissingApiKey,
    #[error("document not found: {0}")]
    DocumentNotFound(String),
    #[error("could not read the document: {0}")]
    Document(String),
    #[error("no text could be extracted from the selected pages")]
    EmptyExtract,
    #[error("quiz request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("quiz service returned an empty response")]
    EmptyResponse,
    #[error("quiz service did not return a JSON array: {0}")]
    MalformedOutput(String),
}

/// Errors emitted by `CardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CardServiceError {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `SubjectService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubjectServiceError {
    #[error(transparent)]
    Subject(#[from] SubjectError),
    #[error("subject '{name}' already exists")]
    AlreadyExists { name: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no cards available for session")]
    Empty,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
