use std::path::Path;
use std::sync::Arc;

use study_core::model::QuizRequest;

use super::backend::{ChatCompletionsBackend, QuizBackend};
use super::document::{DocumentReader, PdfDocumentReader};
use super::parse::{QuizOutcome, build_prompt, parse_questions};
use crate::config::QuizConfig;
use crate::error::QuizError;

/// Generates quizzes from document excerpts.
///
/// Without a backend (no API key configured) every request fails with
/// `QuizError::MissingApiKey`; the rest of the app is unaffected.
#[derive(Clone)]
pub struct QuizService {
    backend: Option<Arc<dyn QuizBackend>>,
    reader: Arc<dyn DocumentReader>,
}

impl QuizService {
    /// # Errors
    ///
    /// Returns `QuizError::Http` if the HTTP client cannot be built.
    pub fn from_config(config: Option<QuizConfig>) -> Result<Self, QuizError> {
        let backend = match config {
            Some(config) => Some(Arc::new(ChatCompletionsBackend::new(config)?) as Arc<dyn QuizBackend>),
            None => None,
        };
        Ok(Self::new(backend, Arc::new(PdfDocumentReader)))
    }

    #[must_use]
    pub fn new(backend: Option<Arc<dyn QuizBackend>>, reader: Arc<dyn DocumentReader>) -> Self {
        Self { backend, reader }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Extract the requested pages, ask the backend for questions, and parse them.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DocumentNotFound` if `path` does not exist,
    /// `QuizError::MissingApiKey` when unconfigured,
    /// `QuizError::EmptyExtract` when the pages hold no text, and
    /// request or parse failures from the backend.
    pub async fn generate(
        &self,
        path: &Path,
        request: QuizRequest,
    ) -> Result<QuizOutcome, QuizError> {
        if !path.is_file() {
            return Err(QuizError::DocumentNotFound(path.display().to_string()));
        }
        let backend = self.backend.as_ref().ok_or(QuizError::MissingApiKey)?;

        let text = self.reader.extract_pages(path, &request)?;
        if text.trim().is_empty() {
            return Err(QuizError::EmptyExtract);
        }

        let prompt = build_prompt(&text, request.question_count());
        let reply = backend.complete(&prompt).await?;
        let outcome = parse_questions(&reply, request.question_count())?;

        match &outcome {
            QuizOutcome::Ready(questions) => {
                tracing::info!(count = questions.len(), "quiz generated");
            }
            QuizOutcome::NoQuestions => tracing::info!("quiz generator returned no questions"),
        }
        Ok(outcome)
    }
}
