use std::path::{Path, PathBuf};
use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::card_service::CardService;
use crate::config::AppConfig;
use crate::error::AppServicesError;
use crate::quiz::QuizService;
use crate::sessions::SessionLoopService;
use crate::subject_service::SubjectService;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    data_dir: PathBuf,
    subjects: Arc<SubjectService>,
    cards: Arc<CardService>,
    session_loop: Arc<SessionLoopService>,
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build services backed by JSON files under `config.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the quiz client cannot be initialised.
    pub fn new(config: &AppConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::json(&config.data_dir);
        let quiz = QuizService::from_config(config.quiz.clone())?;
        tracing::debug!(
            data_dir = %config.data_dir.display(),
            quiz_enabled = quiz.enabled(),
            "services configured"
        );
        Ok(Self::from_parts(config.data_dir.clone(), &storage, clock, quiz))
    }

    /// Build services over an existing storage backend.
    #[must_use]
    pub fn from_parts(
        data_dir: PathBuf,
        storage: &Storage,
        clock: Clock,
        quiz: QuizService,
    ) -> Self {
        Self {
            data_dir,
            subjects: Arc::new(SubjectService::new(Arc::clone(&storage.subjects))),
            cards: Arc::new(CardService::new(Arc::clone(&storage.subjects))),
            session_loop: Arc::new(SessionLoopService::new(
                clock,
                Arc::clone(&storage.subjects),
            )),
            quiz: Arc::new(quiz),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn subjects(&self) -> Arc<SubjectService> {
        Arc::clone(&self.subjects)
    }

    #[must_use]
    pub fn cards(&self) -> Arc<CardService> {
        Arc::clone(&self.cards)
    }

    #[must_use]
    pub fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}
