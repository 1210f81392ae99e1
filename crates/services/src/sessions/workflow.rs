use std::sync::Arc;

use storage::repository::SubjectRepository;
use study_core::Clock;
use study_core::model::{Card, SubjectKey};

use super::service::SessionService;
use crate::error::SessionError;

/// Starts sessions from stored subjects.
#[derive(Clone)]
pub struct SessionLoopService {
    clock: Clock,
    subjects: Arc<dyn SubjectRepository>,
}

impl SessionLoopService {
    #[must_use]
    pub fn new(clock: Clock, subjects: Arc<dyn SubjectRepository>) -> Self {
        Self { clock, subjects }
    }

    /// Load the subject's cards and start a session over them.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` when the subject has no cards, or
    /// `SessionError::Storage` if the subject cannot be read.
    pub async fn start_session(&self, key: &SubjectKey) -> Result<SessionService, SessionError> {
        let cards = self.subjects.load_cards(key).await?;
        tracing::info!(subject = %key, cards = cards.len(), "starting session");
        SessionService::start(cards, self.clock)
    }

    /// Start a fresh session over an already loaded card set.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` when `cards` is empty.
    pub fn restart(&self, cards: &[Card]) -> Result<SessionService, SessionError> {
        tracing::info!(cards = cards.len(), "restarting session");
        SessionService::start(cards.to_vec(), self.clock)
    }
}
