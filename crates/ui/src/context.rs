use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use services::{AppServices, CardService, QuizService, SessionLoopService, SubjectService};
use study_core::model::{Card, Subject, SubjectKey};

use crate::views::ViewError;

/// A subject together with the cards loaded when it was opened.
#[derive(Clone, Debug)]
pub struct OpenSubject {
    subject: Subject,
    cards: Vec<Card>,
}

impl OpenSubject {
    #[must_use]
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// State of one run of the app, provided to every view.
///
/// Clones share the open subject, so a card added in one view is what the
/// session view restarts over.
#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
    open: Arc<Mutex<Option<OpenSubject>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(services: AppServices) -> Self {
        Self {
            services,
            open: Arc::new(Mutex::new(None)),
        }
    }

    fn open_guard(&self) -> MutexGuard<'_, Option<OpenSubject>> {
        self.open.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    #[must_use]
    pub fn subjects(&self) -> Arc<SubjectService> {
        self.services.subjects()
    }

    #[must_use]
    pub fn cards_service(&self) -> Arc<CardService> {
        self.services.cards()
    }

    #[must_use]
    pub fn session_loop(&self) -> Arc<SessionLoopService> {
        self.services.session_loop()
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    /// Load the subject from storage and make it current.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Storage` if the subject cannot be read.
    pub async fn open_subject(&self, key: &SubjectKey) -> Result<OpenSubject, ViewError> {
        let cards = self.services.subjects().open_subject(key).await?;
        tracing::debug!(subject = %key, cards = cards.len(), "subject opened");
        let open = OpenSubject {
            subject: Subject::new(key.clone()),
            cards,
        };
        *self.open_guard() = Some(open.clone());
        Ok(open)
    }

    pub fn close_subject(&self) {
        *self.open_guard() = None;
    }

    /// Cards of the open subject; empty when none is open.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.open_guard()
            .as_ref()
            .map(|open| open.cards.clone())
            .unwrap_or_default()
    }

    /// Replace the card set of `key` if it is the open subject.
    pub fn replace_cards(&self, key: &SubjectKey, cards: Vec<Card>) {
        if let Some(open) = self.open_guard().as_mut() {
            if open.subject.key() == key {
                open.cards = cards;
            }
        }
    }
}
