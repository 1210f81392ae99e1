use std::sync::Arc;

use storage::repository::{StorageError, SubjectRepository};
use study_core::model::{Card, Subject, SubjectKey};

use crate::error::SubjectServiceError;

/// Lists, creates, and opens subjects.
#[derive(Clone)]
pub struct SubjectService {
    subjects: Arc<dyn SubjectRepository>,
}

impl SubjectService {
    #[must_use]
    pub fn new(subjects: Arc<dyn SubjectRepository>) -> Self {
        Self { subjects }
    }

    /// # Errors
    ///
    /// Returns `SubjectServiceError::Storage` if the store cannot be read.
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, SubjectServiceError> {
        Ok(self.subjects.list_subjects().await?)
    }

    /// Create an empty subject from a user-entered name.
    ///
    /// # Errors
    ///
    /// Returns `SubjectServiceError::Subject` for an invalid name,
    /// `SubjectServiceError::AlreadyExists` if the subject is taken, or
    /// `SubjectServiceError::Storage` if the file cannot be written.
    pub async fn create_subject(&self, name: &str) -> Result<Subject, SubjectServiceError> {
        let key = SubjectKey::from_display_name(name)?;
        match self.subjects.create_subject(&key).await {
            Ok(()) => Ok(Subject::new(key)),
            Err(StorageError::AlreadyExists(key)) => Err(SubjectServiceError::AlreadyExists {
                name: key.display_name(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    /// Load the current card set of a subject. Called on every open so edits made
    /// outside the app are picked up.
    ///
    /// # Errors
    ///
    /// Returns `SubjectServiceError::Storage` for read failures other than a
    /// missing or malformed file.
    pub async fn open_subject(&self, key: &SubjectKey) -> Result<Vec<Card>, SubjectServiceError> {
        let cards = self.subjects.load_cards(key).await?;
        tracing::debug!(subject = %key, cards = cards.len(), "subject opened");
        Ok(cards)
    }
}
