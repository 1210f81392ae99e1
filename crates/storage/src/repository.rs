use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use study_core::model::{Card, Subject, SubjectKey};
use thiserror::Error;

use crate::json::JsonSubjectRepository;

/// Errors surfaced by storage adapters.
///
/// A missing or malformed subject file is not an error: loads fall back to an
/// empty card set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("subject already exists: {0}")]
    AlreadyExists(SubjectKey),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("lock error: {0}")]
    Lock(String),
}

/// Repository contract for per-subject card sets.
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// List every subject the store knows about, ordered by key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store exists but cannot be read.
    async fn list_subjects(&self) -> Result<Vec<Subject>, StorageError>;

    /// Load the cards of a subject in stored order.
    ///
    /// Missing or malformed subjects yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` only for read failures other than a missing file.
    async fn load_cards(&self, key: &SubjectKey) -> Result<Vec<Card>, StorageError>;

    /// Append one card to a subject, rewriting the stored set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the set cannot be serialized or written.
    async fn append_card(&self, key: &SubjectKey, card: &Card) -> Result<(), StorageError>;

    /// Create a subject with no cards.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::AlreadyExists` if the key is taken.
    async fn create_subject(&self, key: &SubjectKey) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    subjects: Arc<Mutex<BTreeMap<SubjectKey, Vec<Card>>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<SubjectKey, Vec<Card>>>, StorageError> {
        self.subjects
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))
    }
}

#[async_trait]
impl SubjectRepository for InMemoryRepository {
    async fn list_subjects(&self) -> Result<Vec<Subject>, StorageError> {
        let guard = self.lock()?;
        Ok(guard.keys().cloned().map(Subject::new).collect())
    }

    async fn load_cards(&self, key: &SubjectKey) -> Result<Vec<Card>, StorageError> {
        let guard = self.lock()?;
        Ok(guard.get(key).cloned().unwrap_or_default())
    }

    async fn append_card(&self, key: &SubjectKey, card: &Card) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        guard.entry(key.clone()).or_default().push(card.clone());
        Ok(())
    }

    async fn create_subject(&self, key: &SubjectKey) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        if guard.contains_key(key) {
            return Err(StorageError::AlreadyExists(key.clone()));
        }
        guard.insert(key.clone(), Vec::new());
        Ok(())
    }
}

/// Aggregates the subject repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub subjects: Arc<dyn SubjectRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            subjects: Arc::new(InMemoryRepository::new()),
        }
    }

    /// File-backed storage rooted at `data_dir`, one JSON file per subject.
    #[must_use]
    pub fn json(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            subjects: Arc::new(JsonSubjectRepository::new(data_dir)),
        }
    }
}
