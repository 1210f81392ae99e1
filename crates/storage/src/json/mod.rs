use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use study_core::model::{Card, Subject, SubjectKey};
use tokio::io::AsyncWriteExt;

use crate::repository::{StorageError, SubjectRepository};

mod mapping;

/// Stores each subject as `<data_dir>/<key>.json`, a flat array of card records.
///
/// Loads are lenient: a missing or unparsable file reads as an empty subject.
/// Appends rewrite the whole file; there is no locking, so a single writer is
/// assumed.
#[derive(Debug, Clone)]
pub struct JsonSubjectRepository {
    data_dir: PathBuf,
}

impl JsonSubjectRepository {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn subject_path(&self, key: &SubjectKey) -> PathBuf {
        self.data_dir.join(key.file_name())
    }
}

#[async_trait]
impl SubjectRepository for JsonSubjectRepository {
    async fn list_subjects(&self) -> Result<Vec<Subject>, StorageError> {
        let mut entries = match tokio::fs::read_dir(&self.data_dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(dir = %self.data_dir.display(), "data directory missing");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if let Some(key) = entry.file_name().to_str().and_then(SubjectKey::from_file_name) {
                keys.push(key);
            }
        }
        keys.sort();

        Ok(keys.into_iter().map(Subject::new).collect())
    }

    async fn load_cards(&self, key: &SubjectKey) -> Result<Vec<Card>, StorageError> {
        let path = self.subject_path(key);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "subject file missing; no cards");
                return Ok(Vec::new());
            }
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                tracing::warn!(path = %path.display(), "subject file is not UTF-8; no cards");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        match mapping::decode_cards(&raw) {
            Some(cards) => {
                tracing::debug!(subject = %key, count = cards.len(), "loaded cards");
                Ok(cards)
            }
            None => {
                tracing::warn!(path = %path.display(), "subject file is malformed; no cards");
                Ok(Vec::new())
            }
        }
    }

    async fn append_card(&self, key: &SubjectKey, card: &Card) -> Result<(), StorageError> {
        let mut cards = self.load_cards(key).await?;
        cards.push(card.clone());

        // Encode fully before touching the file.
        let bytes = mapping::encode_cards(&cards)?;
        tokio::fs::create_dir_all(&self.data_dir).await?;
        tokio::fs::write(self.subject_path(key), bytes).await?;

        tracing::info!(subject = %key, count = cards.len(), "card appended");
        Ok(())
    }

    async fn create_subject(&self, key: &SubjectKey) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        let path = self.subject_path(key);
        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Err(StorageError::AlreadyExists(key.clone()));
            }
            Err(err) => return Err(err.into()),
        };

        file.write_all(&mapping::encode_cards(&[])?).await?;
        file.flush().await?;

        tracing::info!(subject = %key, path = %path.display(), "subject created");
        Ok(())
    }
}
