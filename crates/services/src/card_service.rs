use std::sync::Arc;

use storage::repository::SubjectRepository;
use study_core::model::{Card, CardDraft, SubjectKey};

use crate::error::CardServiceError;

/// Orchestrates card creation and persistence.
#[derive(Clone)]
pub struct CardService {
    subjects: Arc<dyn SubjectRepository>,
}

impl CardService {
    #[must_use]
    pub fn new(subjects: Arc<dyn SubjectRepository>) -> Self {
        Self { subjects }
    }

    /// Validate a draft, append it to the subject, and return the reloaded set.
    ///
    /// Nothing is written when validation fails.
    ///
    /// # Errors
    ///
    /// Returns `CardServiceError::Card` for blank fields.
    /// Returns `CardServiceError::Storage` if persistence fails.
    pub async fn add_card(
        &self,
        key: &SubjectKey,
        draft: CardDraft,
    ) -> Result<Vec<Card>, CardServiceError> {
        let card = draft.validate()?;
        self.subjects.append_card(key, &card).await?;
        Ok(self.subjects.load_cards(key).await?)
    }

    /// # Errors
    ///
    /// Returns `CardServiceError::Storage` if the subject cannot be read.
    pub async fn list_cards(&self, key: &SubjectKey) -> Result<Vec<Card>, CardServiceError> {
        Ok(self.subjects.load_cards(key).await?)
    }
}

/// Cards whose prompt contains `term`, ignoring case, in stored order.
/// A blank term matches everything.
#[must_use]
pub fn filter_cards<'a>(cards: &'a [Card], term: &str) -> Vec<&'a Card> {
    let needle = term.trim().to_lowercase();
    cards
        .iter()
        .filter(|card| card.prompt().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;
    use study_core::model::CardError;

    fn key() -> SubjectKey {
        SubjectKey::from_display_name("biology").unwrap()
    }

    #[tokio::test]
    async fn add_card_returns_reloaded_set() {
        let service = CardService::new(Arc::new(InMemoryRepository::new()));
        service
            .add_card(&key(), CardDraft::new("Q1", "A1"))
            .await
            .unwrap();
        let cards = service
            .add_card(&key(), CardDraft::new(" Q2 ", " A2 "))
            .await
            .unwrap();

        assert_eq!(cards, vec![Card::new("Q1", "A1"), Card::new("Q2", "A2")]);
    }

    #[tokio::test]
    async fn invalid_draft_writes_nothing() {
        let service = CardService::new(Arc::new(InMemoryRepository::new()));
        let err = service
            .add_card(&key(), CardDraft::new("Q", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, CardServiceError::Card(CardError::EmptyAnswer)));
        assert!(service.list_cards(&key()).await.unwrap().is_empty());
    }

    #[test]
    fn filter_is_case_insensitive_and_keeps_order() {
        let cards = vec![
            Card::new("Cell membrane", "a"),
            Card::new("Mitochondria", "b"),
            Card::new("cell wall", "c"),
        ];

        let found: Vec<_> = filter_cards(&cards, "CELL").iter().map(|c| c.prompt()).collect();
        assert_eq!(found, vec!["Cell membrane", "cell wall"]);
        assert_eq!(filter_cards(&cards, "").len(), 3);
        assert!(filter_cards(&cards, "ribosome").is_empty());
    }
}
