use std::sync::Arc;

use services::{CardService, SubjectService, SubjectServiceError, filter_cards};
use storage::repository::Storage;
use study_core::model::{Card, CardDraft};

#[tokio::test]
async fn create_subject_add_cards_and_search() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::json(dir.path().join("data"));
    let subjects = SubjectService::new(Arc::clone(&storage.subjects));
    let cards = CardService::new(Arc::clone(&storage.subjects));

    let subject = subjects.create_subject("Cell Biology").await.expect("create subject");
    assert!(dir.path().join("data/cell_biology.json").is_file());

    cards
        .add_card(subject.key(), CardDraft::new("What is a cell?", "The basic unit of life."))
        .await
        .expect("add first card");
    let set = cards
        .add_card(subject.key(), CardDraft::new("What do ribosomes do?", "Build proteins."))
        .await
        .expect("add second card");
    assert_eq!(set.len(), 2);

    let reopened = subjects.open_subject(subject.key()).await.expect("reopen");
    assert_eq!(reopened, set);
    assert_eq!(reopened[0], Card::new("What is a cell?", "The basic unit of life."));

    let hits = filter_cards(&reopened, "RIBO");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].answer(), "Build proteins.");

    let listed = subjects.list_subjects().await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].display_name(), "Cell_biology");
}

#[tokio::test]
async fn creating_an_existing_subject_keeps_its_cards() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::json(dir.path());
    let subjects = SubjectService::new(Arc::clone(&storage.subjects));
    let cards = CardService::new(Arc::clone(&storage.subjects));

    let subject = subjects.create_subject("physics").await.unwrap();
    cards
        .add_card(subject.key(), CardDraft::new("F = ?", "m * a"))
        .await
        .unwrap();

    let err = subjects.create_subject("Physics").await.unwrap_err();
    assert!(matches!(err, SubjectServiceError::AlreadyExists { .. }));
    assert_eq!(cards.list_cards(subject.key()).await.unwrap().len(), 1);
}
