use storage::repository::SubjectRepository;
use study_core::model::{Card, QuizQuestion, SubjectKey};

use super::session::SessionIntent;
use super::test_harness::{ViewKind, disabled_quiz, fake_quiz, setup_view_harness};
use crate::vm::{Feedback, QuizVm};

fn hastings() -> Vec<Card> {
    vec![Card::new("1066?", "Battle of Hastings")]
}

#[tokio::test(flavor = "current_thread")]
async fn picker_view_smoke_lists_subjects() {
    let mut harness = setup_view_harness(ViewKind::Picker, &[], disabled_quiz()).await;
    let biology = SubjectKey::from_display_name("biology").unwrap();
    harness
        .storage
        .subjects
        .create_subject(&biology)
        .await
        .expect("create subject");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("History"), "missing History in {html}");
    assert!(html.contains("Biology"), "missing Biology in {html}");
    assert!(html.contains("Add a new subject"), "missing create form in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_renders_card_count() {
    let cards = vec![Card::new("a", "b"), Card::new("c", "d")];
    let mut harness = setup_view_harness(ViewKind::Menu, &cards, disabled_quiz()).await;

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Subject: History"), "missing title in {html}");
    assert!(html.contains("2 cards"), "missing count in {html}");
    assert!(html.contains("1. Start flashcards"), "missing menu in {html}");
    assert_eq!(harness.context.cards().len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_reveals_and_finishes() {
    let mut harness = setup_view_harness(ViewKind::Session, &hastings(), disabled_quiz()).await;
    let handles = harness.session_handles.clone().expect("session handles");

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("1066?"), "missing prompt in {html}");
    assert!(html.contains("Show answer"), "missing reveal button in {html}");
    assert!(!html.contains("Battle of Hastings"), "answer shown early in {html}");

    harness.in_runtime(|| handles.dispatch().call(SessionIntent::Reveal));
    let html = harness.render();
    assert!(html.contains("Battle of Hastings"), "missing answer in {html}");
    assert!(html.contains("I knew it"), "missing feedback in {html}");

    harness.in_runtime(|| handles.dispatch().call(SessionIntent::Answer(Feedback::Missed)));
    let html = harness.render();
    assert!(html.contains("Session finished!"), "missing summary in {html}");
    assert!(html.contains("1066?"), "missing missed card in {html}");
    assert!(harness.in_runtime(|| handles.vm().read().is_some()));
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_reports_empty_subject() {
    let mut harness = setup_view_harness(ViewKind::Session, &[], disabled_quiz()).await;

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No cards to study"), "missing empty message in {html}");
    assert!(html.contains("Add cards"), "missing add link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn add_card_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::AddCard, &[], disabled_quiz()).await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Add a new card"), "missing title in {html}");
    assert!(html.contains("Full answer"), "missing answer field in {html}");
    assert!(html.contains("Save card"), "missing save button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn browse_view_smoke_lists_questions() {
    let cards = vec![Card::new("1066?", "Hastings"), Card::new("1815?", "Waterloo")];
    let mut harness = setup_view_harness(ViewKind::Browse, &cards, disabled_quiz()).await;

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("1066?"), "missing first question in {html}");
    assert!(html.contains("1815?"), "missing second question in {html}");
    assert!(!html.contains("Waterloo"), "answer shown before selection in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn browse_view_smoke_reports_empty_subject() {
    let mut harness = setup_view_harness(ViewKind::Browse, &[], disabled_quiz()).await;

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("No questions in the database for this subject."),
        "missing empty message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_without_api_key() {
    let mut harness = setup_view_harness(ViewKind::Quiz, &hastings(), disabled_quiz()).await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("GEMINI_API_KEY"), "missing configuration hint in {html}");
    assert!(!html.contains("Generate quiz"), "setup form shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_setup_form() {
    let mut harness = setup_view_harness(ViewKind::Quiz, &hastings(), fake_quiz()).await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Generate quiz"), "missing generate button in {html}");
    assert!(html.contains("PDF file"), "missing document field in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_takes_an_answer_before_revealing() {
    let mut harness = setup_view_harness(ViewKind::Quiz, &hastings(), fake_quiz()).await;
    let handles = harness.quiz_handles.clone().expect("quiz handles");
    harness.rebuild();

    harness.in_runtime(|| {
        let mut run = handles.run();
        run.set(Some(QuizVm::new(vec![QuizQuestion::new("When was Hastings?", "1066")])));
    });
    let html = harness.render();
    assert!(html.contains("When was Hastings?"), "missing question in {html}");
    assert!(html.contains("Your answer (optional)"), "missing answer field in {html}");
    assert!(!html.contains("1066"), "answer shown early in {html}");

    harness.in_runtime(|| {
        let mut run = handles.run();
        if let Some(vm) = run.write().as_mut() {
            vm.set_attempt("1067");
            vm.reveal();
        }
    });
    let html = harness.render();
    assert!(html.contains("Your answer: "), "missing attempt label in {html}");
    assert!(html.contains("1067"), "missing attempt in {html}");
    assert!(html.contains("1066"), "missing correct answer in {html}");

    harness.in_runtime(|| {
        let mut run = handles.run();
        if let Some(vm) = run.write().as_mut() {
            vm.next();
        }
    });
    let html = harness.render();
    assert!(html.contains("Quiz completed!"), "missing completion in {html}");
}
