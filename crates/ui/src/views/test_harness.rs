use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::quiz::{DocumentReader, QuizBackend};
use services::{AppServices, Clock, QuizError, QuizService};
use storage::repository::{Storage, SubjectRepository};
use study_core::model::{Card, QuizRequest, SubjectKey};
use study_core::time::fixed_now;

use crate::context::AppContext;
use crate::views::quiz::QuizTestHandles;
use crate::views::session::SessionTestHandles;
use crate::views::{
    AddCardView, BrowseView, QuizView, SessionView, SubjectMenuView, SubjectPickerView,
};

pub const SUBJECT: &str = "history";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Picker,
    Menu,
    Session,
    AddCard,
    Browse,
    Quiz,
}

struct FakeReader;

impl DocumentReader for FakeReader {
    fn extract_pages(&self, _path: &Path, _request: &QuizRequest) -> Result<String, QuizError> {
        Ok("The Battle of Hastings was fought in 1066.".to_owned())
    }
}

struct FakeBackend;

#[async_trait]
impl QuizBackend for FakeBackend {
    async fn complete(&self, _prompt: &str) -> Result<String, QuizError> {
        Ok(r#"[{"question": "When was Hastings?", "answer": "1066"}]"#.to_owned())
    }
}

/// Quiz service that is configured but never leaves the process.
pub fn fake_quiz() -> QuizService {
    QuizService::new(Some(Arc::new(FakeBackend)), Arc::new(FakeReader))
}

pub fn disabled_quiz() -> QuizService {
    QuizService::new(None, Arc::new(FakeReader))
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    view: ViewKind,
    session_handles: Option<SessionTestHandles>,
    quiz_handles: Option<QuizTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let context = props.context.clone();
    use_context_provider(|| context);
    use_context_provider(|| props.view);
    if let Some(handles) = props.session_handles.clone() {
        use_context_provider(|| handles);
    }
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let key = SUBJECT.to_owned();
    match view {
        ViewKind::Picker => rsx! { SubjectPickerView {} },
        ViewKind::Menu => rsx! { SubjectMenuView { key } },
        ViewKind::Session => rsx! { SessionView { key } },
        ViewKind::AddCard => rsx! { AddCardView { key } },
        ViewKind::Browse => rsx! { BrowseView { key } },
        ViewKind::Quiz => rsx! { QuizView { key } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub context: AppContext,
    pub session_handles: Option<SessionTestHandles>,
    pub quiz_handles: Option<QuizTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Run `f` where signals and callbacks of the dom can be touched.
    pub fn in_runtime<O>(&mut self, f: impl FnOnce() -> O) -> O {
        let out = self.dom.in_runtime(f);
        drive_dom(&mut self.dom);
        out
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness over an in-memory store holding the subject `history` with `cards`.
pub async fn setup_view_harness(view: ViewKind, cards: &[Card], quiz: QuizService) -> ViewHarness {
    let storage = Storage::in_memory();
    let key = SubjectKey::from_stem(SUBJECT).expect("valid subject key");
    storage
        .subjects
        .create_subject(&key)
        .await
        .expect("create subject");
    for card in cards {
        storage
            .subjects
            .append_card(&key, card)
            .await
            .expect("append card");
    }

    let services = AppServices::from_parts(
        PathBuf::from("data"),
        &storage,
        Clock::fixed(fixed_now()),
        quiz,
    );
    let context = AppContext::new(services);
    let session_handles = match view {
        ViewKind::Session => Some(SessionTestHandles::default()),
        _ => None,
    };
    let quiz_handles = match view {
        ViewKind::Quiz => Some(QuizTestHandles::default()),
        _ => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            context: context.clone(),
            view,
            session_handles: session_handles.clone(),
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        context,
        session_handles,
        quiz_handles,
    }
}
