use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{QuizPhase, QuizSetupInput, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
enum GenerateState {
    Idle,
    Generating(String),
    NoQuestions,
    Error(ViewError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct QuestionFrame {
    phase: QuizPhase,
    progress: String,
    question: String,
    answer: String,
    attempt: String,
    total: usize,
}

impl QuestionFrame {
    fn from_vm(vm: &QuizVm) -> Self {
        Self {
            phase: vm.phase(),
            progress: vm.progress_label(),
            question: vm.question_text().unwrap_or_default().to_owned(),
            answer: vm.answer_text().unwrap_or_default().to_owned(),
            attempt: vm.attempt().to_owned(),
            total: vm.total(),
        }
    }
}

/// Quiz setup form and runner. The runner only opens when questions came back.
#[component]
pub fn QuizView(key: String) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();
    let run = use_signal(|| None::<QuizVm>);
    let menu = Route::Quiz { key: key.clone() }.parent();

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(run);
            }
        }
    }

    if !quiz.enabled() {
        return rsx! {
            div { class: "page quiz-page",
                header { class: "view-header",
                    h2 { class: "view-title", "AI quiz from a PDF" }
                }
                div { class: "view-divider" }
                p { class: "view-error", "{ViewError::QuizDisabled.message()}" }
                Link { class: "btn btn-ghost", to: menu, "Back to the menu" }
            }
        };
    }

    let frame = run.read().as_ref().map(QuestionFrame::from_vm);
    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "AI quiz from a PDF" }
            }
            div { class: "view-divider" }
            match frame {
                Some(frame) => rsx! {
                    QuizRunner { frame, run, menu: menu.clone() }
                },
                None => rsx! {
                    QuizSetupForm { run, menu: menu.clone() }
                },
            }
        }
    }
}

#[component]
fn QuizSetupForm(run: Signal<Option<QuizVm>>, menu: Route) -> Element {
    let ctx = use_context::<AppContext>();
    let mut document = use_signal(String::new);
    let mut start_page = use_signal(|| "1".to_owned());
    let mut end_page = use_signal(|| "10".to_owned());
    let mut question_count = use_signal(|| "10".to_owned());
    let mut generate_state = use_signal(|| GenerateState::Idle);

    let on_generate = move |_: MouseEvent| {
        let input = QuizSetupInput {
            document: document(),
            start_page: start_page(),
            end_page: end_page(),
            question_count: question_count(),
        };
        let (path, request) = match input.parse() {
            Ok(parsed) => parsed,
            Err(err) => {
                generate_state.set(GenerateState::Error(err.into()));
                return;
            }
        };

        let quiz = ctx.quiz();
        let mut run = run;
        generate_state.set(GenerateState::Generating(format!(
            "Generating {} questions from pages {}-{}...",
            request.question_count(),
            request.start_page(),
            request.end_page()
        )));
        spawn(async move {
            match quiz.generate(&path, request).await {
                Ok(outcome) => match QuizVm::from_outcome(outcome) {
                    Some(vm) => {
                        generate_state.set(GenerateState::Idle);
                        run.set(Some(vm));
                    }
                    None => generate_state.set(GenerateState::NoQuestions),
                },
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "quiz generation failed");
                    generate_state.set(GenerateState::Error(err.into()));
                }
            }
        });
    };

    let busy = matches!(generate_state(), GenerateState::Generating(_));
    rsx! {
        div { class: "quiz-form",
            label { class: "quiz-label", r#for: "quiz-document", "PDF file" }
            input {
                class: "text-input",
                id: "quiz-document",
                r#type: "text",
                placeholder: "Path to the document",
                value: "{document}",
                oninput: move |evt| document.set(evt.value()),
            }
            div { class: "quiz-range",
                label { class: "quiz-label", r#for: "quiz-start", "From page" }
                input {
                    class: "text-input text-input--short",
                    id: "quiz-start",
                    r#type: "text",
                    value: "{start_page}",
                    oninput: move |evt| start_page.set(evt.value()),
                }
                label { class: "quiz-label", r#for: "quiz-end", "To page" }
                input {
                    class: "text-input text-input--short",
                    id: "quiz-end",
                    r#type: "text",
                    value: "{end_page}",
                    oninput: move |evt| end_page.set(evt.value()),
                }
                label { class: "quiz-label", r#for: "quiz-count", "Number of questions" }
                input {
                    class: "text-input text-input--short",
                    id: "quiz-count",
                    r#type: "text",
                    value: "{question_count}",
                    oninput: move |evt| question_count.set(evt.value()),
                }
            }
            div { class: "quiz-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy,
                    onclick: on_generate,
                    "Generate quiz"
                }
                Link { class: "btn btn-ghost", to: menu, "Back to the menu" }
            }
            match generate_state() {
                GenerateState::Generating(label) => rsx! {
                    p { class: "view-hint", "{label}" }
                },
                GenerateState::NoQuestions => rsx! {
                    p { class: "view-hint", "The AI could not generate any questions from this text." }
                },
                GenerateState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                },
                GenerateState::Idle => rsx! {},
            }
        }
    }
}

#[component]
fn QuizRunner(frame: QuestionFrame, run: Signal<Option<QuizVm>>, menu: Route) -> Element {
    let mut run = run;
    rsx! {
        div { class: "quiz-runner",
            match frame.phase {
                QuizPhase::Question => rsx! {
                    p { class: "session-progress", "{frame.progress}" }
                    div { class: "session-question",
                        p { class: "session-text", "{frame.question}" }
                    }
                    label { class: "quiz-label", r#for: "quiz-attempt", "Your answer (optional)" }
                    textarea {
                        class: "text-area",
                        id: "quiz-attempt",
                        rows: "3",
                        value: "{frame.attempt}",
                        oninput: move |evt| {
                            if let Some(vm) = run.write().as_mut() {
                                vm.set_attempt(evt.value());
                            }
                        },
                    }
                    div { class: "quiz-actions",
                        button {
                            class: "btn btn-primary",
                            id: "quiz-reveal",
                            r#type: "button",
                            onclick: move |_| {
                                if let Some(vm) = run.write().as_mut() {
                                    vm.reveal();
                                }
                            },
                            "Show answer"
                        }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| run.set(None),
                            "End quiz"
                        }
                    }
                },
                QuizPhase::Answer => rsx! {
                    p { class: "session-progress", "{frame.progress}" }
                    div { class: "session-question",
                        p { class: "session-text", "{frame.question}" }
                    }
                    if !frame.attempt.trim().is_empty() {
                        div { class: "quiz-attempt",
                            span { class: "quiz-attempt__label", "Your answer: " }
                            span { "{frame.attempt}" }
                        }
                    }
                    div { class: "session-answer",
                        p { class: "session-text", "{frame.answer}" }
                    }
                    div { class: "quiz-actions",
                        button {
                            class: "btn btn-primary",
                            id: "quiz-next",
                            r#type: "button",
                            onclick: move |_| {
                                if let Some(vm) = run.write().as_mut() {
                                    vm.next();
                                }
                            },
                            "Next question"
                        }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| run.set(None),
                            "End quiz"
                        }
                    }
                },
                QuizPhase::Finished => rsx! {
                    div { class: "session-summary session-summary--clean",
                        h3 { class: "session-summary__title", "Quiz completed!" }
                        p { class: "session-summary__header", "You went through all {frame.total} questions." }
                        div { class: "session-summary__actions",
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| run.set(None),
                                "New quiz"
                            }
                            Link { class: "btn btn-ghost", to: menu, "Back to the menu" }
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    run: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, run: Signal<Option<QuizVm>>) {
        *self.run.borrow_mut() = Some(run);
    }

    pub(crate) fn run(&self) -> Signal<Option<QuizVm>> {
        (*self.run.borrow()).expect("quiz run registered")
    }
}
