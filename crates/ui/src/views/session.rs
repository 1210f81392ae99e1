use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, route_subject_key, view_state_from_resource};
use crate::vm::{Feedback, SessionPhase, SessionVm, start_session};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SessionIntent {
    Reveal,
    Answer(Feedback),
    Restart,
}

/// Owned copy of what the current phase needs, so no borrow of the session is
/// held while rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
struct CardFrame {
    progress: String,
    prompt: String,
    answer: String,
    summary_header: String,
    missed: Vec<String>,
    elapsed: String,
}

impl CardFrame {
    fn from_vm(vm: &SessionVm) -> Self {
        let summary_text = vm.summary_text();
        Self {
            progress: vm.progress_label(),
            prompt: vm.prompt_text().unwrap_or_default().to_owned(),
            answer: vm.answer_text().unwrap_or_default().to_owned(),
            summary_header: summary_text.lines().next().unwrap_or_default().to_owned(),
            missed: vm.missed().iter().map(|card| card.prompt().to_owned()).collect(),
            elapsed: vm.elapsed_label(),
        }
    }
}

#[component]
pub fn SessionView(key: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let session_loop = ctx.session_loop();
    let vm = use_signal(|| None::<SessionVm>);
    let subject_label = route_subject_key(&key)
        .map(|key| key.display_name())
        .unwrap_or_default();

    let route_key = key.clone();
    let resource = use_resource(move || {
        let session_loop = session_loop.clone();
        let route_key = route_key.clone();
        let mut vm = vm;
        async move {
            vm.set(None);
            let key = route_subject_key(&route_key)?;
            let started = start_session(&session_loop, &key).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });

    let dispatch_intent = use_callback(move |intent: SessionIntent| {
        let mut vm = vm;
        match intent {
            SessionIntent::Reveal => {
                if let Some(vm) = vm.write().as_mut() {
                    vm.reveal();
                }
            }
            SessionIntent::Answer(feedback) => {
                if let Some(vm) = vm.write().as_mut() {
                    vm.feedback(feedback);
                }
            }
            SessionIntent::Restart => {
                // Reuse the card set loaded with the subject; reload only when there is none.
                match ctx.session_loop().restart(&ctx.cards()) {
                    Ok(session) => vm.set(Some(SessionVm::new(session))),
                    Err(err) => {
                        tracing::debug!(error = %err, "no loaded cards, reloading subject");
                        let mut resource = resource;
                        resource.restart();
                    }
                }
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SessionTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let state = view_state_from_resource(&resource);
    let frame = vm.read().as_ref().map(|vm| (vm.phase(), CardFrame::from_vm(vm)));
    let menu = Route::Session { key: key.clone() }.parent();

    rsx! {
        div { class: "page session-page",
            header { class: "view-header",
                div { class: "view-heading",
                    h2 { class: "view-title", "Flashcards" }
                    p { class: "view-subtitle", "{subject_label}" }
                }
                button {
                    class: "btn btn-ghost",
                    id: "session-quit",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(menu.clone());
                    },
                    "End session"
                }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err @ ViewError::EmptySubject) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                    Link { class: "btn btn-secondary", to: Route::AddCard { key: key.clone() }, "Add cards" }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(()) => rsx! {
                    match frame {
                        Some((SessionPhase::Prompt, frame)) => rsx! {
                            p { class: "session-progress", "{frame.progress}" }
                            div { class: "session-question",
                                p { class: "session-text", "{frame.prompt}" }
                            }
                            button {
                                class: "btn btn-primary",
                                id: "session-reveal",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(SessionIntent::Reveal),
                                "Show answer"
                            }
                        },
                        Some((SessionPhase::Answer, frame)) => rsx! {
                            p { class: "session-progress", "{frame.progress}" }
                            div { class: "session-question",
                                p { class: "session-text", "{frame.prompt}" }
                            }
                            div { class: "session-answer",
                                p { class: "session-text", "{frame.answer}" }
                            }
                            p { class: "session-remember", "Did you know it?" }
                            div { class: "session-feedback",
                                button {
                                    class: "btn session-knew",
                                    id: "session-knew",
                                    r#type: "button",
                                    onclick: move |_| dispatch_intent.call(SessionIntent::Answer(Feedback::Knew)),
                                    "I knew it"
                                }
                                button {
                                    class: "btn session-missed",
                                    id: "session-missed",
                                    r#type: "button",
                                    onclick: move |_| dispatch_intent.call(SessionIntent::Answer(Feedback::Missed)),
                                    "I didn't know it"
                                }
                            }
                        },
                        Some((SessionPhase::Finished, frame)) => rsx! {
                            SessionSummary {
                                frame,
                                on_restart: move |_| dispatch_intent.call(SessionIntent::Restart),
                                menu: Route::Session { key: key.clone() }.parent(),
                            }
                        },
                        None => rsx! {
                            p { "No cards available." }
                        },
                    }
                },
            }
        }
    }
}

#[component]
fn SessionSummary(frame: CardFrame, on_restart: EventHandler<()>, menu: Route) -> Element {
    let class = if frame.missed.is_empty() {
        "session-summary session-summary--clean"
    } else {
        "session-summary"
    };

    rsx! {
        div { class: "{class}",
            h3 { class: "session-summary__title", "Session finished!" }
            p { class: "session-summary__header", "{frame.summary_header}" }
            if !frame.missed.is_empty() {
                ul { class: "session-summary__missed",
                    for line in frame.missed.iter() {
                        li { "{line}" }
                    }
                }
            }
            p { class: "session-summary__elapsed", "{frame.elapsed}" }
            div { class: "session-summary__actions",
                button {
                    class: "btn btn-primary",
                    id: "session-restart",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Restart session"
                }
                Link { class: "btn btn-ghost", to: menu, "Back to the menu" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SessionTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SessionIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<SessionVm>>>>>,
}

#[cfg(test)]
impl SessionTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<SessionIntent>,
        vm: Signal<Option<SessionVm>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<SessionIntent> {
        (*self.dispatch.borrow()).expect("session dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<SessionVm>> {
        (*self.vm.borrow()).expect("session vm registered")
    }
}
