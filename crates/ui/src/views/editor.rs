use dioxus::prelude::*;
use dioxus_router::Link;
use study_core::model::CardDraft;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, route_subject_key};

#[derive(Clone, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Saved { total: usize },
    Error(ViewError),
}

/// Add-card form. Validation failures are shown and the input is kept.
#[component]
pub fn AddCardView(key: String) -> Element {
    let ctx = use_context::<AppContext>();
    let mut prompt = use_signal(String::new);
    let mut answer = use_signal(String::new);
    let mut save_state = use_signal(|| SaveState::Idle);
    let subject_key = route_subject_key(&key);
    let subject_label = subject_key
        .as_ref()
        .map(|key| key.display_name())
        .unwrap_or_default();

    let on_save = {
        let subject_key = subject_key.clone();
        move |_: MouseEvent| {
            let key = match subject_key.clone() {
                Ok(key) => key,
                Err(err) => {
                    save_state.set(SaveState::Error(err));
                    return;
                }
            };
            let ctx = ctx.clone();
            let draft = CardDraft::new(prompt(), answer());
            spawn(async move {
                save_state.set(SaveState::Saving);
                match ctx.cards_service().add_card(&key, draft).await {
                    Ok(cards) => {
                        let total = cards.len();
                        ctx.replace_cards(&key, cards);
                        prompt.set(String::new());
                        answer.set(String::new());
                        save_state.set(SaveState::Saved { total });
                    }
                    Err(err) => {
                        tracing::debug!(subject = %key, error = %err, "card not saved");
                        save_state.set(SaveState::Error(err.into()));
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "page editor-page",
            header { class: "view-header",
                h2 { class: "view-title", "Add a new card" }
                p { class: "view-subtitle", "{subject_label}" }
            }
            div { class: "view-divider" }
            if let Err(err) = &subject_key {
                p { class: "view-error", "{err.message()}" }
            } else {
                div { class: "editor-form",
                    label { class: "editor-label", r#for: "editor-prompt", "Question" }
                    input {
                        class: "text-input",
                        id: "editor-prompt",
                        r#type: "text",
                        value: "{prompt}",
                        oninput: move |evt| prompt.set(evt.value()),
                    }
                    label { class: "editor-label", r#for: "editor-answer", "Full answer" }
                    textarea {
                        class: "text-area",
                        id: "editor-answer",
                        rows: "6",
                        value: "{answer}",
                        oninput: move |evt| answer.set(evt.value()),
                    }
                    div { class: "editor-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: save_state() == SaveState::Saving,
                            onclick: on_save,
                            "Save card"
                        }
                        Link { class: "btn btn-ghost", to: Route::AddCard { key: key.clone() }.parent(), "Back to the menu" }
                    }
                    match save_state() {
                        SaveState::Saved { total } => rsx! {
                            p { class: "view-success", "Card saved. The subject now has {total} cards." }
                        },
                        SaveState::Error(err) => rsx! {
                            p { class: "view-error", "{err.message()}" }
                        },
                        SaveState::Saving => rsx! {
                            p { "Saving..." }
                        },
                        SaveState::Idle => rsx! {},
                    }
                }
            }
        }
    }
}
