use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, route_subject_key, view_state_from_resource};
use crate::vm::{BrowseItem, BrowseVm};

/// Search questions by prompt and read their answers.
#[component]
pub fn BrowseView(key: String) -> Element {
    let ctx = use_context::<AppContext>();
    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| None::<BrowseItem>);

    let route_key = key.clone();
    let resource = use_resource(move || {
        let ctx = ctx.clone();
        let route_key = route_key.clone();
        async move {
            let key = route_subject_key(&route_key)?;
            let cards = ctx.cards_service().list_cards(&key).await?;
            ctx.replace_cards(&key, cards.clone());
            Ok::<_, ViewError>(BrowseVm::new(cards))
        }
    });

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page browse-page",
            header { class: "view-header",
                h2 { class: "view-title", "Browse questions" }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                },
                ViewState::Ready(vm) if vm.is_empty() => rsx! {
                    p { class: "view-hint", "No questions in the database for this subject." }
                },
                ViewState::Ready(mut vm) => {
                    vm.set_term(search());
                    let items = vm.items();
                    let result_label = vm.result_label();
                    rsx! {
                        div { class: "browse-search",
                            input {
                                class: "text-input",
                                r#type: "text",
                                placeholder: "Search questions...",
                                value: "{search}",
                                oninput: move |evt| {
                                    search.set(evt.value());
                                    selected.set(None);
                                },
                            }
                            if !search().is_empty() {
                                button {
                                    class: "btn btn-ghost",
                                    r#type: "button",
                                    onclick: move |_| search.set(String::new()),
                                    "Clear"
                                }
                            }
                        }
                        p { class: "browse-count", "{result_label}" }
                        div { class: "browse-layout",
                            ul { class: "browse-list",
                                for item in items {
                                    BrowseRow { item, selected }
                                }
                            }
                            if let Some(item) = selected() {
                                div { class: "browse-detail",
                                    h3 { class: "browse-detail__question", "{item.prompt}" }
                                    p { class: "browse-detail__answer", "{item.answer}" }
                                }
                            }
                        }
                    }
                }
            }
            Link { class: "btn btn-ghost", to: Route::Browse { key: key.clone() }.parent(), "Back to the menu" }
        }
    }
}

#[component]
fn BrowseRow(item: BrowseItem, selected: Signal<Option<BrowseItem>>) -> Element {
    let is_selected = selected.read().as_ref() == Some(&item);
    let class = if is_selected {
        "browse-item browse-item--selected"
    } else {
        "browse-item"
    };
    let preview = item.preview.clone();
    rsx! {
        li {
            button {
                class: "{class}",
                r#type: "button",
                onclick: move |_| {
                    let mut selected = selected;
                    selected.set(Some(item.clone()));
                },
                "{preview}"
            }
        }
    }
}
