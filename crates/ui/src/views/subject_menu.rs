use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, route_subject_key, view_state_from_resource};

#[derive(Clone, Debug, PartialEq, Eq)]
struct MenuData {
    title: String,
    card_count: usize,
}

impl MenuData {
    fn count_label(&self) -> String {
        match self.card_count {
            1 => "1 card".to_owned(),
            n => format!("{n} cards"),
        }
    }
}

/// Opens the subject (reloading its cards) and offers the study actions.
#[component]
pub fn SubjectMenuView(key: String) -> Element {
    let ctx = use_context::<AppContext>();
    let route_key = key.clone();
    let resource = use_resource(move || {
        let ctx = ctx.clone();
        let route_key = route_key.clone();
        async move {
            let key = route_subject_key(&route_key)?;
            let open = ctx.open_subject(&key).await?;
            Ok::<_, ViewError>(MenuData {
                title: open.subject().display_name().to_owned(),
                card_count: open.cards().len(),
            })
        }
    });

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page menu-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                    Link { class: "btn btn-secondary", to: Route::SubjectPicker {}, "Back to subjects" }
                },
                ViewState::Ready(data) => rsx! {
                    header { class: "view-header",
                        h2 { class: "view-title", "Subject: {data.title}" }
                        p { class: "view-subtitle", "{data.count_label()}" }
                    }
                    div { class: "view-divider" }
                    nav { class: "menu-actions",
                        Link { class: "btn btn-primary", to: Route::Session { key: key.clone() }, "1. Start flashcards" }
                        Link { class: "btn", to: Route::AddCard { key: key.clone() }, "2. Add a new card" }
                        Link { class: "btn", to: Route::Browse { key: key.clone() }, "3. Browse questions" }
                        Link { class: "btn", to: Route::Quiz { key: key.clone() }, "4. AI quiz from a PDF" }
                        Link { class: "btn btn-ghost", to: Route::SubjectPicker {}, "Back to subjects" }
                    }
                },
            }
        }
    }
}
