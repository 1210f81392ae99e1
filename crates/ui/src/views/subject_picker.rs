use dioxus::prelude::*;
use dioxus_router::Link;
use study_core::model::Subject;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Notice {
    Created(String),
    Failed(ViewError),
}

/// Lists subject files and creates new ones.
#[component]
pub fn SubjectPickerView() -> Element {
    let ctx = use_context::<AppContext>();
    let data_dir = ctx.services().data_dir().display().to_string();
    let mut new_name = use_signal(String::new);
    let mut notice = use_signal(|| None::<Notice>);

    let ctx_for_resource = ctx.clone();
    let resource = use_resource(move || {
        let ctx = ctx_for_resource.clone();
        async move {
            ctx.close_subject();
            let subjects = ctx.subjects().list_subjects().await?;
            Ok::<_, ViewError>(subjects)
        }
    });

    let on_create = move |_: MouseEvent| {
        let ctx = ctx.clone();
        let name = new_name();
        let mut resource = resource;
        spawn(async move {
            match ctx.subjects().create_subject(&name).await {
                Ok(subject) => {
                    notice.set(Some(Notice::Created(subject.display_name().to_owned())));
                    new_name.set(String::new());
                    resource.restart();
                }
                Err(err) => notice.set(Some(Notice::Failed(err.into()))),
            }
        });
    };

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page picker-page",
            header { class: "view-header",
                h2 { class: "view-title", "Choose a subject" }
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
                ViewState::Ready(subjects) => rsx! {
                    if subjects.is_empty() {
                        p { class: "view-hint", "No subject files in '{data_dir}'." }
                    } else {
                        SubjectList { subjects }
                    }
                },
            }
            div { class: "picker-create",
                h3 { "Add a new subject" }
                input {
                    class: "text-input",
                    r#type: "text",
                    placeholder: "Name of the new subject",
                    value: "{new_name}",
                    oninput: move |evt| new_name.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: on_create,
                    "Create"
                }
                match notice() {
                    Some(Notice::Created(name)) => rsx! {
                        p { class: "view-success", "Subject '{name}' created." }
                    },
                    Some(Notice::Failed(err)) => rsx! {
                        p { class: "view-error", "{err.message()}" }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}

#[component]
fn SubjectList(subjects: Vec<Subject>) -> Element {
    rsx! {
        ul { class: "subject-list",
            for subject in subjects {
                li { key: "{subject.key()}",
                    Link {
                        class: "subject-link",
                        to: Route::SubjectMenu { key: subject.key().as_str().to_owned() },
                        "{subject.display_name()}"
                    }
                }
            }
        }
    }
}
