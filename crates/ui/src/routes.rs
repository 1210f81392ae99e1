use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    AddCardView, BrowseView, QuizView, SessionView, SubjectMenuView, SubjectPickerView,
};

/// Screens of the app. Subject screens carry the subject's file stem.
#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", SubjectPickerView)] SubjectPicker {},
        #[route("/subject/:key", SubjectMenuView)] SubjectMenu { key: String },
        #[route("/subject/:key/session", SessionView)] Session { key: String },
        #[route("/subject/:key/add", AddCardView)] AddCard { key: String },
        #[route("/subject/:key/browse", BrowseView)] Browse { key: String },
        #[route("/subject/:key/quiz", QuizView)] Quiz { key: String },
}

impl Route {
    /// Where the "back" action of a screen leads.
    #[must_use]
    pub fn parent(&self) -> Self {
        match self {
            Self::SubjectPicker {} | Self::SubjectMenu { .. } => Self::SubjectPicker {},
            Self::Session { key }
            | Self::AddCard { key }
            | Self::Browse { key }
            | Self::Quiz { key } => Self::SubjectMenu { key: key.clone() },
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Study cards" }
            ul {
                li { Link { to: Route::SubjectPicker {}, "Subjects" } }
            }
        }
    }
}
