mod browse;
mod editor;
mod quiz;
mod session;
mod state;
mod subject_menu;
mod subject_picker;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use browse::BrowseView;
pub use editor::AddCardView;
pub use quiz::QuizView;
pub use session::SessionView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use subject_menu::SubjectMenuView;
pub use subject_picker::SubjectPickerView;

pub(crate) use state::route_subject_key;
