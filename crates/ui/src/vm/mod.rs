mod browse_vm;
mod quiz_vm;
mod session_vm;

pub use browse_vm::{BrowseItem, BrowseVm};
pub use quiz_vm::{QuizPhase, QuizSetupError, QuizSetupInput, QuizVm};
pub use session_vm::{Feedback, SessionPhase, SessionVm, start_session};
