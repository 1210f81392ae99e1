mod plan;
mod progress;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use plan::SessionPlan;
pub use progress::SessionProgress;
pub use service::{ALL_KNOWN_MESSAGE, MISSED_HEADER, NO_ANSWER, SessionService};
pub use workflow::SessionLoopService;
