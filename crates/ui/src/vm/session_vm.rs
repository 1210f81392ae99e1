use services::SessionService;
use services::session::SessionProgress;
use services::SessionLoopService;
use study_core::model::{Card, SubjectKey};
use study_core::time::format_elapsed;

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Prompt,
    Answer,
    Finished,
}

/// Self-assessment after the answer was shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Knew,
    Missed,
}

pub struct SessionVm {
    session: SessionService,
    phase: SessionPhase,
    prompt: Option<String>,
    progress: SessionProgress,
}

impl SessionVm {
    /// Wrap a fresh session and draw its first card.
    #[must_use]
    pub fn new(session: SessionService) -> Self {
        let mut vm = Self {
            session,
            phase: SessionPhase::Prompt,
            prompt: None,
            progress: SessionProgress::Finished,
        };
        vm.advance();
        vm
    }

    fn advance(&mut self) {
        let (prompt, progress) = self.session.draw_next();
        self.prompt = prompt.map(str::to_owned);
        self.progress = progress;
        self.phase = if self.prompt.is_some() {
            SessionPhase::Prompt
        } else {
            SessionPhase::Finished
        };
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn prompt_text(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        self.progress.to_string()
    }

    /// Answer of the current card once it was revealed.
    #[must_use]
    pub fn answer_text(&self) -> Option<&str> {
        (self.phase == SessionPhase::Answer).then(|| self.session.reveal_active_answer())
    }

    pub fn reveal(&mut self) -> &str {
        if self.phase == SessionPhase::Prompt {
            self.phase = SessionPhase::Answer;
        }
        self.session.reveal_active_answer()
    }

    /// Record the self-assessment and move on to the next card.
    pub fn feedback(&mut self, feedback: Feedback) {
        if self.phase == SessionPhase::Finished {
            return;
        }
        if feedback == Feedback::Missed {
            self.session.mark_active_incorrect();
        }
        self.advance();
    }

    #[must_use]
    pub fn summary_text(&self) -> String {
        self.session.summary()
    }

    #[must_use]
    pub fn missed(&self) -> &[Card] {
        self.session.missed()
    }

    #[must_use]
    pub fn elapsed_label(&self) -> String {
        format!("Time: {}", format_elapsed(self.session.elapsed()))
    }
}

/// # Errors
///
/// Returns `ViewError::EmptySubject` when the subject has no cards.
/// Returns `ViewError::Storage` if the subject cannot be read.
pub async fn start_session(
    session_loop: &SessionLoopService,
    key: &SubjectKey,
) -> Result<SessionVm, ViewError> {
    let session = session_loop.start_session(key).await?;
    Ok(SessionVm::new(session))
}
