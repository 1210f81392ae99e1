use std::fmt;

/// Where a session stands, as shown above the current prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionProgress {
    /// `drawn` cards out of `total` have been shown so far.
    InProgress { drawn: usize, total: usize },
    /// Every card has been drawn.
    Finished,
}

impl SessionProgress {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for SessionProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress { drawn, total } => write!(f, "Question: {drawn} / {total}"),
            Self::Finished => f.write_str("Session finished!"),
        }
    }
}
