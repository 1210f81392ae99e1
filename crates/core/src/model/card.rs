use thiserror::Error;

/// Prompt shown for a stored record that carries no prompt field.
pub const MISSING_PROMPT: &str = "No title";

/// Answer shown for a stored record that carries no answer field.
pub const MISSING_ANSWER: &str = "No answer";

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

/// User input for a new card, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub prompt: String,
    pub answer: String,
}

impl CardDraft {
    #[must_use]
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// Trim both fields and build a `Card`.
    ///
    /// # Errors
    ///
    /// Returns `CardError::EmptyPrompt` or `CardError::EmptyAnswer` when a field is blank.
    pub fn validate(self) -> Result<Card, CardError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(CardError::EmptyPrompt);
        }
        let answer = self.answer.trim();
        if answer.is_empty() {
            return Err(CardError::EmptyAnswer);
        }
        Ok(Card::new(prompt, answer))
    }
}

/// A single prompt/answer flashcard.
///
/// Cards have no identity beyond their contents: two cards with equal prompt and
/// answer are the same card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    prompt: String,
    answer: String,
}

impl Card {
    /// Build a card as it was stored. No validation is applied so that records
    /// written by hand or by older versions still load.
    #[must_use]
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.prompt, self.answer)
    }
}

//
// ─── CARD VALIDATION ERRORS ────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("the question must not be empty")]
    EmptyPrompt,

    #[error("the answer must not be empty")]
    EmptyAnswer,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_fails_if_prompt_blank() {
        let err = CardDraft::new("   ", "ok").validate().unwrap_err();
        assert_eq!(err, CardError::EmptyPrompt);
    }

    #[test]
    fn draft_fails_if_answer_blank() {
        let err = CardDraft::new("ok", "\n\t ").validate().unwrap_err();
        assert_eq!(err, CardError::EmptyAnswer);
    }

    #[test]
    fn draft_trims_fields() {
        let card = CardDraft::new("  Mitochondria?  ", "Makes ATP.\n")
            .validate()
            .unwrap();
        assert_eq!(card.prompt(), "Mitochondria?");
        assert_eq!(card.answer(), "Makes ATP.");
    }

    #[test]
    fn cards_compare_by_value() {
        assert_eq!(Card::new("Q", "A"), Card::new("Q", "A"));
        assert_ne!(Card::new("Q", "A"), Card::new("Q", "B"));
    }
}
