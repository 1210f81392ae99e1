use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use study_core::Clock;
use study_core::model::Card;

use super::plan::SessionPlan;
use super::progress::SessionProgress;
use crate::error::SessionError;

/// Returned by `reveal_active_answer` when no card is showing.
pub const NO_ANSWER: &str = "No answer.";

/// Summary text when no card was marked as missed.
pub const ALL_KNOWN_MESSAGE: &str = "You knew every question! Congratulations!";

/// First line of the summary when some cards were missed.
pub const MISSED_HEADER: &str = "Questions you did not know:";

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One shuffled pass over a card set.
///
/// Each card is drawn exactly once, in the order fixed when the session starts.
/// The user may flag the active card as missed; flags are kept in draw order and
/// a card is flagged at most once.
pub struct SessionService {
    clock: Clock,
    queue: VecDeque<Card>,
    drawn: usize,
    total: usize,
    missed: Vec<Card>,
    active: Option<Card>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl SessionService {
    /// Start a session over `cards` in a random order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no cards are provided.
    pub fn start(cards: Vec<Card>, clock: Clock) -> Result<Self, SessionError> {
        Self::from_plan(SessionPlan::shuffled(cards), clock)
    }

    /// Like `start`, shuffling with the given generator.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no cards are provided.
    pub fn start_with_rng<R: Rng + ?Sized>(
        cards: Vec<Card>,
        clock: Clock,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        Self::from_plan(SessionPlan::shuffled_with(cards, rng), clock)
    }

    fn from_plan(plan: SessionPlan, clock: Clock) -> Result<Self, SessionError> {
        if plan.is_empty() {
            return Err(SessionError::Empty);
        }

        let total = plan.total();
        Ok(Self {
            clock,
            queue: plan.into_queue(),
            drawn: 0,
            total,
            missed: Vec::new(),
            active: None,
            started_at: clock.now(),
            completed_at: None,
        })
    }

    /// Draw the next card and make it active.
    ///
    /// Once the queue is empty this clears the active card and keeps returning
    /// `(None, SessionProgress::Finished)`.
    pub fn draw_next(&mut self) -> (Option<&str>, SessionProgress) {
        let Some(card) = self.queue.pop_front() else {
            self.active = None;
            if self.completed_at.is_none() {
                self.completed_at = Some(self.clock.now());
            }
            return (None, SessionProgress::Finished);
        };

        self.drawn += 1;
        let progress = SessionProgress::InProgress {
            drawn: self.drawn,
            total: self.total,
        };
        let active = self.active.insert(card);
        (Some(active.prompt()), progress)
    }

    /// Answer of the active card, or `NO_ANSWER` when nothing is showing.
    #[must_use]
    pub fn reveal_active_answer(&self) -> &str {
        self.active.as_ref().map_or(NO_ANSWER, Card::answer)
    }

    /// Flag the active card as not known. Repeated flags are ignored.
    pub fn mark_active_incorrect(&mut self) {
        let Some(card) = &self.active else {
            return;
        };
        if !self.missed.contains(card) {
            self.missed.push(card.clone());
        }
    }

    /// Congratulation when nothing was missed, otherwise one line per missed prompt.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.missed.is_empty() {
            return ALL_KNOWN_MESSAGE.to_owned();
        }

        let mut out = String::from(MISSED_HEADER);
        for card in &self.missed {
            out.push_str("\n- ");
            out.push_str(card.prompt());
        }
        out
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        if self.is_complete() {
            SessionProgress::Finished
        } else {
            SessionProgress::InProgress {
                drawn: self.drawn,
                total: self.total,
            }
        }
    }

    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn missed(&self) -> &[Card] {
        &self.missed
    }

    /// Total number of cards in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of cards drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// True after a draw has found the queue empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Time from start to completion, or to now while still running.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.completed_at.unwrap_or_else(|| self.clock.now()) - self.started_at
    }
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("queue_len", &self.queue.len())
            .field("drawn", &self.drawn)
            .field("total", &self.total)
            .field("missed_len", &self.missed.len())
            .field("has_active", &self.active.is_some())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use study_core::time::fixed_now;

    fn card(n: usize) -> Card {
        Card::new(format!("Q{n}"), format!("A{n}"))
    }

    fn start(cards: Vec<Card>) -> SessionService {
        SessionService::start_with_rng(cards, Clock::fixed(fixed_now()), &mut StdRng::seed_from_u64(1))
            .unwrap()
    }

    #[test]
    fn empty_session_returns_error() {
        let err = SessionService::start(Vec::new(), Clock::fixed(fixed_now())).unwrap_err();
        assert!(matches!(err, SessionError::Empty));
    }

    #[test]
    fn two_cards_are_each_drawn_once_then_finished() {
        let mut session = start(vec![card(1), card(2)]);

        let (first, progress) = session.draw_next();
        let first = first.unwrap().to_owned();
        assert_eq!(progress, SessionProgress::InProgress { drawn: 1, total: 2 });

        let (second, progress) = session.draw_next();
        let second = second.unwrap().to_owned();
        assert_eq!(progress, SessionProgress::InProgress { drawn: 2, total: 2 });

        let mut seen = vec![first, second];
        seen.sort();
        assert_eq!(seen, vec!["Q1", "Q2"]);

        let (third, progress) = session.draw_next();
        assert_eq!(third, None);
        assert_eq!(progress, SessionProgress::Finished);
        assert!(session.active_card().is_none());
    }

    #[test]
    fn drawing_covers_the_multiset_of_prompts() {
        let input = vec![card(1), card(2), card(2), card(3), card(4), card(4), card(4)];
        let mut session = start(input.clone());

        let mut drawn = Vec::new();
        let mut last = 0;
        while let (Some(prompt), SessionProgress::InProgress { drawn: cursor, total }) =
            session.draw_next()
        {
            drawn.push(prompt.to_owned());
            assert_eq!(cursor, last + 1);
            assert_eq!(total, input.len());
            last = cursor;
        }

        assert_eq!(last, input.len());
        let mut expected: Vec<_> = input.iter().map(|c| c.prompt().to_owned()).collect();
        drawn.sort();
        expected.sort();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn draws_past_the_end_stay_finished() {
        let mut session = start(vec![card(1)]);
        session.draw_next();
        for _ in 0..3 {
            assert_eq!(session.draw_next(), (None, SessionProgress::Finished));
        }
        assert_eq!(session.drawn(), 1);
        assert_eq!(session.total(), 1);
        assert!(session.is_complete());
    }

    #[test]
    fn reveal_before_first_draw_returns_sentinel() {
        let mut session = start(vec![card(1)]);
        assert_eq!(session.reveal_active_answer(), NO_ANSWER);

        session.draw_next();
        assert_eq!(session.reveal_active_answer(), "A1");

        session.draw_next();
        assert_eq!(session.reveal_active_answer(), NO_ANSWER);
    }

    #[test]
    fn marking_twice_records_one_miss() {
        let mut session = start(vec![card(1), card(2)]);
        session.draw_next();
        session.mark_active_incorrect();
        session.mark_active_incorrect();
        assert_eq!(session.missed().len(), 1);
    }

    #[test]
    fn marking_without_active_card_is_ignored() {
        let mut session = start(vec![card(1)]);
        session.mark_active_incorrect();
        assert!(session.missed().is_empty());

        session.draw_next();
        session.draw_next();
        session.mark_active_incorrect();
        assert!(session.missed().is_empty());
    }

    #[test]
    fn summary_congratulates_when_nothing_missed() {
        let mut session = start(vec![card(1), card(2)]);
        while session.draw_next().0.is_some() {}
        assert_eq!(session.summary(), ALL_KNOWN_MESSAGE);
    }

    #[test]
    fn summary_lists_missed_prompts_in_mark_order() {
        let mut session = start(vec![card(1), card(2), card(3)]);
        let mut marked = Vec::new();
        while let (Some(prompt), _) = session.draw_next() {
            let prompt = prompt.to_owned();
            if prompt != "Q2" {
                marked.push(prompt);
                session.mark_active_incorrect();
            }
        }

        let summary = session.summary();
        let mut lines = summary.lines();
        assert_eq!(lines.next(), Some(MISSED_HEADER));
        let listed: Vec<_> = lines.map(|l| l.trim_start_matches("- ").to_owned()).collect();
        assert_eq!(listed, marked);
    }

    #[test]
    fn elapsed_runs_until_the_terminal_draw() {
        let mut clock = Clock::fixed(fixed_now());
        let mut session =
            SessionService::start_with_rng(vec![card(1)], clock, &mut StdRng::seed_from_u64(3))
                .unwrap();
        clock.advance(Duration::seconds(30));
        session.clock = clock;

        session.draw_next();
        session.draw_next();
        assert_eq!(session.completed_at(), Some(fixed_now() + Duration::seconds(30)));
        assert_eq!(session.elapsed(), Duration::seconds(30));
    }
}
