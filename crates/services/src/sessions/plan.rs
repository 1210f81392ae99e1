use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{Rng, rng};

use study_core::model::Card;

/// Draw order for a session: a uniformly random permutation of the card set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPlan {
    queue: VecDeque<Card>,
}

impl SessionPlan {
    /// Shuffle with the thread-local generator.
    #[must_use]
    pub fn shuffled(cards: Vec<Card>) -> Self {
        Self::shuffled_with(cards, &mut rng())
    }

    /// Shuffle with a caller-provided generator, for deterministic tests.
    #[must_use]
    pub fn shuffled_with<R: Rng + ?Sized>(mut cards: Vec<Card>, rng: &mut R) -> Self {
        cards.as_mut_slice().shuffle(rng);
        Self {
            queue: cards.into(),
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn into_queue(self) -> VecDeque<Card> {
        self.queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn cards(n: usize) -> Vec<Card> {
        (1..=n)
            .map(|i| Card::new(format!("Q{i}"), format!("A{i}")))
            .collect()
    }

    #[test]
    fn plan_is_a_permutation() {
        let input = cards(12);
        let plan = SessionPlan::shuffled_with(input.clone(), &mut StdRng::seed_from_u64(7));

        let mut drawn: Vec<_> = plan.into_queue().into_iter().collect();
        let mut expected = input;
        drawn.sort_by(|a, b| a.prompt().cmp(b.prompt()));
        expected.sort_by(|a, b| a.prompt().cmp(b.prompt()));
        assert_eq!(drawn, expected);
    }

    #[test]
    fn every_ordering_of_three_cards_is_about_equally_likely() {
        let input = cards(3);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<Vec<String>, u32> = HashMap::new();

        for _ in 0..6000 {
            let order: Vec<String> = SessionPlan::shuffled_with(input.clone(), &mut rng)
                .into_queue()
                .into_iter()
                .map(|c| c.prompt().to_owned())
                .collect();
            *counts.entry(order).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!((850..=1150).contains(count), "skewed count {count}");
        }
    }

    #[test]
    fn empty_plan_reports_empty() {
        let plan = SessionPlan::shuffled(Vec::new());
        assert!(plan.is_empty());
        assert_eq!(plan.total(), 0);
    }
}
