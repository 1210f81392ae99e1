use services::filter_cards;
use study_core::model::Card;

const PREVIEW_CHARS: usize = 56;

/// One search hit, ready for list rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowseItem {
    pub prompt: String,
    pub answer: String,
    pub preview: String,
}

impl BrowseItem {
    fn from_card(card: &Card) -> Self {
        Self {
            prompt: card.prompt().to_owned(),
            answer: card.answer().to_owned(),
            preview: truncate_preview(card.prompt(), PREVIEW_CHARS),
        }
    }
}

/// Search over one subject's cards.
#[derive(Clone, Debug, Default)]
pub struct BrowseVm {
    cards: Vec<Card>,
    term: String,
}

impl BrowseVm {
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            term: String::new(),
        }
    }

    /// True when the subject has no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    #[must_use]
    pub fn items(&self) -> Vec<BrowseItem> {
        filter_cards(&self.cards, &self.term)
            .into_iter()
            .map(BrowseItem::from_card)
            .collect()
    }

    #[must_use]
    pub fn result_label(&self) -> String {
        let hits = filter_cards(&self.cards, &self.term).len();
        match hits {
            0 => "No matching questions.".to_owned(),
            1 => "1 question found.".to_owned(),
            n => format!("{n} questions found."),
        }
    }
}

/// First line of `text`, cut to `max_chars`, with `...` when anything was dropped.
fn truncate_preview(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    let mut lines = trimmed.lines();
    let first_line = lines.next().unwrap_or("");
    let has_more_lines = lines.next().is_some();

    let mut out: String = first_line.chars().take(max_chars).collect();
    if has_more_lines || first_line.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}
