use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Flashcard;

/// Snapshot of everything the presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub prompt: String,
    pub answer: String,
    pub revealed: bool,
    /// 1-based position of the current card, 0 when the active set is empty.
    pub position: usize,
    pub total: usize,
}

impl CardView {
    pub fn counter(&self) -> String {
        format!("{}/{}", self.position, self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// The study session state machine.
///
/// Owns the full deck and the filtered-and-shuffled subset under study.
/// Every operation is synchronous and infallible; with an empty active set,
/// navigation degrades to a no-op instead of an error.
pub struct Session {
    all_cards: Vec<Flashcard>,
    active: Vec<Flashcard>,
    kind: String,
    position: usize,
    revealed: bool,
}

impl Session {
    /// An empty or malformed deck is accepted and yields an empty active set.
    pub fn new(all_cards: Vec<Flashcard>, default_kind: impl Into<String>) -> Self {
        let mut session = Session {
            all_cards,
            active: Vec::new(),
            kind: String::new(),
            position: 0,
            revealed: false,
        };
        session.apply_filter(default_kind);
        session
    }

    /// The filter value currently in effect.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Replace the active set with a freshly shuffled copy of every card
    /// matching `kind`, and reset the cursor and reveal flag.
    pub fn apply_filter(&mut self, kind: impl Into<String>) {
        self.apply_filter_with(kind, &mut rand::rng());
    }

    fn apply_filter_with(&mut self, kind: impl Into<String>, rng: &mut impl Rng) {
        self.kind = kind.into();
        self.active = self
            .all_cards
            .iter()
            .filter(|card| card.kind == self.kind)
            .cloned()
            .collect();
        self.active.shuffle(rng);
        self.position = 0;
        self.revealed = false;
    }

    /// Re-derives the active set from the full deck under the current filter,
    /// then shuffles. Same reset semantics as a filter change.
    pub fn shuffle(&mut self) {
        let kind = self.kind.clone();
        self.apply_filter(kind);
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Move to the next card, wrapping at the end. Hides the answer.
    pub fn advance(&mut self) {
        if self.active.is_empty() {
            return;
        }
        self.position = (self.position + 1) % self.active.len();
        self.revealed = false;
    }

    /// Pure read; no side effects.
    pub fn current_view(&self) -> CardView {
        match self.active.get(self.position) {
            Some(card) => CardView {
                prompt: card.prompt.clone(),
                answer: card.answer.clone(),
                revealed: self.revealed,
                position: self.position + 1,
                total: self.active.len(),
            },
            None => CardView {
                prompt: String::new(),
                answer: String::new(),
                revealed: self.revealed,
                position: 0,
                total: 0,
            },
        }
    }
}
