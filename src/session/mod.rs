//! Flashcard session state machine
//!
//! # Components
//! - `deck.rs`: category filtering, shuffle and reset
//! - `navigation.rs`: outcome tracking and cursor movement
//! - `stats.rs`: per-category outcome aggregation
//! - `view.rs`: what the current card shows, given the display flags
//!
//! The deck stores indices into the immutable word list. The cursor is only
//! meaningful while the deck is non-empty; every query reports `None` for the
//! "no card" state instead of panicking.

pub mod deck;
pub mod navigation;
pub mod stats;
pub mod view;

use std::collections::{
    BTreeSet,
    HashMap,
    HashSet,
};

use serde::Serialize;

pub use stats::{
    CategoryStats,
    OutcomeCounts,
    StatsReport,
};
pub use view::{
    CardFace,
    CardView,
};

use crate::core::{
    CardDirection,
    Category,
    Outcome,
    TangoError,
    TargetLanguage,
    Word,
};

/// 1-based position of the cursor within the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl Progress {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.position as f64 / self.total as f64 * 100.0
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    words: Vec<Word>,
    categories: Vec<Category>,
    selected: BTreeSet<Category>,
    deck: Vec<usize>,
    cursor: usize,
    outcomes: HashMap<String, Outcome>,
    flipped: bool,
    direction: CardDirection,
    language: TargetLanguage,
}

impl Session {
    /// Builds a session with every category selected and the deck in
    /// original order.
    pub fn new(words: Vec<Word>) -> Result<Self, TangoError> {
        let mut ids = HashSet::with_capacity(words.len());
        for word in &words {
            if !ids.insert(word.id.as_str()) {
                return Err(TangoError::DuplicateWordId(word.id.clone()));
            }
        }

        let categories: Vec<Category> = words
            .iter()
            .map(|word| word.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut session = Self {
            selected: categories.iter().cloned().collect(),
            words,
            categories,
            deck: Vec::new(),
            cursor: 0,
            outcomes: HashMap::new(),
            flipped: false,
            direction: CardDirection::default(),
            language: TargetLanguage::default(),
        };
        session.rebuild_deck();
        Ok(session)
    }

    pub fn with_display(mut self, direction: CardDirection, language: TargetLanguage) -> Self {
        self.direction = direction;
        self.language = language;
        self
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Every category in the word list, sorted.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selected_categories(&self) -> impl Iterator<Item = &Category> {
        self.selected.iter()
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.contains(category)
    }

    pub fn deck(&self) -> impl Iterator<Item = &Word> {
        self.deck.iter().map(|&index| &self.words[index])
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        if self.deck.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.word_at(self.cursor)
    }

    pub fn outcome(&self, word_id: &str) -> Outcome {
        self.outcomes.get(word_id).copied().unwrap_or_default()
    }

    pub fn current_outcome(&self) -> Option<Outcome> {
        self.current_word().map(|word| self.outcome(&word.id))
    }

    /// Number of words holding a recorded outcome.
    pub fn recorded_outcomes(&self) -> usize {
        self.outcomes.values().filter(|outcome| !outcome.is_unanswered()).count()
    }

    pub fn progress(&self) -> Option<Progress> {
        self.cursor().map(|cursor| Progress { position: cursor + 1, total: self.deck.len() })
    }

    pub fn direction(&self) -> CardDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: CardDirection) {
        self.direction = direction;
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }

    pub fn language(&self) -> TargetLanguage {
        self.language
    }

    pub fn set_language(&mut self, language: TargetLanguage) {
        self.language = language;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        self.flipped = !self.flipped;
    }

    fn word_at(&self, position: usize) -> Option<&Word> {
        self.deck.get(position).map(|&index| &self.words[index])
    }

    fn is_unanswered_at(&self, position: usize) -> bool {
        self.word_at(position)
            .map(|word| self.outcome(&word.id).is_unanswered())
            .unwrap_or(false)
    }
}
