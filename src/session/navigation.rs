use super::Session;
use crate::core::Outcome;

impl Session {
    /// Records the current card as correct or incorrect, overwriting any
    /// prior outcome, then jumps to the next unanswered card.
    pub fn mark_current(&mut self, is_correct: bool) -> bool {
        let Some(word) = self.current_word() else {
            return false;
        };

        let id = word.id.clone();
        let outcome = if is_correct { Outcome::Correct } else { Outcome::Incorrect };
        log::debug!("Marked {} as {:?}", id, outcome);
        self.outcomes.insert(id, outcome);

        self.go_to_next_unanswered();
        true
    }

    /// Marks a word as skipped unless it already has an outcome. Ids outside
    /// the current deck are ignored.
    pub fn skip_if_unanswered(&mut self, word_id: &str) -> bool {
        let in_deck = self.deck().any(|word| word.id == word_id);
        if !in_deck || !self.outcome(word_id).is_unanswered() {
            return false;
        }

        self.outcomes.insert(word_id.to_string(), Outcome::Skipped);
        true
    }

    /// Steps back one card. Never records a skip.
    pub fn go_to_previous(&mut self) -> bool {
        if self.deck.is_empty() || self.cursor == 0 {
            return false;
        }
        self.move_to(self.cursor - 1);
        true
    }

    /// Steps forward one card, skipping the card being left if unanswered.
    pub fn go_to_next(&mut self) -> bool {
        if self.deck.is_empty() || self.cursor + 1 >= self.deck.len() {
            return false;
        }

        if let Some(id) = self.current_word().map(|word| word.id.clone()) {
            self.skip_if_unanswered(&id);
        }
        self.move_to(self.cursor + 1);
        true
    }

    /// Jumps to the first unanswered card after the cursor, wrapping around
    /// to the start. Falls back to `go_to_next` when none is left.
    pub fn go_to_next_unanswered(&mut self) -> bool {
        if self.deck.is_empty() {
            return false;
        }

        let ahead = (self.cursor + 1)..self.deck.len();
        let behind = 0..self.cursor;
        let target = ahead.chain(behind).find(|&position| self.is_unanswered_at(position));

        match target {
            Some(position) => {
                self.move_to(position);
                true
            }
            None => self.go_to_next(),
        }
    }

    fn move_to(&mut self, position: usize) {
        log::debug!("Cursor {} -> {}", self.cursor, position);
        self.cursor = position;
        self.flipped = false;
    }
}
