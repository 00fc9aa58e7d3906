use serde::Serialize;

use super::Session;
use crate::core::{
    CardDirection,
    Outcome,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardFace {
    pub primary: String,
    pub secondary: Option<String>,
}

/// What the presentation layer needs to draw the card under the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub word_id: String,
    pub category: String,
    pub front: CardFace,
    pub back: CardFace,
    pub outcome: Outcome,
    pub flipped: bool,
}

impl CardView {
    /// The face currently turned towards the user.
    pub fn visible_face(&self) -> &CardFace {
        if self.flipped {
            &self.back
        } else {
            &self.front
        }
    }
}

impl Session {
    pub fn card_view(&self) -> Option<CardView> {
        let word = self.current_word()?;
        let translation = word.translation(self.language).to_string();
        let japanese =
            CardFace { primary: word.romaji.clone(), secondary: Some(word.hiragana.clone()) };
        let target = CardFace { primary: translation, secondary: None };

        let (front, back) = match self.direction {
            CardDirection::SourceFirst => (japanese, target),
            CardDirection::TargetFirst => (target, japanese),
        };

        Some(CardView {
            word_id: word.id.clone(),
            category: word.category.clone(),
            front,
            back,
            outcome: self.outcome(&word.id),
            flipped: self.flipped,
        })
    }
}
