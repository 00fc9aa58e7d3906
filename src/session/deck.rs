use rand::Rng;

use super::Session;

/// In-place Fisher-Yates: for i from last down to 1, swap with a uniform
/// index in `[0, i]`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

impl Session {
    /// Replaces the selection, clears every outcome and rebuilds the deck in
    /// original order. Unknown labels are ignored.
    pub fn set_selected_categories<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested: Vec<S> = categories.into_iter().collect();
        self.selected = self
            .categories
            .iter()
            .filter(|known| requested.iter().any(|c| c.as_ref() == known.as_str()))
            .cloned()
            .collect();

        self.restart();
        log::debug!(
            "Selected {} of {} categories, {} cards in deck",
            self.selected.len(),
            self.categories.len(),
            self.deck.len()
        );
    }

    /// Adds or removes a single category from the selection.
    pub fn toggle_category(&mut self, category: &str, selected: bool) {
        let mut next: Vec<String> = self.selected.iter().cloned().collect();
        if selected {
            next.push(category.to_string());
        } else {
            next.retain(|c| c != category);
        }
        self.set_selected_categories(next);
    }

    pub fn select_all(&mut self) {
        let all = self.categories.clone();
        self.set_selected_categories(all);
    }

    pub fn select_none(&mut self) {
        self.set_selected_categories(std::iter::empty::<&str>());
    }

    /// Selects every category, clears outcomes and randomly permutes the deck.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.selected = self.categories.iter().cloned().collect();
        self.restart();
        fisher_yates(&mut self.deck, rng);
        log::info!("Shuffled {} cards", self.deck.len());
    }

    /// Selects every category, clears outcomes and restores original order.
    pub fn reset(&mut self) {
        self.selected = self.categories.iter().cloned().collect();
        self.restart();
        log::info!("Session reset, {} cards in deck", self.deck.len());
    }

    fn restart(&mut self) {
        self.outcomes.clear();
        self.rebuild_deck();
        self.cursor = 0;
        self.flipped = false;
    }

    /// Recomputes the deck from the selection and clamps the cursor.
    pub(super) fn rebuild_deck(&mut self) {
        self.deck = self
            .words
            .iter()
            .enumerate()
            .filter(|(_, word)| self.selected.contains(&word.category))
            .map(|(index, _)| index)
            .collect();

        if self.cursor >= self.deck.len() {
            self.cursor = self.deck.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::{
        super::test_support::*,
        *,
    };
    use crate::core::Outcome;

    fn deck_ids(session: &Session) -> Vec<String> {
        session.deck().map(|word| word.id.clone()).collect()
    }

    #[test]
    fn test_deselect_category_shrinks_deck() {
        let mut session = Session::new(colors_and_animals()).unwrap();
        session.go_to_next();
        session.go_to_next();
        session.mark_current(true);
        assert!(session.recorded_outcomes() > 0);

        session.toggle_category("animals", false);

        assert_eq!(session.deck_len(), 3);
        assert_eq!(deck_ids(&session), vec!["c1", "c2", "c3"]);
        assert_eq!(session.recorded_outcomes(), 0);
        assert_eq!(session.cursor(), Some(0));
    }

    #[test]
    fn test_deck_matches_selected_categories() {
        let words = colors_and_animals();
        let mut session = Session::new(words.clone()).unwrap();

        for selection in [vec!["colors"], vec!["animals"], vec!["animals", "colors"]] {
            session.set_selected_categories(&selection);
            let expected =
                words.iter().filter(|w| selection.contains(&w.category.as_str())).count();
            assert_eq!(session.deck_len(), expected);
            assert!(session.deck().all(|w| selection.contains(&w.category.as_str())));
        }
    }

    #[test]
    fn test_selection_change_clears_all_outcomes() {
        let mut session = Session::new(colors_and_animals()).unwrap();
        session.mark_current(false);
        session.go_to_next();
        session.set_selected_categories(["colors"]);
        assert_eq!(session.outcome("c1"), Outcome::Unanswered);
        assert_eq!(session.outcome("a1"), Outcome::Unanswered);

        session.mark_current(true);
        session.select_all();
        assert_eq!(session.recorded_outcomes(), 0);
    }

    #[test]
    fn test_unknown_categories_are_ignored() {
        let mut session = Session::new(colors_and_animals()).unwrap();
        session.set_selected_categories(["colors", "weather"]);
        assert_eq!(session.selected_categories().collect::<Vec<_>>(), vec!["colors"]);
        assert_eq!(session.deck_len(), 3);
    }

    #[test]
    fn test_select_none_gives_empty_deck() {
        let mut session = Session::new(colors_and_animals()).unwrap();
        session.select_none();
        assert!(session.is_empty());
        assert_eq!(session.cursor(), None);

        session.toggle_category("colors", true);
        assert_eq!(session.deck_len(), 3);
        assert_eq!(session.cursor(), Some(0));
    }

    #[test]
    fn test_rebuild_clamps_cursor() {
        let mut session = Session::new(colors_and_animals()).unwrap();
        session.cursor = 4;
        session.selected.remove("colors");
        session.rebuild_deck();
        assert_eq!(session.cursor, 1);
    }

    #[test]
    fn test_reset_restores_original_order() {
        let mut session = Session::new(plain(6)).unwrap();
        let original = deck_ids(&session);
        session.shuffle_with(&mut StdRng::seed_from_u64(3));
        session.mark_current(true);
        session.reset();

        assert_eq!(deck_ids(&session), original);
        assert_eq!(session.recorded_outcomes(), 0);
        assert_eq!(session.cursor(), Some(0));
    }

    #[test]
    fn test_shuffle_selects_all_and_keeps_every_word() {
        let mut session = Session::new(colors_and_animals()).unwrap();
        session.select_none();
        session.shuffle_with(&mut StdRng::seed_from_u64(11));

        assert_eq!(session.deck_len(), 5);
        assert!(session.is_selected("colors") && session.is_selected("animals"));
        let mut ids = deck_ids(&session);
        ids.sort();
        assert_eq!(ids, vec!["a1", "a2", "c1", "c2", "c3"]);
        assert_eq!(session.cursor(), Some(0));
    }

    #[test]
    fn test_fisher_yates_is_uniform() {
        const TRIALS: usize = 6000;
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = Session::new(plain(3)).unwrap();
        let mut permutations: HashMap<Vec<String>, usize> = HashMap::new();
        let mut positions = [[0usize; 3]; 3];

        for _ in 0..TRIALS {
            session.shuffle_with(&mut rng);
            let ids = deck_ids(&session);
            for (position, id) in ids.iter().enumerate() {
                let element = id.trim_start_matches('w').parse::<usize>().unwrap();
                positions[element][position] += 1;
            }
            *permutations.entry(ids).or_default() += 1;
        }

        assert_eq!(permutations.len(), 6);

        // df = 5, p = 0.001 critical value is 20.52
        let expected = TRIALS as f64 / 6.0;
        let chi_square: f64 = permutations
            .values()
            .map(|&observed| (observed as f64 - expected).powi(2) / expected)
            .sum();
        assert!(chi_square < 20.52, "chi-square too large: {chi_square}");

        for row in positions {
            for count in row {
                assert!((1700..=2300).contains(&count), "position count {count}");
            }
        }
    }

    #[test]
    fn test_fisher_yates_small_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = Vec::new();
        fisher_yates(&mut empty, &mut rng);
        let mut single = vec![7];
        fisher_yates(&mut single, &mut rng);
        assert_eq!(single, vec![7]);
    }
}
