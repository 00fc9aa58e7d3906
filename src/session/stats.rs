use std::collections::HashMap;

use serde::Serialize;

use super::Session;
use crate::core::{
    Category,
    Outcome,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub skipped: usize,
    pub unanswered: usize,
}

impl OutcomeCounts {
    pub fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Correct => self.correct += 1,
            Outcome::Incorrect => self.incorrect += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Unanswered => self.unanswered += 1,
        }
    }

    pub fn merge(&mut self, other: &OutcomeCounts) {
        self.total += other.total;
        self.correct += other.correct;
        self.incorrect += other.incorrect;
        self.skipped += other.skipped;
        self.unanswered += other.unanswered;
    }

    /// `count / total * 100`, rounded half-up to one decimal. `None` when
    /// there is nothing to divide by.
    pub fn percentage(&self, count: usize) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let tenths = (count * 1000 + self.total / 2) / self.total;
        Some(tenths as f64 / 10.0)
    }

    pub fn answered(&self) -> usize {
        self.correct + self.incorrect + self.skipped
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub category: Category,
    pub counts: OutcomeCounts,
}

/// Everything an exporter needs: one row per selected category with words in
/// the deck, plus the grand total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsReport {
    pub categories: Vec<CategoryStats>,
    pub total: OutcomeCounts,
}

impl StatsReport {
    pub fn get(&self, category: &str) -> Option<&OutcomeCounts> {
        self.categories.iter().find(|row| row.category == category).map(|row| &row.counts)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Session {
    pub fn compute_stats(&self) -> StatsReport {
        let mut per_category: HashMap<&str, OutcomeCounts> = HashMap::new();
        for word in self.deck() {
            per_category.entry(word.category.as_str()).or_default().record(self.outcome(&word.id));
        }

        let mut report = StatsReport::default();
        for category in &self.selected {
            let Some(counts) = per_category.get(category.as_str()) else {
                continue;
            };
            if counts.total == 0 {
                continue;
            }
            report.total.merge(counts);
            report.categories.push(CategoryStats { category: category.clone(), counts: *counts });
        }
        report
    }
}
