//! Word catalog
//!
//! Provides the difficulty tiers and their embedded word lists. The catalog
//! is built once at startup and passed by reference into every mode.

mod embedded;

pub use embedded::{EASY, EXTREME, HARD, MEDIUM};

use std::fmt;

/// A named difficulty bucket with its own fixed word list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Tier {
    /// All tiers, in menu order
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Extreme];

    /// Human-readable tier name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable mapping from tier to word list
///
/// Tier keys always originate from a closed selection menu, so lookups have
/// no error path.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    tiers: [&'static [&'static str]; 4],
}

impl Catalog {
    /// Catalog backed by the embedded word lists
    #[must_use]
    pub const fn embedded() -> Self {
        Self::new(EASY, MEDIUM, HARD, EXTREME)
    }

    /// Catalog over arbitrary tier lists (fixtures in tests)
    #[must_use]
    pub const fn new(
        easy: &'static [&'static str],
        medium: &'static [&'static str],
        hard: &'static [&'static str],
        extreme: &'static [&'static str],
    ) -> Self {
        Self {
            tiers: [easy, medium, hard, extreme],
        }
    }

    /// Ordered word list for one tier
    #[must_use]
    pub const fn get(&self, tier: Tier) -> &'static [&'static str] {
        self.tiers[tier as usize]
    }

    /// Every word across all tiers, in tier order
    ///
    /// Used by the modes that draw from the full vocabulary regardless of
    /// the selected tier.
    #[must_use]
    pub fn all_words(&self) -> Vec<&'static str> {
        self.tiers.iter().flat_map(|t| t.iter().copied()).collect()
    }

    /// Every word whose length is at least `len`
    #[must_use]
    pub fn words_at_least(&self, len: usize) -> Vec<&'static str> {
        self.tiers
            .iter()
            .flat_map(|t| t.iter().copied())
            .filter(|w| w.len() >= len)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_word_is_lowercase_alphabetic() {
        let catalog = Catalog::embedded();
        for tier in Tier::ALL {
            for word in catalog.get(tier) {
                assert!(!word.is_empty(), "empty word in {tier}");
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "word '{word}' in {tier} is not lowercase alphabetic"
                );
            }
        }
    }

    #[test]
    fn every_word_equals_its_lowercase_form() {
        let catalog = Catalog::embedded();
        for word in catalog.all_words() {
            assert_eq!(word, word.to_lowercase());
        }
    }

    #[test]
    fn tiers_hold_ten_words_each() {
        let catalog = Catalog::embedded();
        for tier in Tier::ALL {
            assert_eq!(catalog.get(tier).len(), 10, "{tier} tier size");
        }
    }

    #[test]
    fn all_words_spans_every_tier_in_order() {
        let catalog = Catalog::embedded();
        let all = catalog.all_words();

        assert_eq!(all.len(), 40);
        assert_eq!(all[0], EASY[0]);
        assert_eq!(all[10], MEDIUM[0]);
        assert_eq!(all[20], HARD[0]);
        assert_eq!(all[30], EXTREME[0]);
    }

    #[test]
    fn words_at_least_filters_by_length() {
        let catalog = Catalog::new(&["cat", "apple"], &["mountain"], &[], &[]);

        assert_eq!(catalog.words_at_least(4), vec!["apple", "mountain"]);
        assert_eq!(catalog.words_at_least(6), vec!["mountain"]);
        assert!(catalog.words_at_least(9).is_empty());
    }

    #[test]
    fn words_at_least_zero_returns_everything() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.words_at_least(0).len(), 40);
    }

    #[test]
    fn tier_labels() {
        assert_eq!(Tier::Easy.label(), "Easy");
        assert_eq!(Tier::Medium.label(), "Medium");
        assert_eq!(Tier::Hard.label(), "Hard");
        assert_eq!(Tier::Extreme.label(), "Extreme");
        assert_eq!(format!("{}", Tier::Extreme), "Extreme");
    }
}
