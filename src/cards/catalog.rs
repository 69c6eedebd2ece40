//! Card catalog for identifier lookup.
//!
//! The `CardCatalog` is the injectable table that turns a deck
//! configuration's identifiers into cards. The engine never hardcodes a
//! card set; two built-in sets ship for convenience.

use rustc_hash::FxHashMap;

use super::card::Card;
use crate::error::ConfigError;

/// Lookup table from identifier to card.
///
/// ## Example
///
/// ```
/// use circle_of_life::cards::{Card, CardCatalog};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::new("ace", 4, "ace.png")).unwrap();
///
/// assert_eq!(catalog.get("ace").unwrap().score(), 4);
/// assert!(catalog.get("king").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, Card>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of cards.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, ConfigError> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.register(card)?;
        }
        Ok(catalog)
    }

    /// The alphabetic set: `a-1`..`a-4` and `b-1`..`b-4`, scored by suffix.
    #[must_use]
    pub fn alphabetic() -> Self {
        let mut catalog = Self::new();
        for prefix in ["a", "b"] {
            for score in 1..=4u32 {
                let id = format!("{prefix}-{score}");
                catalog.insert(Card::new(id.clone(), score, format!("{id}.png")));
            }
        }
        catalog
    }

    /// The life-cycle set: `ladybug1`..`ladybug4` and `monarch1`..`monarch4`.
    ///
    /// The suffix is the stage (egg, larva, pupa, adult) and doubles as
    /// the score, so a more advanced stage beats an earlier one.
    #[must_use]
    pub fn life_cycle() -> Self {
        let mut catalog = Self::new();
        for species in ["ladybug", "monarch"] {
            for score in 1..=4u32 {
                let id = format!("{species}{score}");
                catalog.insert(Card::new(id.clone(), score, format!("{id}.png")));
            }
        }
        catalog
    }

    /// Register a card.
    ///
    /// Rejects duplicate identifiers and zero scores.
    pub fn register(&mut self, card: Card) -> Result<(), ConfigError> {
        if self.cards.contains_key(card.identifier()) {
            return Err(ConfigError::DuplicateCard {
                identifier: card.identifier().to_string(),
            });
        }
        if card.score() == 0 {
            return Err(ConfigError::InvalidScore {
                identifier: card.identifier().to_string(),
            });
        }
        self.insert(card);
        Ok(())
    }

    fn insert(&mut self, card: Card) {
        self.cards.insert(card.identifier().to_string(), card);
    }

    /// Get a card by identifier.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&Card> {
        self.cards.get(identifier)
    }

    /// Check if an identifier is registered.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.cards.contains_key(identifier)
    }

    /// Get the number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// All identifiers, sorted.
    #[must_use]
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.cards.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::new("x", 2, "x.png")).unwrap();

        let found = catalog.get("x");
        assert!(found.is_some());
        assert_eq!(found.unwrap().image(), "x.png");

        assert!(catalog.get("y").is_none());
        assert!(catalog.contains("x"));
        assert!(!catalog.contains("y"));
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::new("x", 1, "x.png")).unwrap();

        let err = catalog.register(Card::new("x", 3, "other.png")).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateCard { identifier } if identifier == "x"));

        // First registration wins
        assert_eq!(catalog.get("x").unwrap().score(), 1);
    }

    #[test]
    fn test_zero_score_rejected() {
        let err = CardCatalog::from_cards([Card::new("z", 0, "z.png")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScore { .. }));
    }

    #[test]
    fn test_alphabetic_catalog() {
        let catalog = CardCatalog::alphabetic();

        assert_eq!(catalog.len(), 8);
        assert_eq!(
            catalog.identifiers(),
            vec!["a-1", "a-2", "a-3", "a-4", "b-1", "b-2", "b-3", "b-4"]
        );
        let card = catalog.get("b-3").unwrap();
        assert_eq!(card.score(), 3);
        assert_eq!(card.image(), "b-3.png");
    }

    #[test]
    fn test_life_cycle_catalog() {
        let catalog = CardCatalog::life_cycle();

        assert_eq!(catalog.len(), 8);
        for species in ["ladybug", "monarch"] {
            for score in 1..=4u32 {
                let card = catalog.get(&format!("{species}{score}")).unwrap();
                assert_eq!(card.score(), score);
                assert_eq!(card.image(), format!("{species}{score}.png"));
            }
        }
        assert!(!catalog.contains("ladybug5"));
    }
}
