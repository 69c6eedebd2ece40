//! A player's remaining deck.
//!
//! Decks are persistent: every mutation returns a new `Deck` and leaves
//! the input untouched. Backed by `im::Vector`, so the copy is O(1) with
//! structural sharing.

use std::collections::BTreeMap;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::DrawSource;

/// Ordered sequence of cards one side can still draw from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vector<Card>,
}

/// A card taken out of a deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draw {
    /// The deck with the card removed.
    pub deck: Deck,
    /// The removed card.
    pub card: Card,
    /// Index the card was taken from.
    pub index: usize,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if no cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at an index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterate over the cards in order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Remove the card at `index`.
    ///
    /// Only that position is removed, even if equal cards sit elsewhere,
    /// and the remaining cards keep their relative order. Returns `None`
    /// when `index` is out of range.
    #[must_use]
    pub fn remove_at(&self, index: usize) -> Option<Draw> {
        if index >= self.cards.len() {
            return None;
        }
        let mut cards = self.cards.clone();
        let card = cards.remove(index);
        Some(Draw {
            deck: Self { cards },
            card,
            index,
        })
    }

    /// Remove a uniformly chosen card.
    ///
    /// Returns `None` for an empty deck.
    pub fn draw<R: DrawSource>(&self, rng: &mut R) -> Option<Draw> {
        if self.is_empty() {
            return None;
        }
        let index = rng.pick_index(self.len());
        self.remove_at(index)
    }

    /// Count of each distinct card.
    #[must_use]
    pub fn composition(&self) -> BTreeMap<&Card, usize> {
        let mut counts = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    /// Check whether two decks hold the same multiset of cards.
    #[must_use]
    pub fn same_composition(&self, other: &Deck) -> bool {
        self.len() == other.len() && self.composition() == other.composition()
    }

    /// Copy the cards out into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().cloned().collect()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}
