//! Deck construction from a card-count configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pile::Deck;
use crate::cards::{Card, CardCatalog};
use crate::core::DrawSource;

/// How many copies of each catalog entry go into a deck.
///
/// Entries are kept sorted by identifier so that the same configuration
/// and the same seed always build the same deck.
///
/// ## Example
///
/// ```
/// use circle_of_life::deck::DeckConfig;
///
/// let config = DeckConfig::new().with("ladybug1", 2).with("monarch4", 1);
/// assert_eq!(config.count("ladybug1"), 2);
/// assert_eq!(config.count("missing"), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckConfig {
    counts: BTreeMap<String, i64>,
}

impl DeckConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One copy of each life-cycle card.
    #[must_use]
    pub fn life_cycle() -> Self {
        ["ladybug", "monarch"]
            .into_iter()
            .flat_map(|species| (1..=4).map(move |stage| (format!("{species}{stage}"), 1)))
            .collect()
    }

    /// Set a count (builder pattern).
    #[must_use]
    pub fn with(mut self, identifier: impl Into<String>, count: i64) -> Self {
        self.set(identifier, count);
        self
    }

    /// Set a count, replacing any previous one.
    pub fn set(&mut self, identifier: impl Into<String>, count: i64) {
        self.counts.insert(identifier.into(), count);
    }

    /// Configured count, 0 when absent.
    #[must_use]
    pub fn count(&self, identifier: &str) -> i64 {
        self.counts.get(identifier).copied().unwrap_or(0)
    }

    /// Iterate over `(identifier, count)` in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.counts.iter().map(|(id, &count)| (id.as_str(), count))
    }

    /// Number of cards a deck built against `catalog` will hold.
    #[must_use]
    pub fn deck_size(&self, catalog: &CardCatalog) -> usize {
        self.iter()
            .filter(|(id, _)| catalog.contains(id))
            .map(|(_, count)| usize::try_from(count).unwrap_or(0))
            .sum()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for DeckConfig {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Build a shuffled deck.
///
/// Each catalog-known identifier with a positive count contributes that
/// many copies of its card. Unknown identifiers and counts of zero or
/// less contribute nothing. The result is shuffled with `rng`.
pub fn build_deck<R: DrawSource>(catalog: &CardCatalog, config: &DeckConfig, rng: &mut R) -> Deck {
    let mut cards: Vec<Card> = Vec::with_capacity(config.deck_size(catalog));

    for (identifier, count) in config.iter() {
        let Some(card) = catalog.get(identifier) else {
            debug!(identifier, "skipping identifier missing from catalog");
            continue;
        };
        if count <= 0 {
            debug!(identifier, count, "skipping non-positive count");
            continue;
        }
        for _ in 0..count {
            cards.push(card.clone());
        }
    }

    rng.shuffle(&mut cards);
    debug!(cards = cards.len(), "built deck");

    Deck::from(cards)
}
