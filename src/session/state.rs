//! Caller-owned session payload.
//!
//! The engine never stores a `GameSession`. A caller receives one from
//! `new_game`, keeps it wherever it likes (the wire, a cookie, a
//! database), and passes it back whole on every call. `to_bytes` and
//! `from_bytes` give a compact snapshot for callers that persist it.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Side, SideMap};
use crate::deck::Deck;
use crate::error::SnapshotError;
use crate::rules::RoundOutcome;

/// Everything one game needs between calls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Remaining deck per side.
    pub decks: SideMap<Deck>,
    /// Outcomes of every round played so far, oldest first.
    pub round_results: Vector<RoundOutcome>,
    /// Rounds won per side.
    pub scores: SideMap<usize>,
    /// Latest player-facing message: the last round's, or the final verdict.
    pub result: String,
    /// No more rounds may be played.
    pub game_over: bool,
}

impl GameSession {
    /// Fresh session over two decks.
    #[must_use]
    pub fn new(deck_a: Deck, deck_b: Deck) -> Self {
        Self {
            decks: SideMap::new(deck_a, deck_b),
            ..Self::default()
        }
    }

    /// Cards a side can still draw.
    #[must_use]
    pub fn cards_left(&self, side: Side) -> usize {
        self.decks[side].len()
    }

    /// Number of rounds played.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.round_results.len()
    }

    /// Cards a side has played, in the order they were drawn.
    #[must_use]
    pub fn played_cards(&self, side: Side) -> Vec<Card> {
        self.round_results
            .iter()
            .map(|outcome| match side {
                Side::A => outcome.card_a.clone(),
                Side::B => outcome.card_b.clone(),
            })
            .collect()
    }

    /// Encode a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`GameSession::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
