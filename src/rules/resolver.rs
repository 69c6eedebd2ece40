//! Single-round card comparison.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::Side;

/// Who took a round, or a whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    A,
    B,
    /// Tie.
    Deuce,
}

impl Winner {
    /// The winning side, `None` for a deuce.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Winner::A => Some(Side::A),
            Winner::B => Some(Side::B),
            Winner::Deuce => None,
        }
    }

    /// Strict comparison of two values; equal values are a deuce.
    #[must_use]
    pub fn by_comparison<T: Ord>(a: T, b: T) -> Self {
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Winner::A,
            std::cmp::Ordering::Less => Winner::B,
            std::cmp::Ordering::Equal => Winner::Deuce,
        }
    }
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::A => Winner::A,
            Side::B => Winner::B,
        }
    }
}

/// Result of comparing one card from each side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub card_a: Card,
    pub card_b: Card,
    /// Player-facing message.
    pub result: String,
    pub winner: Winner,
}

impl RoundOutcome {
    /// Player-facing message for a round won by `winner`.
    #[must_use]
    pub fn message(winner: Winner) -> String {
        match winner.side() {
            Some(side) => format!("{side} wins!"),
            None => "Deuce!".to_string(),
        }
    }
}

/// Compare two cards by score.
///
/// The higher score wins and equal scores are a deuce. Both cards are
/// echoed back unchanged.
///
/// ```
/// use circle_of_life::cards::Card;
/// use circle_of_life::rules::{compare, Winner};
///
/// let outcome = compare(&Card::new("a-3", 3, "a-3.png"), &Card::new("b-1", 1, "b-1.png"));
/// assert_eq!(outcome.winner, Winner::A);
/// assert_eq!(outcome.result, "Player 1 wins!");
/// ```
#[must_use]
pub fn compare(card_a: &Card, card_b: &Card) -> RoundOutcome {
    let winner = Winner::by_comparison(card_a.score(), card_b.score());
    RoundOutcome {
        card_a: card_a.clone(),
        card_b: card_b.clone(),
        result: RoundOutcome::message(winner),
        winner,
    }
}
