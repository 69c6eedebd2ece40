//! End-of-game tally.

use serde::{Deserialize, Serialize};

use super::resolver::{RoundOutcome, Winner};

/// The overall verdict of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResult {
    pub winner: Winner,
    /// Rounds won by side A.
    pub a_wins: usize,
    /// Rounds won by side B.
    pub b_wins: usize,
    /// Player-facing message, e.g. `"Player 1 Wins! (2-1)"`.
    pub result: String,
}

impl FinalResult {
    /// Verdict for the given round-win counts.
    #[must_use]
    pub fn from_counts(a_wins: usize, b_wins: usize) -> Self {
        let winner = Winner::by_comparison(a_wins, b_wins);
        let result = match winner.side() {
            Some(side) => format!("{side} Wins! ({a_wins}-{b_wins})"),
            None => format!("Deuce! ({a_wins}-{b_wins})"),
        };
        Self {
            winner,
            a_wins,
            b_wins,
            result,
        }
    }
}

/// Tally round outcomes into a final verdict.
///
/// Deuce rounds count for neither side. The order of `outcomes` does not
/// matter.
#[must_use]
pub fn tally<'a, I>(outcomes: I) -> FinalResult
where
    I: IntoIterator<Item = &'a RoundOutcome>,
{
    let (a_wins, b_wins) = outcomes.into_iter().fold((0, 0), |(a, b), outcome| match outcome.winner {
        Winner::A => (a + 1, b),
        Winner::B => (a, b + 1),
        Winner::Deuce => (a, b),
    });
    FinalResult::from_counts(a_wins, b_wins)
}
