//! Draw-and-resolve over two decks.

use tracing::debug;

use super::resolver::{compare, RoundOutcome};
use crate::cards::Card;
use crate::core::{DrawSource, Side};
use crate::deck::Deck;
use crate::error::{EngineError, EngineResult};

/// Everything a round produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundDraw {
    /// Side A's deck after the draw.
    pub deck_a: Deck,
    /// Side B's deck after the draw.
    pub deck_b: Deck,
    pub outcome: RoundOutcome,
    pub drawn_a: Card,
    pub drawn_b: Card,
    /// Both decks are empty after this round.
    pub all_cards_used: bool,
}

/// Play one round: draw a random card from each deck and compare them.
///
/// The two indices are drawn independently, A first. Input decks are not
/// modified; the shrunk decks come back in the result.
///
/// ## Errors
///
/// [`EngineError::DeckExhausted`] if either deck is already empty. A is
/// checked before B.
pub fn play_round<R: DrawSource>(deck_a: &Deck, deck_b: &Deck, rng: &mut R) -> EngineResult<RoundDraw> {
    let a = deck_a.draw(rng).ok_or(EngineError::DeckExhausted { side: Side::A })?;
    let b = deck_b.draw(rng).ok_or(EngineError::DeckExhausted { side: Side::B })?;

    let outcome = compare(&a.card, &b.card);
    let all_cards_used = a.deck.is_empty() && b.deck.is_empty();

    debug!(
        card_a = a.card.identifier(),
        index_a = a.index,
        card_b = b.card.identifier(),
        index_b = b.index,
        winner = ?outcome.winner,
        left_a = a.deck.len(),
        left_b = b.deck.len(),
        "round resolved"
    );

    Ok(RoundDraw {
        deck_a: a.deck,
        deck_b: b.deck,
        outcome,
        drawn_a: a.card,
        drawn_b: b.card,
        all_cards_used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDraws;
    use crate::rules::Winner;

    fn card(id: &str, score: u32) -> Card {
        Card::new(id, score, format!("{id}.png"))
    }

    fn deck(cards: &[(&str, u32)]) -> Deck {
        cards.iter().map(|&(id, score)| card(id, score)).collect()
    }

    #[test]
    fn test_draws_scripted_indices() {
        let deck_a = deck(&[("a-1", 1), ("a-2", 2), ("a-3", 3)]);
        let deck_b = deck(&[("b-1", 1), ("b-2", 2), ("b-3", 3)]);

        let round = play_round(&deck_a, &deck_b, &mut ScriptedDraws::new([2, 0])).unwrap();

        assert_eq!(round.drawn_a, card("a-3", 3));
        assert_eq!(round.drawn_b, card("b-1", 1));
        assert_eq!(round.outcome.winner, Winner::A);
        assert_eq!(round.deck_a, deck(&[("a-1", 1), ("a-2", 2)]));
        assert_eq!(round.deck_b, deck(&[("b-2", 2), ("b-3", 3)]));
        assert!(!round.all_cards_used);
    }

    #[test]
    fn test_inputs_untouched() {
        let deck_a = deck(&[("a-1", 1), ("a-2", 2)]);
        let deck_b = deck(&[("b-1", 1), ("b-2", 2)]);

        let _ = play_round(&deck_a, &deck_b, &mut ScriptedDraws::new([1, 1])).unwrap();

        assert_eq!(deck_a.len(), 2);
        assert_eq!(deck_b.len(), 2);
    }

    #[test]
    fn test_last_cards_end_the_game() {
        let round = play_round(
            &deck(&[("a-4", 4)]),
            &deck(&[("b-4", 4)]),
            &mut ScriptedDraws::default(),
        )
        .unwrap();

        assert!(round.all_cards_used);
        assert!(round.deck_a.is_empty());
        assert!(round.deck_b.is_empty());
        assert_eq!(round.outcome.winner, Winner::Deuce);
    }

    #[test]
    fn test_one_side_empty_is_not_terminal() {
        let round = play_round(
            &deck(&[("a-1", 1)]),
            &deck(&[("b-1", 1), ("b-2", 2)]),
            &mut ScriptedDraws::default(),
        )
        .unwrap();

        assert!(round.deck_a.is_empty());
        assert_eq!(round.deck_b.len(), 1);
        assert!(!round.all_cards_used);
    }

    #[test]
    fn test_empty_deck_rejected() {
        let full = deck(&[("a-1", 1)]);
        let empty = Deck::new();
        let mut rng = ScriptedDraws::default();

        assert_eq!(
            play_round(&empty, &full, &mut rng),
            Err(EngineError::DeckExhausted { side: Side::A })
        );
        assert_eq!(
            play_round(&full, &empty, &mut rng),
            Err(EngineError::DeckExhausted { side: Side::B })
        );
        assert_eq!(
            play_round(&empty, &empty, &mut rng),
            Err(EngineError::DeckExhausted { side: Side::A })
        );
    }
}
