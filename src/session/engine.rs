//! The round engine: the four operations a caller drives a game with.
//!
//! ```
//! use circle_of_life::core::GameRng;
//! use circle_of_life::session::RoundEngine;
//!
//! let engine = RoundEngine::life_cycle();
//! let mut rng = GameRng::new(42);
//!
//! let mut session = engine.new_default_game(&mut rng);
//! while !session.game_over {
//!     session = engine.play_round(&session, &mut rng).unwrap().session;
//! }
//!
//! let end = engine.end_game(&session);
//! assert!(end.final_result.result.ends_with(")"));
//! ```

use tracing::{info, warn};

use super::state::GameSession;
use crate::cards::{Card, CardCatalog};
use crate::config::EngineConfig;
use crate::core::{DrawSource, Side};
use crate::deck::{build_deck, DeckConfig};
use crate::error::{ConfigError, EngineError, EngineResult};
use crate::rules::{self, FinalResult, RoundOutcome};

/// Result of a session-level round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// The session to hand back to the caller.
    pub session: GameSession,
    pub outcome: RoundOutcome,
    pub drawn_a: Card,
    pub drawn_b: Card,
    /// Both decks ran out this round; `session.game_over` is now set.
    pub all_cards_used: bool,
}

/// Result of ending a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEnd {
    /// The terminal session, with `result` set to the verdict.
    pub session: GameSession,
    pub final_result: FinalResult,
}

/// Stateless round engine.
///
/// Holds only static data: the card catalog and a default deck
/// configuration. Sessions and randomness are passed in on every call, so
/// a single engine can serve any number of concurrent games as long as
/// each game uses its own `DrawSource`.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    catalog: CardCatalog,
    deck_config: DeckConfig,
}

impl RoundEngine {
    /// Create an engine over a catalog, with an empty default deck.
    #[must_use]
    pub fn new(catalog: CardCatalog) -> Self {
        Self {
            catalog,
            deck_config: DeckConfig::new(),
        }
    }

    /// The life-cycle catalog with one copy of each card.
    #[must_use]
    pub fn life_cycle() -> Self {
        Self::new(CardCatalog::life_cycle()).with_deck_config(DeckConfig::life_cycle())
    }

    /// Build an engine from configuration.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.catalog()?).with_deck_config(config.deck.clone()))
    }

    /// Set the default deck configuration (builder pattern).
    #[must_use]
    pub fn with_deck_config(mut self, deck_config: DeckConfig) -> Self {
        self.deck_config = deck_config;
        self
    }

    /// The catalog identifiers are looked up in.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Deck configuration used by [`RoundEngine::new_default_game`].
    #[must_use]
    pub fn deck_config(&self) -> &DeckConfig {
        &self.deck_config
    }

    /// Start a game.
    ///
    /// Both sides get the same multiset of cards, shuffled independently.
    pub fn new_game<R: DrawSource>(&self, config: &DeckConfig, rng: &mut R) -> GameSession {
        let deck_a = build_deck(&self.catalog, config, rng);
        let deck_b = build_deck(&self.catalog, config, rng);
        debug_assert!(deck_a.same_composition(&deck_b));

        info!(cards_per_side = deck_a.len(), "new game");
        GameSession::new(deck_a, deck_b)
    }

    /// Start a game with the engine's default deck configuration.
    pub fn new_default_game<R: DrawSource>(&self, rng: &mut R) -> GameSession {
        self.new_game(&self.deck_config, rng)
    }

    /// Compare two cards.
    #[must_use]
    pub fn compare(&self, card_a: &Card, card_b: &Card) -> RoundOutcome {
        rules::compare(card_a, card_b)
    }

    /// Play one round of a session.
    ///
    /// The returned session has one card fewer in each deck, the outcome
    /// appended to its history, the winner's score bumped and `result`
    /// set to the round message. It is marked `game_over` when both
    /// decks are empty.
    ///
    /// ## Errors
    ///
    /// - [`EngineError::GameOver`] if the session is already over
    /// - [`EngineError::DeckExhausted`] if either deck is empty
    pub fn play_round<R: DrawSource>(&self, session: &GameSession, rng: &mut R) -> EngineResult<RoundReport> {
        if session.game_over {
            warn!(rounds = session.rounds_played(), "round requested after game over");
            return Err(EngineError::GameOver);
        }

        let draw = rules::play_round(&session.decks.a, &session.decks.b, rng).map_err(|err| {
            warn!(error = %err, "round rejected");
            err
        })?;

        let mut next = session.clone();
        next.decks.a = draw.deck_a;
        next.decks.b = draw.deck_b;
        if let Some(side) = draw.outcome.winner.side() {
            next.scores[side] += 1;
        }
        next.result = draw.outcome.result.clone();
        next.round_results.push_back(draw.outcome.clone());
        next.game_over = draw.all_cards_used;

        if draw.all_cards_used {
            info!(
                rounds = next.rounds_played(),
                a_wins = next.scores[Side::A],
                b_wins = next.scores[Side::B],
                "all cards used"
            );
        }

        Ok(RoundReport {
            session: next,
            outcome: draw.outcome,
            drawn_a: draw.drawn_a,
            drawn_b: draw.drawn_b,
            all_cards_used: draw.all_cards_used,
        })
    }

    /// End a game and tally its rounds.
    ///
    /// Can be called at any point, including before the decks run out.
    /// Ending an already ended session gives the same verdict again.
    #[must_use]
    pub fn end_game(&self, session: &GameSession) -> GameEnd {
        let final_result = rules::tally(&session.round_results);
        info!(
            rounds = session.rounds_played(),
            a_wins = final_result.a_wins,
            b_wins = final_result.b_wins,
            winner = ?final_result.winner,
            "game ended"
        );

        let mut session = session.clone();
        session.game_over = true;
        session.result = final_result.result.clone();

        GameEnd { session, final_result }
    }
}
