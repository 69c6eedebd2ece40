//! # circle-of-life
//!
//! Round engine for a two-player, war-style card comparison game.
//!
//! ## Design Principles
//!
//! 1. **Stateless Core**: The engine never stores a game. Callers own the
//!    `GameSession` payload and pass it back whole on every call.
//!
//! 2. **Injectable Randomness**: Every shuffle and draw goes through a
//!    `DrawSource` passed by the caller. Tests script it; concurrent games
//!    each fork their own `GameRng`.
//!
//! 3. **Configuration Over Convention**: The card set is a `CardCatalog`
//!    handed to the engine, not a constant baked into it.
//!
//! ## Game Flow
//!
//! - `new_game`: build two equally composed, independently shuffled decks
//! - `play_round`: draw a random card from each deck, higher score wins
//! - `end_game`: tally round wins into the final verdict
//!
//! ## Modules
//!
//! - `core`: Sides, per-side storage, randomness
//! - `cards`: Card values and catalogs
//! - `deck`: Deck configuration, building and drawing
//! - `rules`: Comparison, draw-and-resolve, tally
//! - `session`: Session payload and the `RoundEngine`
//! - `config`: TOML engine configuration

pub mod core;
pub mod cards;
pub mod deck;
pub mod rules;
pub mod session;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use crate::core::{DrawSource, GameRng, GameRngState, ScriptedDraws, Side, SideMap};

pub use crate::cards::{Card, CardCatalog};

pub use crate::deck::{build_deck, Deck, DeckConfig, Draw};

pub use crate::rules::{compare, play_round, tally, FinalResult, RoundDraw, RoundOutcome, Winner};

pub use crate::session::{GameEnd, GameSession, RoundEngine, RoundReport};

pub use crate::config::{CatalogKind, EngineConfig};

pub use crate::error::{ConfigError, EngineError, EngineResult, SnapshotError};
