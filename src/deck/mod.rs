//! Decks: construction from a configuration and stateless draws.
//!
//! ## Key Types
//!
//! - `DeckConfig`: Identifier → copy count
//! - `Deck`: Persistent card sequence for one side
//! - `Draw`: Result of taking one card out of a deck

pub mod builder;
pub mod pile;

pub use builder::{build_deck, DeckConfig};
pub use pile::{Deck, Draw};
