//! Core engine types: sides and randomness.
//!
//! Everything here is game-agnostic plumbing the rules and session
//! layers build on.

pub mod rng;
pub mod side;

pub use rng::{DrawSource, GameRng, GameRngState, ScriptedDraws};
pub use side::{Side, SideMap};
