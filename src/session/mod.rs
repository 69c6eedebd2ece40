//! Session-level game flow.
//!
//! - `GameSession`: caller-owned payload threaded through every call
//! - `RoundEngine`: `new_game`, `compare`, `play_round`, `end_game`

pub mod engine;
pub mod state;

pub use engine::{GameEnd, RoundEngine, RoundReport};
pub use state::GameSession;
