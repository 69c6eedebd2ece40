//! Game rules: round resolution, draw-and-resolve, final tally.
//!
//! Every function here is pure apart from the injected `DrawSource`.
//! Nothing holds game state between calls.

pub mod resolver;
pub mod round;
pub mod tally;

pub use resolver::{compare, RoundOutcome, Winner};
pub use round::{play_round, RoundDraw};
pub use tally::{tally, FinalResult};
