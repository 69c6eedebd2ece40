//! Card system: card values and the catalog they come from.
//!
//! ## Key Types
//!
//! - `Card`: Immutable `{identifier, score, image}` value
//! - `CardCatalog`: Identifier lookup, injected into the engine

pub mod card;
pub mod catalog;

pub use card::Card;
pub use catalog::CardCatalog;
