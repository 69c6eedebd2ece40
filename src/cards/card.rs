//! Card values.
//!
//! A `Card` is a plain value: copying one into a deck produces an
//! independent instance, and nothing in the engine hands out a mutable
//! reference to a card that another deck could observe.

use serde::{Deserialize, Serialize};

/// A single card instance.
///
/// The identifier names the catalog entry, not the instance: a deck built
/// with `ladybug1 = 3` holds three equal `Card` values.
///
/// ## Example
///
/// ```
/// use circle_of_life::cards::Card;
///
/// let card = Card::new("ladybug4", 4, "ladybug4.png");
/// assert_eq!(card.identifier(), "ladybug4");
/// assert_eq!(card.score(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    #[serde(alias = "insect")]
    identifier: String,
    score: u32,
    image: String,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(identifier: impl Into<String>, score: u32, image: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            score,
            image: image.into(),
        }
    }

    /// Catalog identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Comparison score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Opaque image reference.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.identifier, self.score)
    }
}
