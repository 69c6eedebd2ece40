//! Engine configuration.
//!
//! Configuration is plain data read from TOML:
//!
//! ```toml
//! seed = 42
//! catalog = "alphabetic"
//!
//! [deck]
//! "a-1" = 2
//! "a-4" = 1
//! ```
//!
//! A `custom` catalog lists its cards inline:
//!
//! ```toml
//! catalog = "custom"
//!
//! [deck]
//! sun = 1
//!
//! [[cards]]
//! identifier = "sun"
//! score = 4
//! image = "sun.png"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCatalog};
use crate::core::GameRng;
use crate::deck::DeckConfig;
use crate::error::ConfigError;

/// Which card set the engine looks identifiers up in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Alphabetic,
    #[default]
    LifeCycle,
    /// The cards listed in [`EngineConfig::cards`].
    Custom,
}

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed seed for reproducible games. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Card set.
    pub catalog: CatalogKind,
    /// Deck used by games started without an explicit configuration.
    pub deck: DeckConfig,
    /// Catalog entries for `catalog = "custom"`.
    pub cards: Vec<Card>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            catalog: CatalogKind::default(),
            deck: DeckConfig::life_cycle(),
            cards: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Parse from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Build the configured catalog.
    pub fn catalog(&self) -> Result<CardCatalog, ConfigError> {
        match self.catalog {
            CatalogKind::Alphabetic => Ok(CardCatalog::alphabetic()),
            CatalogKind::LifeCycle => Ok(CardCatalog::life_cycle()),
            CatalogKind::Custom if self.cards.is_empty() => Err(ConfigError::EmptyCatalog),
            CatalogKind::Custom => CardCatalog::from_cards(self.cards.iter().cloned()),
        }
    }

    /// Randomness source for a new game.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();

        assert_eq!(config.seed, None);
        assert_eq!(config.catalog, CatalogKind::LifeCycle);
        assert_eq!(config.deck, DeckConfig::life_cycle());
        assert_eq!(config.catalog().unwrap().len(), 8);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_parse_alphabetic() {
        let config = EngineConfig::from_toml_str(
            r#"
            seed = 42
            catalog = "alphabetic"

            [deck]
            "a-1" = 2
            "b-4" = 1
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.catalog, CatalogKind::Alphabetic);
        assert_eq!(config.deck.count("a-1"), 2);
        assert_eq!(config.deck.count("b-4"), 1);
        assert_eq!(config.deck.deck_size(&config.catalog().unwrap()), 3);
    }

    #[test]
    fn test_parse_custom_catalog() {
        let config = EngineConfig::from_toml_str(
            r#"
            catalog = "custom"

            [deck]
            sun = 1

            [[cards]]
            identifier = "sun"
            score = 4
            image = "sun.png"

            [[cards]]
            insect = "moon"
            score = 1
            image = "moon.png"
            "#,
        )
        .unwrap();

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.identifiers(), vec!["moon", "sun"]);
        assert_eq!(catalog.get("sun").unwrap().score(), 4);
    }

    #[test]
    fn test_custom_catalog_errors() {
        let empty = EngineConfig {
            catalog: CatalogKind::Custom,
            ..EngineConfig::default()
        };
        assert!(matches!(empty.catalog(), Err(ConfigError::EmptyCatalog)));

        let duplicate = EngineConfig {
            catalog: CatalogKind::Custom,
            cards: vec![Card::new("x", 1, "x.png"), Card::new("x", 2, "x.png")],
            ..EngineConfig::default()
        };
        assert!(matches!(duplicate.catalog(), Err(ConfigError::DuplicateCard { .. })));
    }

    #[test]
    fn test_parse_error() {
        let err = EngineConfig::from_toml_str("seed = \"not a number\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use crate::core::DrawSource;

        let config = EngineConfig {
            seed: Some(7),
            ..EngineConfig::default()
        };
        let mut first = config.rng();
        let mut second = config.rng();

        assert_eq!(first.seed(), 7);
        assert_eq!(first.pick_index(100), second.pick_index(100));
    }
}
