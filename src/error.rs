//! Error types for the round engine and its configuration layer.

use thiserror::Error;

use crate::core::Side;

/// Rejected engine operations.
///
/// Both conditions are reported to the caller, who must start a new
/// session instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("game is already over")]
    GameOver,

    #[error("{side} has no cards left to draw")]
    DeckExhausted { side: Side },
}

/// Failure to load an [`EngineConfig`](crate::core::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("catalog lists card {identifier:?} more than once")]
    DuplicateCard { identifier: String },

    #[error("card {identifier:?} must have a positive score")]
    InvalidScore { identifier: String },

    #[error("custom catalog selected but no cards were given")]
    EmptyCatalog,
}

/// Failure to encode or decode a session snapshot.
#[derive(Debug, Error)]
#[error("session snapshot error: {0}")]
pub struct SnapshotError(#[from] bincode::Error);

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_messages() {
        assert_eq!(EngineError::GameOver.to_string(), "game is already over");
        assert_eq!(
            EngineError::DeckExhausted { side: Side::B }.to_string(),
            "Player 2 has no cards left to draw"
        );
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::DuplicateCard {
            identifier: "a-1".to_string(),
        };
        assert_eq!(err.to_string(), r#"catalog lists card "a-1" more than once"#);
    }
}
