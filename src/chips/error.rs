use thiserror::Error;

/// Reasons a chip distribution request or configuration is rejected.
#[derive(Debug, Error)]
pub enum ChipError {
    #[error("at least one chip denomination is required")]
    EmptyDenominations,

    #[error("chip denomination must be positive, got {0}")]
    InvalidDenomination(f64),

    #[error("buy_in must be positive, got {0}")]
    InvalidBuyIn(f64),

    #[error("small_blind must be positive, got {0}")]
    InvalidSmallBlind(f64),

    #[error("big_blind {big} must be greater than small_blind {small}")]
    BigBlindNotAboveSmall { small: f64, big: f64 },

    #[error("Configuration validation error: {0}")]
    InvalidConfig(String),

    #[cfg(feature = "serde")]
    #[error("Failed to parse chip config: {0}")]
    ParseConfig(#[from] serde_json::Error),
}

/// Result type for chip calculator operations
pub type Result<T> = std::result::Result<T, ChipError>;
