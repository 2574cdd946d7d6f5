use thiserror::Error;

/// Problems with the player list handed to the settlement calculator.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum SettlementError {
    #[error("at least one player is required")]
    NoPlayers,

    #[error("buy-in {index} for player {player} must be non-negative, got {value}")]
    InvalidBuyIn {
        player: String,
        index: usize,
        value: f64,
    },

    #[error("final balance for player {player} must be non-negative, got {value}")]
    InvalidFinalBalance { player: String, value: f64 },
}
