//! Settling up after the game.
//!
//! Each player's net is what they cashed out minus everything they bought
//! in for. Losers pay winners. [`settle`] matches the biggest loser with the
//! biggest winner over and over, which keeps the number of payments down to
//! at most one fewer than the number of players who are up or down.
//!
//! Largest-first matching is not guaranteed to find the fewest possible
//! payments. Finding that is a subset-sum problem; in practice greedy is
//! optimal or one payment off for the table sizes of a home game.

mod error;
mod player;
mod report;
mod settle;

pub use error::SettlementError;
pub use player::{NetOutcome, Player, PlayerSummary};
pub use report::{SettlementReport, Transaction};
pub use settle::{settle, validate_players};
