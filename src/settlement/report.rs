use crate::core::{is_negligible, round_cents};

use super::player::{NetOutcome, PlayerSummary};

/// One payment from a player who lost to a player who won.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {
    pub from: String,
    pub to: String,
    /// Always positive and rounded to cents.
    pub amount: f64,
}

/// Everything the settle-up screen shows.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettlementReport {
    /// One per player, in input order.
    pub summaries: Vec<PlayerSummary>,
    /// Payments that zero everyone out.
    pub transactions: Vec<Transaction>,
}

impl SettlementReport {
    /// Sum of all payments.
    pub fn total_transferred(&self) -> f64 {
        round_cents(self.transactions.iter().map(|t| t.amount).sum())
    }

    /// Sum of every net. Anything but zero means the cash-outs don't add up
    /// to the buy-ins, usually a typo or a chip that went missing.
    pub fn discrepancy(&self) -> f64 {
        round_cents(self.summaries.iter().map(|s| s.net).sum())
    }

    pub fn is_balanced(&self) -> bool {
        is_negligible(self.discrepancy())
    }

    pub fn winners(&self) -> impl Iterator<Item = &PlayerSummary> {
        self.summaries
            .iter()
            .filter(|s| s.outcome() == NetOutcome::Profit)
    }

    pub fn losers(&self) -> impl Iterator<Item = &PlayerSummary> {
        self.summaries
            .iter()
            .filter(|s| s.outcome() == NetOutcome::Loss)
    }
}
