use crate::core::{round_cents, CENT_EPSILON};

/// A player at the table as the settle-up form sees them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Player {
    pub id: String,
    /// May be blank until someone types it in.
    pub name: String,
    /// Every buy-in, including re-buys.
    pub buy_ins: Vec<f64>,
    /// Cash value of the chips they walked away with.
    pub final_balance: f64,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            buy_ins: Vec::new(),
            final_balance: 0.0,
        }
    }

    /// Add a buy-in or re-buy.
    pub fn with_buy_in(mut self, amount: f64) -> Self {
        self.buy_ins.push(amount);
        self
    }

    pub fn with_final_balance(mut self, amount: f64) -> Self {
        self.final_balance = amount;
        self
    }

    /// Everything they put in, rounded to cents.
    pub fn total_buy_in(&self) -> f64 {
        round_cents(self.buy_ins.iter().sum())
    }

    /// The name to show for the player at `index`. Blank names become
    /// "Player 1", "Player 2", and so on.
    pub fn display_name(&self, index: usize) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            format!("Player {}", index + 1)
        } else {
            trimmed.to_string()
        }
    }
}

/// Whether a player finished up, down, or even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NetOutcome {
    Profit,
    Loss,
    Even,
}

/// A player's result for the night.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSummary {
    pub name: String,
    pub total_buy_in: f64,
    pub final_balance: f64,
    /// `final_balance - total_buy_in`, rounded to cents.
    pub net: f64,
}

impl PlayerSummary {
    pub fn from_player(player: &Player, index: usize) -> Self {
        let total_buy_in = player.total_buy_in();
        Self {
            name: player.display_name(index),
            total_buy_in,
            final_balance: player.final_balance,
            net: round_cents(player.final_balance - total_buy_in),
        }
    }

    pub fn outcome(&self) -> NetOutcome {
        if self.net > CENT_EPSILON {
            NetOutcome::Profit
        } else if self.net < -CENT_EPSILON {
            NetOutcome::Loss
        } else {
            NetOutcome::Even
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_buy_in_with_rebuys() {
        let player = Player::new("1", "Alice")
            .with_buy_in(20.0)
            .with_buy_in(10.1)
            .with_buy_in(10.2);
        assert_eq!(player.total_buy_in(), 40.3);
    }

    #[test]
    fn test_no_buy_ins() {
        assert_eq!(Player::new("1", "Alice").total_buy_in(), 0.0);
    }

    #[test]
    fn test_display_name_default() {
        let player = Player::new("7", "   ");
        assert_eq!(player.display_name(2), "Player 3");
        assert_eq!(Player::new("7", " Bob ").display_name(2), "Bob");
    }

    #[test]
    fn test_summary_outcomes() {
        let winner = Player::new("1", "A").with_buy_in(20.0).with_final_balance(35.0);
        let loser = Player::new("2", "B").with_buy_in(20.0).with_final_balance(5.0);
        let even = Player::new("3", "C")
            .with_buy_in(20.0)
            .with_final_balance(20.004);

        let summary = PlayerSummary::from_player(&winner, 0);
        assert_eq!(summary.net, 15.0);
        assert_eq!(summary.outcome(), NetOutcome::Profit);

        let summary = PlayerSummary::from_player(&loser, 1);
        assert_eq!(summary.net, -15.0);
        assert_eq!(summary.outcome(), NetOutcome::Loss);

        let summary = PlayerSummary::from_player(&even, 2);
        assert_eq!(summary.net, 0.0);
        assert_eq!(summary.outcome(), NetOutcome::Even);
    }
}
