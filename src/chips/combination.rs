use crate::core::{round_cents, within_tolerance};

use super::strategy::AllocationStrategy;

/// How many chips of one denomination go into a stack and what they're worth.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChipAllocation {
    /// Face value printed on the chip.
    pub denomination: f64,
    /// Number of chips in each player's stack.
    pub quantity: u32,
    /// Cash value of a single chip.
    pub value_per_chip: f64,
    /// `quantity * value_per_chip` rounded to cents.
    pub total_value: f64,
}

impl ChipAllocation {
    pub fn new(denomination: f64, quantity: u32, value_per_chip: f64) -> Self {
        Self {
            denomination,
            quantity,
            value_per_chip,
            total_value: round_cents(f64::from(quantity) * value_per_chip),
        }
    }
}

/// One candidate starting stack.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combination {
    /// Unique within one calculation.
    pub id: String,
    /// Label of the strategy that produced it.
    pub name: String,
    pub strategy: AllocationStrategy,
    /// One entry per denomination, ascending.
    pub allocations: Vec<ChipAllocation>,
    /// The buy-in that was asked for.
    pub target_total: f64,
    /// Sum of the allocation totals, rounded to cents.
    pub actual_total: f64,
}

impl Combination {
    pub fn new(
        strategy: AllocationStrategy,
        allocations: Vec<ChipAllocation>,
        target_total: f64,
    ) -> Self {
        let actual_total = round_cents(allocations.iter().map(|a| a.total_value).sum());
        Self {
            id: strategy.id().to_string(),
            name: strategy.name().to_string(),
            strategy,
            allocations,
            target_total,
            actual_total,
        }
    }

    /// Number of chips in one player's stack.
    pub fn total_chips(&self) -> u64 {
        self.allocations.iter().map(|a| u64::from(a.quantity)).sum()
    }

    /// How many chips of each denomination the host needs to hand out for a
    /// table of `players`.
    ///
    /// ```
    /// use poker_homegame::chips::{compute_distribution, Blinds};
    ///
    /// let blinds = Blinds::new(0.10, 0.20).unwrap();
    /// let combinations = compute_distribution(&[1.0, 5.0], 20.0, Some(blinds));
    ///
    /// let needed = combinations[0].chips_for_players(6);
    /// assert_eq!(needed, vec![(1.0, 600), (5.0, 300)]);
    /// ```
    pub fn chips_for_players(&self, players: u32) -> Vec<(f64, u64)> {
        self.allocations
            .iter()
            .map(|a| (a.denomination, u64::from(a.quantity) * u64::from(players)))
            .collect()
    }

    /// Does the stack add up to the buy-in within `tolerance`?
    pub fn is_balanced(&self, tolerance: f64) -> bool {
        within_tolerance(self.actual_total, self.target_total, tolerance)
    }
}
