use tracing::{debug, instrument, trace, warn};

use super::combination::Combination;
use super::config::ChipConfig;
use super::drift::absorb_drift;
use super::error::Result;
use super::request::{Blinds, DistributionRequest};
use super::values::{blind_anchored_values, proportional_values};

/// Plans starting stacks.
///
/// Every configured strategy is tried. Those that produce a stack with at
/// least one of every chip and a total within tolerance of the buy-in are
/// returned in strategy order. An empty result means no strategy could make
/// the chips fit the buy-in.
///
/// # Example
///
/// ```
/// use poker_homegame::chips::{Blinds, ChipCalculator, DistributionRequest};
///
/// let calculator = ChipCalculator::default();
/// let request = DistributionRequest::new(vec![1.0, 5.0, 25.0, 100.0], 20.0)
///     .with_blinds(Blinds::new(0.10, 0.20).unwrap());
///
/// let combinations = calculator.compute(&request);
/// assert!(!combinations.is_empty());
/// assert_eq!(combinations[0].allocations[0].value_per_chip, 0.10);
/// assert_eq!(combinations[0].allocations[1].value_per_chip, 0.20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChipCalculator {
    config: ChipConfig,
}

impl ChipCalculator {
    /// Create a calculator with a validated configuration.
    pub fn new(config: ChipConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ChipConfig {
        &self.config
    }

    /// Every stack the configured strategies can build for this request.
    ///
    /// Invalid requests produce no stacks; use [`Self::try_compute`] to find
    /// out why.
    pub fn compute(&self, request: &DistributionRequest) -> Vec<Combination> {
        match self.try_compute(request) {
            Ok(combinations) => combinations,
            Err(error) => {
                warn!(%error, "Rejected chip distribution request");
                Vec::new()
            }
        }
    }

    /// Like [`Self::compute`] but reports why a request was rejected.
    #[instrument(level = "debug", skip(self))]
    pub fn try_compute(&self, request: &DistributionRequest) -> Result<Vec<Combination>> {
        request.validate()?;

        let denominations = request.normalized_denominations();
        let values = match &request.blinds {
            Some(blinds) => {
                blind_anchored_values(denominations.len(), blinds, &self.config.blind_multipliers)
            }
            None => proportional_values(&denominations, request.buy_in, &self.config.nice_values),
        };
        debug!(?denominations, ?values, "Assigned chip values");

        let mut combinations: Vec<Combination> = Vec::with_capacity(self.config.strategies.len());
        for strategy in &self.config.strategies {
            let Some(quantities) = strategy.quantities(&values, request.buy_in) else {
                continue;
            };
            let allocations =
                match absorb_drift(&denominations, &values, &quantities, request.buy_in) {
                    Some(allocations) => allocations,
                    None => {
                        debug!(
                            strategy = strategy.id(),
                            ?quantities,
                            "Stack left nothing for the smallest chip"
                        );
                        continue;
                    }
                };

            let combination = Combination::new(*strategy, allocations, request.buy_in);
            if !combination.is_balanced(self.config.tolerance) {
                warn!(
                    strategy = strategy.id(),
                    actual_total = combination.actual_total,
                    target_total = combination.target_total,
                    "Stack total outside tolerance"
                );
                continue;
            }

            // Strategies can agree, e.g. with a single denomination.
            let duplicate = combinations.iter().any(|existing| {
                existing
                    .allocations
                    .iter()
                    .zip(&combination.allocations)
                    .all(|(a, b)| a.quantity == b.quantity)
            });
            if duplicate {
                trace!(strategy = strategy.id(), "Same stack as an earlier strategy");
                continue;
            }

            combinations.push(combination);
        }

        debug!(count = combinations.len(), "Computed chip distributions");
        Ok(combinations)
    }
}

/// Plan starting stacks with the default configuration.
///
/// Denominations may be in any order and may repeat. Returns an empty list
/// when the request is invalid or the chips can't be made to fit the buy-in.
///
/// ```
/// use poker_homegame::chips::{compute_distribution, Blinds};
///
/// let blinds = Blinds::new(0.10, 0.20).unwrap();
/// let combinations = compute_distribution(&[25.0], 20.0, Some(blinds));
///
/// assert_eq!(combinations.len(), 1);
/// assert_eq!(combinations[0].allocations[0].quantity, 200);
/// assert_eq!(combinations[0].actual_total, 20.0);
/// ```
pub fn compute_distribution(
    denominations: &[f64],
    buy_in: f64,
    blinds: Option<Blinds>,
) -> Vec<Combination> {
    let request = DistributionRequest {
        denominations: denominations.to_vec(),
        buy_in,
        blinds,
    };
    ChipCalculator::default().compute(&request)
}
