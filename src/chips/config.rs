//! # Chip Calculator Configuration
//!
//! [`ChipConfig`] controls which strategies the calculator runs and which
//! amounts it considers "nice". The defaults are what most home games want;
//! the config exists so a host with an odd chip set can tweak it.
//!
//! With the `serde` feature a config can be read from JSON. Missing fields
//! take their default.
//!
//! ```json
//! {
//!   "strategies": ["two_group_split", "balanced"],
//!   "tolerance": 0.01
//! }
//! ```
use super::error::{ChipError, Result};
use super::strategy::AllocationStrategy;
use super::values::{BLIND_MULTIPLIERS, NICE_VALUES};
use crate::core::TOTAL_TOLERANCE;

/// Configuration for the chip calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChipConfig {
    /// Strategies to run, in the order their results are returned
    pub strategies: Vec<AllocationStrategy>,
    /// Multiples of the small blind used to price chips above the big blind
    pub blind_multipliers: Vec<f64>,
    /// Amounts chips snap to when there are no blinds
    pub nice_values: Vec<f64>,
    /// How far a stack's total may be from the buy-in and still be offered
    pub tolerance: f64,
}

impl Default for ChipConfig {
    fn default() -> Self {
        Self {
            strategies: AllocationStrategy::ALL.to_vec(),
            blind_multipliers: BLIND_MULTIPLIERS.to_vec(),
            nice_values: NICE_VALUES.to_vec(),
            tolerance: TOTAL_TOLERANCE,
        }
    }
}

impl ChipConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a configuration from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ChipConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the chip calculator configuration
    pub fn validate(&self) -> Result<()> {
        if self.strategies.is_empty() {
            return Err(ChipError::InvalidConfig(
                "at least one strategy is required".to_string(),
            ));
        }

        for (idx, strategy) in self.strategies.iter().enumerate() {
            if self.strategies[..idx].contains(strategy) {
                return Err(ChipError::InvalidConfig(format!(
                    "strategy {} is listed more than once",
                    strategy.id()
                )));
            }
        }

        validate_ascending("blind_multipliers", &self.blind_multipliers)?;
        validate_ascending("nice_values", &self.nice_values)?;

        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ChipError::InvalidConfig(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }

        Ok(())
    }
}

fn validate_ascending(field: &str, values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(ChipError::InvalidConfig(format!("{field} must not be empty")));
    }
    if values.iter().any(|v| !v.is_finite() || *v <= 0.0) {
        return Err(ChipError::InvalidConfig(format!(
            "{field} must all be positive"
        )));
    }
    if values.windows(2).any(|pair| pair[1] <= pair[0]) {
        return Err(ChipError::InvalidConfig(format!(
            "{field} must be strictly ascending"
        )));
    }
    Ok(())
}
