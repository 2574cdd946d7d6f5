use crate::core::CENT_EPSILON;

use super::error::{ChipError, Result};

/// The small and big blind of the game.
///
/// When blinds are known the two smallest chips are priced at exactly the
/// blinds so posting them never needs change.
///
/// # Example
///
/// ```
/// use poker_homegame::chips::Blinds;
///
/// let blinds = Blinds::new(0.25, 0.50).unwrap();
/// assert_eq!(blinds.small, 0.25);
///
/// assert!(Blinds::new(0.50, 0.25).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Blinds {
    pub small: f64,
    pub big: f64,
}

impl Blinds {
    /// Create validated blinds. The small blind must be positive and the big
    /// blind must be strictly larger.
    pub fn new(small: f64, big: f64) -> Result<Self> {
        let blinds = Self { small, big };
        blinds.validate()?;
        Ok(blinds)
    }

    pub fn validate(&self) -> Result<()> {
        if !is_positive_amount(self.small) {
            return Err(ChipError::InvalidSmallBlind(self.small));
        }
        if !is_positive_amount(self.big) || self.big <= self.small {
            return Err(ChipError::BigBlindNotAboveSmall {
                small: self.small,
                big: self.big,
            });
        }
        Ok(())
    }
}

/// Everything needed to plan a starting stack.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionRequest {
    /// Chip face values. Order and duplicates don't matter.
    pub denominations: Vec<f64>,
    /// What each player pays for their stack.
    pub buy_in: f64,
    /// Optional blind structure used to anchor chip values.
    #[cfg_attr(feature = "serde", serde(default))]
    pub blinds: Option<Blinds>,
}

impl DistributionRequest {
    pub fn new(denominations: Vec<f64>, buy_in: f64) -> Self {
        Self {
            denominations,
            buy_in,
            blinds: None,
        }
    }

    /// Anchor chip values to these blinds.
    pub fn with_blinds(mut self, blinds: Blinds) -> Self {
        self.blinds = Some(blinds);
        self
    }

    /// Check the preconditions of the chip calculator.
    pub fn validate(&self) -> Result<()> {
        if self.denominations.is_empty() {
            return Err(ChipError::EmptyDenominations);
        }
        if let Some(&bad) = self
            .denominations
            .iter()
            .find(|d| !is_positive_amount(**d))
        {
            return Err(ChipError::InvalidDenomination(bad));
        }
        if !is_positive_amount(self.buy_in) {
            return Err(ChipError::InvalidBuyIn(self.buy_in));
        }
        if let Some(blinds) = &self.blinds {
            blinds.validate()?;
        }
        Ok(())
    }

    /// The denominations sorted ascending with duplicates removed.
    pub fn normalized_denominations(&self) -> Vec<f64> {
        normalize_denominations(&self.denominations)
    }
}

/// Finite and strictly positive. NaN fails.
fn is_positive_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

/// Sort ascending and drop values that are the same to within half a cent.
pub(crate) fn normalize_denominations(denominations: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = denominations.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.dedup_by(|a, b| (*a - *b).abs() < CENT_EPSILON);
    sorted
}
