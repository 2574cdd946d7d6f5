use tracing::trace;

use crate::core::{round_cents, CENT_EPSILON};

/// Shape of a stack: the smallest chip gets `base` chips and each larger
/// denomination gets `decay` times as many as the one below it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DecayPattern {
    base: f64,
    decay: f64,
}

impl DecayPattern {
    fn weight(&self, position: usize) -> f64 {
        self.base * self.decay.powi(position as i32)
    }
}

const HEAVY_SMALL: DecayPattern = DecayPattern {
    base: 40.0,
    decay: 0.5,
};
const BALANCED: DecayPattern = DecayPattern {
    base: 20.0,
    decay: 0.7,
};
const COMPACT: DecayPattern = DecayPattern {
    base: 10.0,
    decay: 0.9,
};

/// The ways the calculator can decide how many chips of each value go into
/// a starting stack.
///
/// None of them is better than another. Every strategy that produces a stack
/// is offered so the host can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum AllocationStrategy {
    /// Split the chips into a small half and a large half, each worth half
    /// the buy-in.
    TwoGroupSplit,
    /// Lots of small chips, few big ones. Good for low stakes.
    HeavySmall,
    /// Counts fall off gently with chip value.
    Balanced,
    /// Roughly even counts so most of the value sits in big chips and the
    /// stack is short.
    Compact,
}

impl AllocationStrategy {
    /// Every strategy, in the order they are offered.
    pub const ALL: [AllocationStrategy; 4] = [
        AllocationStrategy::TwoGroupSplit,
        AllocationStrategy::HeavySmall,
        AllocationStrategy::Balanced,
        AllocationStrategy::Compact,
    ];

    /// Label shown to the host.
    pub fn name(&self) -> &'static str {
        match self {
            AllocationStrategy::TwoGroupSplit => "Two-Group Split",
            AllocationStrategy::HeavySmall => "Heavy Small",
            AllocationStrategy::Balanced => "Balanced",
            AllocationStrategy::Compact => "Compact",
        }
    }

    /// Stable identifier, unique per strategy.
    pub fn id(&self) -> &'static str {
        match self {
            AllocationStrategy::TwoGroupSplit => "two-group-split",
            AllocationStrategy::HeavySmall => "heavy-small",
            AllocationStrategy::Balanced => "balanced",
            AllocationStrategy::Compact => "compact",
        }
    }

    /// How many chips of each value (ascending) make up a stack worth about
    /// `target`. Every quantity is at least one.
    ///
    /// The count of the smallest chip is only an estimate. The exact cents
    /// are fixed up afterwards by pushing any leftover into the smallest
    /// chip's subtotal.
    ///
    /// Returns `None` when the larger chips alone are already worth too much
    /// to fit one of every chip into the target.
    pub fn quantities(&self, values: &[f64], target: f64) -> Option<Vec<u32>> {
        let quantities = match self {
            AllocationStrategy::TwoGroupSplit => two_group_split(values, target),
            AllocationStrategy::HeavySmall => fill_group(values, target, HEAVY_SMALL),
            AllocationStrategy::Balanced => fill_group(values, target, BALANCED),
            AllocationStrategy::Compact => fill_group(values, target, COMPACT),
        };
        if quantities.is_none() {
            trace!(strategy = self.id(), target, "Strategy found no stack");
        }
        quantities
    }
}

/// The smaller half of the chips covers half of the target and the larger
/// half covers the rest. Each half is filled on its own with its smallest
/// chip taking the remainder.
fn two_group_split(values: &[f64], target: f64) -> Option<Vec<u32>> {
    if values.len() < 2 {
        return fill_group(values, target, BALANCED);
    }

    let (small, large) = values.split_at(values.len().div_ceil(2));
    let large_quantities = fill_group(large, round_cents(target / 2.0), BALANCED)?;
    let large_total = subtotal(large, &large_quantities);

    // Whatever the large half couldn't hit exactly is the small half's problem
    let mut quantities = fill_group(small, target - large_total, BALANCED)?;
    quantities.extend(large_quantities);
    Some(quantities)
}

/// Fill one group of ascending chip values so it's worth about `target`.
fn fill_group(values: &[f64], target: f64, pattern: DecayPattern) -> Option<Vec<u32>> {
    let (&smallest, _) = values.split_first()?;

    let weights: Vec<f64> = (0..values.len()).map(|pos| pattern.weight(pos)).collect();
    let nominal: f64 = weights.iter().zip(values).map(|(w, v)| w * v).sum();
    let scale = target / nominal;

    let mut quantities: Vec<u32> = weights
        .iter()
        .map(|w| (w * scale).round().max(1.0) as u32)
        .collect();

    let mut remainder = target - subtotal(&values[1..], &quantities[1..]);

    // Make room for at least one of the smallest chip by taking chips off
    // the top, biggest value first.
    for idx in (1..values.len()).rev() {
        if remainder >= smallest - CENT_EPSILON {
            break;
        }
        let spare = quantities[idx] - 1;
        let needed = ((smallest - remainder) / values[idx]).ceil() as u32;
        let removed = needed.min(spare);
        quantities[idx] -= removed;
        remainder += f64::from(removed) * values[idx];
    }
    if remainder < smallest - CENT_EPSILON {
        return None;
    }

    quantities[0] = ((remainder / smallest).round() as u32).max(1);
    Some(quantities)
}

fn subtotal(values: &[f64], quantities: &[u32]) -> f64 {
    values
        .iter()
        .zip(quantities)
        .map(|(v, q)| v * f64::from(*q))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLIND_VALUES: [f64; 6] = [0.10, 0.20, 0.50, 1.0, 2.0, 5.0];

    #[test]
    fn test_single_chip_takes_whole_target() {
        for strategy in AllocationStrategy::ALL {
            assert_eq!(strategy.quantities(&[0.10], 20.0), Some(vec![200]));
        }
    }

    #[test]
    fn test_two_group_split_two_chips() {
        // Big blind chips cover half, small blind chips the other half.
        assert_eq!(
            AllocationStrategy::TwoGroupSplit.quantities(&[0.10, 0.20], 20.0),
            Some(vec![100, 50])
        );
    }

    #[test]
    fn test_two_group_split_halves() {
        let quantities = AllocationStrategy::TwoGroupSplit
            .quantities(&BLIND_VALUES, 20.0)
            .unwrap();
        assert_eq!(quantities, vec![22, 14, 10, 3, 1, 1]);
        assert_eq!(round_cents(subtotal(&BLIND_VALUES[..3], &quantities[..3])), 10.0);
        assert_eq!(round_cents(subtotal(&BLIND_VALUES[3..], &quantities[3..])), 10.0);
    }

    #[test]
    fn test_every_strategy_lands_near_target() {
        for strategy in AllocationStrategy::ALL {
            let quantities = strategy.quantities(&BLIND_VALUES, 20.0).unwrap();
            assert_eq!(quantities.len(), BLIND_VALUES.len());
            assert!(quantities.iter().all(|q| *q >= 1), "{:?}", strategy);

            let total = subtotal(&BLIND_VALUES, &quantities);
            // Only the smallest chip's count is rounded.
            assert!(
                (total - 20.0).abs() <= BLIND_VALUES[0] / 2.0 + CENT_EPSILON,
                "{:?} total {}",
                strategy,
                total
            );
        }
    }

    #[test]
    fn test_heavy_small_has_more_small_chips_than_compact() {
        let heavy = AllocationStrategy::HeavySmall
            .quantities(&BLIND_VALUES, 20.0)
            .unwrap();
        let compact = AllocationStrategy::Compact
            .quantities(&BLIND_VALUES, 20.0)
            .unwrap();
        assert!(heavy[0] > compact[0]);
        assert!(heavy.iter().sum::<u32>() > compact.iter().sum::<u32>());
    }

    #[test]
    fn test_chips_too_valuable_for_target() {
        let values = [1.0, 2.0, 5.0, 10.0, 20.0, 50.0];
        for strategy in AllocationStrategy::ALL {
            assert_eq!(strategy.quantities(&values, 20.0), None, "{:?}", strategy);
        }
    }

    #[test]
    fn test_big_chips_trimmed_to_fit() {
        // Rounding the pattern asks for two 5.00 chips, 20.90 before any
        // small blind chips. One of them is given back.
        let quantities = AllocationStrategy::Balanced
            .quantities(&BLIND_VALUES, 20.0)
            .unwrap();
        assert_eq!(quantities, vec![41, 7, 5, 3, 2, 1]);
    }

    #[test]
    fn test_ids_unique() {
        let mut ids: Vec<&str> = AllocationStrategy::ALL.iter().map(|s| s.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), AllocationStrategy::ALL.len());
    }
}
