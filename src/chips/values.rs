//! Pricing chips.
//!
//! With blinds the two smallest chips are the blinds and every larger chip is
//! the next "round" multiple of the small blind. Without blinds the chip face
//! values are scaled so a typical starting stack adds up to the buy-in, and
//! each scaled value is snapped to the closest amount people actually like to
//! count in.
use tracing::trace;

use super::request::{normalize_denominations, Blinds};

/// Multiples of the small blind used to price chips above the big blind.
pub const BLIND_MULTIPLIERS: [f64; 10] = [
    1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0,
];

/// Currency amounts a chip can be snapped to when there are no blinds.
pub const NICE_VALUES: [f64; 14] = [
    0.01, 0.02, 0.05, 0.10, 0.20, 0.25, 0.50, 1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0,
];

/// Chips of the smallest denomination in the stack template used to solve
/// for the proportional scale.
const TEMPLATE_BASE: f64 = 20.0;
/// Each larger denomination gets this fraction of the previous count.
const TEMPLATE_DECAY: f64 = 0.6;

/// Slack when checking that one value is strictly above another.
const STRICT_EPSILON: f64 = 1e-9;

/// Price each chip denomination.
///
/// The returned values line up with the denominations sorted ascending with
/// duplicates removed, and are strictly increasing.
///
/// ```
/// use poker_homegame::chips::{assign_chip_values, Blinds};
///
/// let blinds = Blinds::new(0.10, 0.20).unwrap();
/// let values = assign_chip_values(&[1.0, 5.0, 25.0, 100.0, 500.0, 1000.0], 20.0, Some(&blinds));
/// assert_eq!(values, vec![0.10, 0.20, 0.50, 1.0, 2.0, 5.0]);
/// ```
pub fn assign_chip_values(denominations: &[f64], buy_in: f64, blinds: Option<&Blinds>) -> Vec<f64> {
    let denominations = normalize_denominations(denominations);
    match blinds {
        Some(blinds) => blind_anchored_values(denominations.len(), blinds, &BLIND_MULTIPLIERS),
        None => proportional_values(&denominations, buy_in, &NICE_VALUES),
    }
}

/// Small blind, big blind, then the next unused multiple of the small blind.
/// Once the multipliers run out each chip is worth double the last one.
pub(crate) fn blind_anchored_values(count: usize, blinds: &Blinds, multipliers: &[f64]) -> Vec<f64> {
    let mut values: Vec<f64> = Vec::with_capacity(count);
    for idx in 0..count {
        let value = match idx {
            0 => blinds.small,
            1 => blinds.big,
            _ => {
                let previous = values[idx - 1];
                multipliers
                    .iter()
                    .map(|multiplier| multiplier * blinds.small)
                    .find(|candidate| *candidate > previous + STRICT_EPSILON)
                    .unwrap_or(previous * 2.0)
            }
        };
        values.push(value);
    }
    values
}

/// Solve a single scale factor so the template stack of raw denominations
/// adds up to the buy-in, then snap every scaled value to a nice amount.
pub(crate) fn proportional_values(denominations: &[f64], buy_in: f64, nice_values: &[f64]) -> Vec<f64> {
    if denominations.len() == 1 {
        return vec![buy_in];
    }

    let template_total: f64 = denominations
        .iter()
        .enumerate()
        .map(|(idx, denomination)| TEMPLATE_BASE * TEMPLATE_DECAY.powi(idx as i32) * denomination)
        .sum();
    let scale = buy_in / template_total;
    trace!(scale, template_total, "Solved proportional chip scale");

    let mut values: Vec<f64> = Vec::with_capacity(denominations.len());
    for denomination in denominations {
        let mut value = snap_to_nice(denomination * scale, nice_values);
        if let Some(&previous) = values.last() {
            if value <= previous + STRICT_EPSILON {
                // Two denominations snapped onto the same amount.
                value = nice_values
                    .iter()
                    .copied()
                    .find(|nice| *nice > previous + STRICT_EPSILON)
                    .unwrap_or(previous * 2.0);
            }
        }
        values.push(value);
    }
    values
}

/// The nice value closest to `value` by ratio rather than by difference, so
/// 0.03 snaps to 0.02 or 0.05 based on how many times bigger or smaller it
/// is. Ties go to the first (smallest) candidate.
pub fn snap_to_nice(value: f64, nice_values: &[f64]) -> f64 {
    let mut best = value;
    let mut best_distance = f64::INFINITY;
    for &nice in nice_values {
        let distance = (value / nice).ln().abs();
        if distance < best_distance {
            best = nice;
            best_distance = distance;
        }
    }
    best
}
