use crate::core::{is_negligible, round_cents, CENT_EPSILON};

use super::combination::ChipAllocation;

/// Turn values and quantities into allocations that add up to `target` to
/// the cent.
///
/// Every chip but the smallest keeps its value and its subtotal is rounded
/// to cents. Whatever is left of the target becomes the smallest chip's
/// subtotal, and its per-chip value is recomputed from that. Any strategy's
/// output goes through here so the fix-up lives in one place.
///
/// Returns `None` if a quantity is zero or the smallest chip would be left
/// worth nothing.
pub fn absorb_drift(
    denominations: &[f64],
    values: &[f64],
    quantities: &[u32],
    target: f64,
) -> Option<Vec<ChipAllocation>> {
    if denominations.is_empty()
        || denominations.len() != values.len()
        || values.len() != quantities.len()
        || quantities.contains(&0)
    {
        return None;
    }

    let larger: Vec<ChipAllocation> = denominations[1..]
        .iter()
        .zip(&values[1..])
        .zip(&quantities[1..])
        .map(|((denomination, value), quantity)| {
            ChipAllocation::new(*denomination, *quantity, *value)
        })
        .collect();
    let larger_total: f64 = larger.iter().map(|a| a.total_value).sum();

    let smallest_total = round_cents(target - larger_total);
    if smallest_total < CENT_EPSILON {
        return None;
    }

    let quantity = quantities[0];
    let nominal_total = round_cents(f64::from(quantity) * values[0]);
    let value_per_chip = if is_negligible(nominal_total - smallest_total) {
        values[0]
    } else {
        smallest_total / f64::from(quantity)
    };

    let mut allocations = Vec::with_capacity(denominations.len());
    allocations.push(ChipAllocation {
        denomination: denominations[0],
        quantity,
        value_per_chip,
        total_value: smallest_total,
    });
    allocations.extend(larger);
    Some(allocations)
}
