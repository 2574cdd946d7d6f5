use approx::abs_diff_eq;

/// Amounts closer than this are treated as equal. Anything under half a cent
/// is rounding noise from floating point currency math.
pub const CENT_EPSILON: f64 = 0.005;

/// How far a planned stack may drift from the requested buy-in.
pub const TOTAL_TOLERANCE: f64 = 0.01;

/// Round an amount to whole cents, half away from zero.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Is this amount indistinguishable from zero?
pub fn is_negligible(amount: f64) -> bool {
    amount.abs() < CENT_EPSILON
}

/// Are two amounts within `tolerance` of each other?
///
/// A hair of slack is added so that two values that were both rounded to
/// cents and differ by exactly the tolerance still compare as within it.
pub fn within_tolerance(lhs: f64, rhs: f64, tolerance: f64) -> bool {
    abs_diff_eq!(lhs, rhs, epsilon = tolerance + 1e-9)
}
