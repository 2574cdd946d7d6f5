/// Rounding and comparison of currency amounts.
mod money;
/// Export the money helpers
pub use self::money::{
    round_cents, is_negligible, within_tolerance, CENT_EPSILON, TOTAL_TOLERANCE,
};
