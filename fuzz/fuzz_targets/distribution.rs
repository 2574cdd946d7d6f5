#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate poker_homegame;

use libfuzzer_sys::fuzz_target;
use poker_homegame::chips::{
    assign_chip_values, compute_distribution, Blinds, DistributionRequest,
};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct DistributionInput {
    pub denominations: Vec<f64>,
    pub buy_in: f64,
    pub blinds: Option<Blinds>,
}

/// Keep inputs to something a home game could plausibly ask for so the
/// fuzzer spends its time on the allocation logic rather than on overflow.
fn plausible(input: &DistributionInput) -> bool {
    let request = DistributionRequest {
        denominations: input.denominations.clone(),
        buy_in: input.buy_in,
        blinds: input.blinds,
    };
    request.validate().is_ok()
        && input.denominations.len() <= 12
        && input.denominations.iter().all(|d| *d >= 0.01 && *d <= 1e6)
        && input.buy_in >= 0.01
        && input.buy_in <= 1e6
        && input
            .blinds
            .map_or(true, |b| b.small >= 0.01 && b.big <= input.buy_in)
}

fuzz_target!(|input: DistributionInput| {
    if !plausible(&input) {
        // Invalid requests never panic, they just come back empty.
        let _ = compute_distribution(&input.denominations, input.buy_in, input.blinds);
        return;
    }

    let values = assign_chip_values(&input.denominations, input.buy_in, input.blinds.as_ref());
    assert!(values.iter().all(|v| *v > 0.0));
    assert!(values.windows(2).all(|pair| pair[1] > pair[0]));

    for combination in compute_distribution(&input.denominations, input.buy_in, input.blinds) {
        assert!((combination.actual_total - combination.target_total).abs() <= 0.01 + 1e-9);
        assert_eq!(combination.allocations.len(), values.len());
        assert!(combination.allocations.iter().all(|a| a.quantity >= 1));
    }
});
