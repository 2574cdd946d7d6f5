#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate poker_homegame;

use libfuzzer_sys::fuzz_target;
use poker_homegame::settlement::{settle, validate_players, Player};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct SettleInput {
    pub players: Vec<Player>,
}

fuzz_target!(|input: SettleInput| {
    let report = settle(&input.players);
    assert_eq!(report.summaries.len(), input.players.len());

    if validate_players(&input.players).is_err()
        || input
            .players
            .iter()
            .any(|p| p.final_balance > 1e9 || p.buy_ins.iter().any(|b| *b > 1e9))
    {
        return;
    }

    // Same input, same answer.
    assert_eq!(report, settle(&input.players));

    for transaction in &report.transactions {
        assert!(transaction.amount > 0.0);
    }
    if report.is_balanced() {
        let owed: f64 = report.summaries.iter().map(|s| s.net.max(0.0)).sum();
        let slack = 0.01 * report.summaries.len() as f64;
        assert!((report.total_transferred() - owed).abs() <= slack);
    }
});
