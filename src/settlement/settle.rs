use tracing::{debug, instrument, warn};

use crate::core::{round_cents, CENT_EPSILON};

use super::error::SettlementError;
use super::player::{Player, PlayerSummary};
use super::report::{SettlementReport, Transaction};

/// Someone who still owes or is still owed money.
struct Party<'a> {
    name: &'a str,
    remaining: f64,
}

/// Work out every player's net and the payments that settle them.
///
/// Players within half a cent of even are left out of the payments. The
/// biggest debtor pays the biggest creditor as much as one of them needs,
/// and whoever is squared up drops out, until one side runs dry. Ties keep
/// input order.
///
/// ```
/// use poker_homegame::settlement::{settle, Player};
///
/// let players = vec![
///     Player::new("1", "Ann").with_buy_in(20.0).with_final_balance(20.0),
///     Player::new("2", "Ben").with_buy_in(20.0).with_final_balance(20.0),
///     Player::new("3", "Cat").with_buy_in(20.0).with_final_balance(20.0),
/// ];
/// let report = settle(&players);
///
/// assert!(report.transactions.is_empty());
/// assert!(report.summaries.iter().all(|s| s.net == 0.0));
/// ```
#[instrument(level = "debug", skip(players), fields(players = players.len()))]
pub fn settle(players: &[Player]) -> SettlementReport {
    let summaries: Vec<PlayerSummary> = players
        .iter()
        .enumerate()
        .map(|(index, player)| PlayerSummary::from_player(player, index))
        .collect();

    let mut debtors: Vec<Party> = summaries
        .iter()
        .filter(|s| s.net < -CENT_EPSILON)
        .map(|s| Party {
            name: &s.name,
            remaining: -s.net,
        })
        .collect();
    let mut creditors: Vec<Party> = summaries
        .iter()
        .filter(|s| s.net > CENT_EPSILON)
        .map(|s| Party {
            name: &s.name,
            remaining: s.net,
        })
        .collect();

    // sort_by is stable so equal amounts keep input order
    debtors.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));
    creditors.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));

    let mut transactions = Vec::new();
    let (mut d, mut c) = (0, 0);
    while d < debtors.len() && c < creditors.len() {
        let amount = debtors[d].remaining.min(creditors[c].remaining);
        if amount > CENT_EPSILON {
            transactions.push(Transaction {
                from: debtors[d].name.to_string(),
                to: creditors[c].name.to_string(),
                amount: round_cents(amount),
            });
        }

        debtors[d].remaining -= amount;
        creditors[c].remaining -= amount;
        if debtors[d].remaining < CENT_EPSILON {
            d += 1;
        }
        if creditors[c].remaining < CENT_EPSILON {
            c += 1;
        }
    }

    let report = SettlementReport {
        summaries,
        transactions,
    };
    if !report.is_balanced() {
        warn!(
            discrepancy = report.discrepancy(),
            "Cash-outs don't match buy-ins, some balances are left unsettled"
        );
    }
    debug!(
        transactions = report.transactions.len(),
        total = report.total_transferred(),
        "Settled"
    );
    report
}

/// Check the player list before settling. [`settle`] itself accepts anything.
pub fn validate_players(players: &[Player]) -> Result<(), SettlementError> {
    if players.is_empty() {
        return Err(SettlementError::NoPlayers);
    }
    for (index, player) in players.iter().enumerate() {
        if let Some((buy_in_idx, &value)) = player
            .buy_ins
            .iter()
            .enumerate()
            .find(|(_, amount)| !amount.is_finite() || **amount < 0.0)
        {
            return Err(SettlementError::InvalidBuyIn {
                player: player.display_name(index),
                index: buy_in_idx,
                value,
            });
        }
        if !player.final_balance.is_finite() || player.final_balance < 0.0 {
            return Err(SettlementError::InvalidFinalBalance {
                player: player.display_name(index),
                value: player.final_balance,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::settlement::NetOutcome;

    fn player(name: &str, buy_in: f64, final_balance: f64) -> Player {
        Player::new(name, name)
            .with_buy_in(buy_in)
            .with_final_balance(final_balance)
    }

    fn transfers(report: &SettlementReport) -> Vec<(&str, &str, f64)> {
        report
            .transactions
            .iter()
            .map(|t| (t.from.as_str(), t.to.as_str(), t.amount))
            .collect()
    }

    #[test]
    fn test_heads_up() {
        let report = settle(&[player("A", 20.0, 35.0), player("B", 20.0, 5.0)]);
        assert_eq!(report.summaries[0].net, 15.0);
        assert_eq!(report.summaries[1].net, -15.0);
        assert_eq!(transfers(&report), vec![("B", "A", 15.0)]);
    }

    #[test]
    fn test_everyone_even() {
        let players = vec![
            player("A", 20.0, 20.0),
            player("B", 20.0, 20.0),
            player("C", 20.0, 20.0),
        ];
        let report = settle(&players);
        assert!(report.transactions.is_empty());
        for summary in &report.summaries {
            assert_eq!(summary.net, 0.0);
            assert_eq!(summary.outcome(), NetOutcome::Even);
        }
    }

    #[test]
    fn test_largest_first() {
        let players = vec![
            player("A", 20.0, 50.0),
            player("B", 20.0, 30.0),
            player("C", 20.0, 0.0),
            player("D", 40.0, 20.0),
        ];
        let report = settle(&players);
        // C and D both owe 20; C came first.
        assert_eq!(
            transfers(&report),
            vec![("C", "A", 20.0), ("D", "A", 10.0), ("D", "B", 10.0)]
        );
    }

    #[test]
    fn test_one_debtor_many_creditors() {
        let players = vec![
            player("A", 20.0, 25.0),
            player("B", 20.0, 30.0),
            player("C", 20.0, 25.0),
            player("D", 40.0, 20.0),
        ];
        let report = settle(&players);
        // A and C are tied so A, who came first, is paid first.
        assert_eq!(
            transfers(&report),
            vec![("D", "B", 10.0), ("D", "A", 5.0), ("D", "C", 5.0)]
        );
    }

    #[test]
    fn test_rebuys_count() {
        let players = vec![
            Player::new("1", "A")
                .with_buy_in(20.0)
                .with_buy_in(20.0)
                .with_final_balance(0.0),
            Player::new("2", "B").with_buy_in(20.0).with_final_balance(60.0),
        ];
        let report = settle(&players);
        assert_eq!(report.summaries[0].total_buy_in, 40.0);
        assert_eq!(transfers(&report), vec![("A", "B", 40.0)]);
    }

    #[test]
    fn test_blank_names_get_labels() {
        let players = vec![player("", 20.0, 30.0), player("", 20.0, 10.0)];
        let report = settle(&players);
        assert_eq!(report.summaries[0].name, "Player 1");
        assert_eq!(transfers(&report), vec![("Player 2", "Player 1", 10.0)]);
    }

    #[test]
    fn test_half_cent_noise_is_even() {
        let players = vec![player("A", 20.0, 20.004), player("B", 20.0, 19.996)];
        let report = settle(&players);
        assert!(report.transactions.is_empty());
    }

    #[test]
    fn test_no_players() {
        let report = settle(&[]);
        assert!(report.summaries.is_empty());
        assert!(report.transactions.is_empty());
    }

    #[test_log::test]
    fn test_unbalanced_table() {
        // Five dollars of chips went missing.
        let players = vec![player("A", 20.0, 30.0), player("B", 20.0, 5.0)];
        let report = settle(&players);
        assert_eq!(report.discrepancy(), -5.0);
        assert!(!report.is_balanced());
        assert_eq!(transfers(&report), vec![("B", "A", 10.0)]);
    }

    #[test]
    fn test_idempotent() {
        let players = vec![
            player("A", 20.0, 47.5),
            player("B", 20.0, 0.0),
            player("C", 30.0, 22.5),
        ];
        assert_eq!(settle(&players), settle(&players));
    }

    #[test]
    fn test_validate_players() {
        assert_eq!(validate_players(&[]), Err(SettlementError::NoPlayers));
        assert!(validate_players(&[player("A", 20.0, 0.0)]).is_ok());
        assert!(matches!(
            validate_players(&[player("A", -20.0, 0.0)]),
            Err(SettlementError::InvalidBuyIn { index: 0, .. })
        ));
        assert!(matches!(
            validate_players(&[player("A", 20.0, f64::NAN)]),
            Err(SettlementError::InvalidFinalBalance { .. })
        ));
    }

    #[test_log::test]
    fn test_random_tables_conserve_money() {
        let mut rng = StdRng::seed_from_u64(420);

        for _ in 0..500 {
            let num_players = rng.random_range(1..=10usize);
            let mut players: Vec<Player> = (0..num_players)
                .map(|idx| {
                    let mut p = Player::new(idx.to_string(), format!("P{idx}"));
                    for _ in 0..rng.random_range(1..=3) {
                        p = p.with_buy_in(f64::from(rng.random_range(1..=20u32)) * 5.0);
                    }
                    p
                })
                .collect();

            // Hand out the pot in random cent amounts so the table balances.
            let pot_cents: i64 = players
                .iter()
                .map(|p| (p.total_buy_in() * 100.0).round() as i64)
                .sum();
            let mut left = pot_cents;
            for (idx, p) in players.iter_mut().enumerate() {
                let cents = if idx == num_players - 1 {
                    left
                } else {
                    rng.random_range(0..=left)
                };
                left -= cents;
                p.final_balance = cents as f64 / 100.0;
            }

            let report = settle(&players);
            assert!(report.is_balanced());

            let positive: f64 = report.summaries.iter().map(|s| s.net.max(0.0)).sum();
            let negative: f64 = report.summaries.iter().map(|s| (-s.net).max(0.0)).sum();
            assert_abs_diff_eq!(report.total_transferred(), positive, epsilon = 0.01);
            assert_abs_diff_eq!(report.total_transferred(), negative, epsilon = 0.01);

            let debtors = report.losers().count();
            let creditors = report.winners().count();
            if debtors + creditors > 0 {
                assert!(report.transactions.len() < debtors + creditors);
            }
            assert!(report.transactions.iter().all(|t| t.amount > 0.0));
        }
    }
}
