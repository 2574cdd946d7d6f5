//! `poker_homegame` holds the arithmetic behind running a home poker game.
//!
//! There are two independent calculators:
//!
//! - [`chips`] plans a starting stack. Given the chip denominations on the
//!   table, a buy-in, and optionally the blinds, it proposes how many chips of
//!   each denomination every player should get and what each chip is worth.
//! - [`settlement`] settles up at the end of the night. Given what every
//!   player bought in for and cashed out with, it works out who pays whom.
//!
//! Both are pure functions over plain data. Nothing is persisted and nothing
//! is shared between calls.
//!
//! # Chip distribution
//!
//! ```
//! use poker_homegame::chips::{Blinds, compute_distribution};
//!
//! let blinds = Blinds::new(0.10, 0.20).unwrap();
//! let combinations = compute_distribution(&[1.0, 5.0, 25.0, 100.0], 20.0, Some(blinds));
//!
//! for combination in &combinations {
//!     assert!((combination.actual_total - 20.0).abs() <= 0.01);
//! }
//! ```
//!
//! # Settling up
//!
//! ```
//! use poker_homegame::settlement::{Player, settle};
//!
//! let players = vec![
//!     Player::new("a", "Alice").with_buy_in(20.0).with_final_balance(35.0),
//!     Player::new("b", "Bob").with_buy_in(20.0).with_final_balance(5.0),
//! ];
//! let report = settle(&players);
//!
//! assert_eq!(report.transactions.len(), 1);
//! assert_eq!(report.transactions[0].from, "Bob");
//! assert_eq!(report.transactions[0].to, "Alice");
//! assert_eq!(report.transactions[0].amount, 15.0);
//! ```

/// Currency helpers shared by both calculators.
pub mod core;

/// Chip value assignment and per-player stack planning.
pub mod chips;

/// Net positions and settle-up payments.
pub mod settlement;
