//! Chip distribution planning.
//!
//! Given the chip denominations a host owns and the buy-in (and optionally
//! the blinds), work out what each chip is worth and how many of each go
//! into a player's starting stack.
//!
//! Pricing comes first. See [`assign_chip_values`]. Then every
//! [`AllocationStrategy`] proposes chip counts, and a shared fix-up step
//! ([`absorb_drift`]) pushes any leftover cents into the smallest chip so the
//! stack is worth exactly the buy-in.
//!
//! # Example
//!
//! ```
//! use poker_homegame::chips::{compute_distribution, Blinds};
//!
//! let blinds = Blinds::new(0.25, 0.50).unwrap();
//! let combinations = compute_distribution(&[1.0, 5.0, 25.0, 100.0], 50.0, Some(blinds));
//!
//! for combination in &combinations {
//!     println!("{} ({} chips)", combination.name, combination.total_chips());
//!     for allocation in &combination.allocations {
//!         println!(
//!             "  {} x {} @ {:.2} = {:.2}",
//!             allocation.quantity,
//!             allocation.denomination,
//!             allocation.value_per_chip,
//!             allocation.total_value
//!         );
//!     }
//! }
//! ```

mod calculator;
mod combination;
mod config;
mod drift;
mod error;
mod request;
mod strategy;
mod values;

pub use calculator::{compute_distribution, ChipCalculator};
pub use combination::{ChipAllocation, Combination};
pub use config::ChipConfig;
pub use drift::absorb_drift;
pub use error::{ChipError, Result};
pub use request::{Blinds, DistributionRequest};
pub use strategy::AllocationStrategy;
pub use values::{assign_chip_values, snap_to_nice, BLIND_MULTIPLIERS, NICE_VALUES};
