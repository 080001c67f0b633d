//! Pickup soccer team balancer
//!
//! Splits a roster into teams that share out every position evenly and keep
//! total ratings close. The core lives in [`balancer`] and does no I/O;
//! [`roster`] reads roster files and applies the optional caller-side checks.
//!
//! # Examples
//!
//! ```rust
//! use team_balancer::balancer::{Player, balance_teams, rating_spread};
//!
//! let players = vec![
//!     Player::new("1", "Kebler 🧤", "Goleiro").with_rating(4.0),
//!     Player::new("2", "Joaquim 🧤", "Gol").with_rating(3.0),
//!     Player::new("3", "Boka", "Ata").with_rating(5.0),
//!     Player::new("4", "Lopes", "Zag").with_stars(2.0),
//! ];
//!
//! let teams = balance_teams(&players, 2);
//! assert_eq!(teams.len(), 2);
//! assert!(teams.iter().all(|t| t.len() == 2));
//! assert!(rating_spread(&teams) <= 2.0);
//! ```

pub mod balancer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod logging;
pub mod roster;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use balancer::{
    CanonicalPosition, Player, SeparationGroup, Team, balance_teams,
    balance_teams_with_separation, rating_spread,
};
pub use config::Config;
pub use error::AppError;
pub use roster::{GameType, check_roster, load_roster};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
