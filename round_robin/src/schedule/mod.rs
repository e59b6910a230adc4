//! Schedule module producing round-robin fixtures from a list of teams.
//!
//! This module provides:
//! - Circle-method pairing with a bye slot for odd team counts
//! - Configurable minimum/maximum team counts (3..=10 by default)
//! - Plain-text rendering through `Display` and JSON rendering through serde
//!
//! ## Example
//!
//! ```
//! use round_robin::roster::TeamName;
//! use round_robin::schedule::ScheduleGenerator;
//!
//! let teams: Vec<TeamName> = ["A", "B", "C", "D"]
//!     .into_iter()
//!     .filter_map(TeamName::new)
//!     .collect();
//!
//! let schedule = ScheduleGenerator::new().generate(&teams).unwrap();
//! assert_eq!(schedule.round_count(), 3);
//! assert_eq!(schedule.match_count(), 6);
//! assert!(schedule.to_string().starts_with("Round 1:\nA vs D\nB vs C\n"));
//! ```

pub mod errors;
pub mod generator;
pub mod models;

pub use errors::{ScheduleError, ScheduleResult};
pub use generator::{ScheduleGenerator, generate_schedule};
pub use models::{DEFAULT_MAX_TEAMS, DEFAULT_MIN_TEAMS, Match, Round, Schedule, ScheduleConfig};
