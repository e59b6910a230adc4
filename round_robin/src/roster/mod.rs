//! Roster module holding the ordered list of competing teams.
//!
//! The roster enforces:
//! - Non-empty team names
//! - Unique names on insertion (exact, case-sensitive match)
//! - Optional uniqueness on rename, see [`RosterPolicy`]
//! - One-based positions at the API boundary
//!
//! ## Example
//!
//! ```
//! use round_robin::roster::{Roster, RosterError};
//!
//! let mut roster = Roster::new();
//! roster.add_team("Falcons").unwrap();
//! roster.add_team("Sharks").unwrap();
//!
//! assert!(matches!(
//!     roster.add_team("Falcons"),
//!     Err(RosterError::DuplicateOrInvalidName(_))
//! ));
//!
//! let renamed = roster.update_team(2, "Orcas").unwrap();
//! assert_eq!(renamed.old_name, "Sharks");
//! assert_eq!(roster.delete_team(1).unwrap(), "Falcons");
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{RosterError, RosterResult};
pub use manager::Roster;
pub use models::{RosterPolicy, TeamName, TeamRenamed};
