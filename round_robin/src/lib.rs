//! # Round Robin
//!
//! Team roster management and round-robin schedule generation.
//!
//! A caller builds up a [`Roster`] of uniquely named teams and asks the
//! [`ScheduleGenerator`] for a schedule in which every pair of teams meets
//! exactly once. The generator uses the circle method: one team stays fixed
//! while the others rotate, with a bye slot added when the team count is odd.
//!
//! ## Core Modules
//!
//! - [`roster`]: Team names, roster validation, and one-based positions
//! - [`schedule`]: Circle-method generation, rounds, matches, and rendering
//! - [`league`]: Facade tying a roster to a generator, plus a shared handle
//!
//! Every validation failure is reported through `Result`; nothing in this
//! crate panics on bad input or prints to the terminal.
//!
//! ## Example
//!
//! ```
//! use round_robin::League;
//!
//! let mut league = League::new();
//! for team in ["Falcons", "Sharks", "Wolves", "Bears", "Owls"] {
//!     league.add_team(team).unwrap();
//! }
//!
//! let schedule = league.generate_schedule().unwrap();
//! assert_eq!(schedule.round_count(), 5);
//! assert_eq!(schedule.match_count(), 10);
//!
//! // The bye never leaks into the roster
//! assert_eq!(league.list_teams().len(), 5);
//! ```

/// Facade combining roster and schedule generation.
pub mod league;
pub use league::{League, SharedLeague};

/// Team roster and its validation rules.
pub mod roster;
pub use roster::{Roster, RosterError, RosterPolicy, RosterResult, TeamName, TeamRenamed};

/// Round-robin schedule generation.
pub mod schedule;
pub use schedule::{
    Match, Round, Schedule, ScheduleConfig, ScheduleError, ScheduleGenerator, ScheduleResult,
    generate_schedule,
};
