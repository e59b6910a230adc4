//! Round-robin schedule generation using the circle method.
//!
//! For `n` teams the working list holds `m = n + (n mod 2)` slots, the extra
//! slot being a bye. Each of the `m - 1` rounds pairs slot `i` with slot
//! `m - 1 - i`. Between rounds slot 0 stays fixed and the remaining slots
//! rotate one step: the last slot moves to position 1 and the others shift
//! right. Over the full cycle every pair of slots meets exactly once.

use super::{
    errors::{ScheduleError, ScheduleResult},
    models::{Match, Round, Schedule, ScheduleConfig},
};
use crate::roster::TeamName;

/// A position in the rotating working list.
///
/// The bye is its own variant rather than a reserved name, so a team that is
/// literally called "Bye" is scheduled like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Team(usize),
    Bye,
}

/// Stateless schedule generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleGenerator {
    config: ScheduleConfig,
}

impl ScheduleGenerator {
    /// Create a generator with the default 3..=10 team policy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScheduleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Generate a full round-robin schedule for the given teams.
    ///
    /// Team names are assumed unique. The input is only read, so generating
    /// never affects the roster it was taken from, and the same input always
    /// yields the same schedule.
    ///
    /// # Errors
    ///
    /// `TooFewTeams` / `TooManyTeams` if the team count is outside the
    /// configured bounds. At least two teams are always required.
    pub fn generate(&self, teams: &[TeamName]) -> ScheduleResult<Schedule> {
        self.check_team_count(teams.len())?;

        let rounds = pairings(teams.len())
            .into_iter()
            .enumerate()
            .map(|(idx, pairs)| {
                let mut matches = Vec::with_capacity(pairs.len());
                let mut bye = None;
                for pair in pairs {
                    match pair {
                        (Slot::Team(a), Slot::Team(b)) => {
                            matches.push(Match::new(teams[a].clone(), teams[b].clone()));
                        }
                        (Slot::Team(idle), Slot::Bye) | (Slot::Bye, Slot::Team(idle)) => {
                            bye = Some(teams[idle].clone());
                        }
                        (Slot::Bye, Slot::Bye) => {}
                    }
                }
                Round {
                    round_number: idx + 1,
                    matches,
                    bye,
                }
            })
            .collect::<Vec<_>>();

        let schedule = Schedule::new(rounds);
        log::debug!(
            "Generated schedule for {} teams: {} rounds, {} matches",
            teams.len(),
            schedule.round_count(),
            schedule.match_count()
        );

        Ok(schedule)
    }

    fn check_team_count(&self, actual: usize) -> ScheduleResult<()> {
        let min = self.config.min_teams.max(2);
        if actual < min {
            return Err(ScheduleError::TooFewTeams { min, actual });
        }

        if actual > self.config.max_teams {
            return Err(ScheduleError::TooManyTeams {
                max: self.config.max_teams,
                actual,
            });
        }

        Ok(())
    }
}

/// Generate a schedule with the default team-count policy
pub fn generate_schedule(teams: &[TeamName]) -> ScheduleResult<Schedule> {
    ScheduleGenerator::new().generate(teams)
}

/// Slot pairings for every round over `team_count` teams.
fn pairings(team_count: usize) -> Vec<Vec<(Slot, Slot)>> {
    let mut working: Vec<Slot> = (0..team_count).map(Slot::Team).collect();
    if team_count % 2 != 0 {
        working.push(Slot::Bye);
    }

    let size = working.len();
    if size < 2 {
        return Vec::new();
    }

    let mut rounds = Vec::with_capacity(size - 1);
    for round in 0..size - 1 {
        let pairs = (0..size / 2)
            .map(|i| (working[i], working[size - 1 - i]))
            .collect::<Vec<_>>();
        log::trace!("Round {}: {:?}", round + 1, pairs);
        rounds.push(pairs);

        working[1..].rotate_right(1);
    }

    rounds
}
