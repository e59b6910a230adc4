//! League facade pairing a roster with a schedule generator.
//!
//! [`League`] is the single-owner entry point used by front-ends.
//! [`SharedLeague`] is a cloneable handle for callers that share one league
//! across threads: roster mutations are serialized behind a write lock and
//! schedule generation reads the roster under a read lock, so it never sees a
//! half-applied change.

use crate::{
    roster::{Roster, RosterPolicy, RosterResult, TeamName, TeamRenamed},
    schedule::{Schedule, ScheduleConfig, ScheduleGenerator, ScheduleResult},
};
use std::{
    fmt::Write,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// A roster together with the policy used to schedule it
#[derive(Debug, Clone, Default)]
pub struct League {
    roster: Roster,
    generator: ScheduleGenerator,
}

impl League {
    /// Create an empty league with default policies
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(policy: RosterPolicy, config: ScheduleConfig) -> Self {
        Self {
            roster: Roster::with_policy(policy),
            generator: ScheduleGenerator::with_config(config),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn schedule_config(&self) -> &ScheduleConfig {
        self.generator.config()
    }

    pub fn add_team(&mut self, name: impl Into<String>) -> RosterResult<TeamName> {
        self.roster.add_team(name)
    }

    pub fn update_team(
        &mut self,
        position: usize,
        new_name: impl Into<String>,
    ) -> RosterResult<TeamRenamed> {
        self.roster.update_team(position, new_name)
    }

    pub fn delete_team(&mut self, position: usize) -> RosterResult<TeamName> {
        self.roster.delete_team(position)
    }

    pub fn list_teams(&self) -> &[TeamName] {
        self.roster.list_teams()
    }

    /// Generate a schedule from the current roster without modifying it
    pub fn generate_schedule(&self) -> ScheduleResult<Schedule> {
        self.generator.generate(self.roster.list_teams())
    }

    /// Numbered roster listing, one `"<position>. <name>"` line per team
    pub fn listing(&self) -> String {
        self.roster
            .list_teams()
            .iter()
            .enumerate()
            .fold(String::new(), |mut out, (idx, team)| {
                let _ = writeln!(out, "{}. {}", idx + 1, team);
                out
            })
    }
}

/// Thread-safe handle to a league.
///
/// Clones share the same underlying league.
#[derive(Debug, Clone, Default)]
pub struct SharedLeague {
    inner: Arc<RwLock<League>>,
}

impl SharedLeague {
    pub fn new(league: League) -> Self {
        Self {
            inner: Arc::new(RwLock::new(league)),
        }
    }

    pub fn add_team(&self, name: impl Into<String>) -> RosterResult<TeamName> {
        self.write().add_team(name)
    }

    pub fn update_team(
        &self,
        position: usize,
        new_name: impl Into<String>,
    ) -> RosterResult<TeamRenamed> {
        self.write().update_team(position, new_name)
    }

    pub fn delete_team(&self, position: usize) -> RosterResult<TeamName> {
        self.write().delete_team(position)
    }

    /// Owned copy of the current roster
    pub fn list_teams(&self) -> Vec<TeamName> {
        self.read().roster().snapshot()
    }

    pub fn generate_schedule(&self) -> ScheduleResult<Schedule> {
        self.read().generate_schedule()
    }

    pub fn listing(&self) -> String {
        self.read().listing()
    }

    // Mutations validate before writing, so a poisoned lock still guards a
    // consistent roster.
    fn read(&self) -> RwLockReadGuard<'_, League> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, League> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
