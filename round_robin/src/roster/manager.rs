//! Roster of uniquely named teams.

use super::{
    errors::{RosterError, RosterResult},
    models::{RosterPolicy, TeamName, TeamRenamed},
};

/// Ordered, duplicate-free list of team names.
///
/// Positions exposed to callers are one-based; they are translated to
/// zero-based offsets here and nowhere else.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    teams: Vec<TeamName>,
    policy: RosterPolicy,
}

impl Roster {
    /// Create an empty roster with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty roster with the given policy
    pub fn with_policy(policy: RosterPolicy) -> Self {
        Self {
            teams: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> RosterPolicy {
        self.policy
    }

    /// Append a team to the end of the roster.
    ///
    /// # Errors
    ///
    /// `DuplicateOrInvalidName` if the name is empty or already present.
    pub fn add_team(&mut self, name: impl Into<String>) -> RosterResult<TeamName> {
        let name = name.into();
        if self.contains(&name) {
            return Err(RosterError::DuplicateOrInvalidName(name));
        }
        let team =
            TeamName::new(name).ok_or(RosterError::DuplicateOrInvalidName(String::new()))?;

        log::debug!("Adding team \"{}\" at position {}", team, self.teams.len() + 1);
        self.teams.push(team.clone());
        Ok(team)
    }

    /// Rename the team at a one-based position.
    ///
    /// Uniqueness is only re-checked when the roster policy asks for it.
    ///
    /// # Errors
    ///
    /// `InvalidIndexOrName` if the position is out of range, the new name is
    /// empty, or (strict policy) the new name belongs to another entry.
    pub fn update_team(
        &mut self,
        position: usize,
        new_name: impl Into<String>,
    ) -> RosterResult<TeamRenamed> {
        let new_name = new_name.into();
        let invalid = |name: String| RosterError::InvalidIndexOrName {
            index: position,
            name,
        };

        let Some(offset) = self.offset(position) else {
            return Err(invalid(new_name));
        };

        if self.policy.enforce_uniqueness_on_update
            && self
                .teams
                .iter()
                .enumerate()
                .any(|(i, team)| i != offset && team.as_str() == new_name)
        {
            return Err(invalid(new_name));
        }

        let Some(team) = TeamName::new(new_name) else {
            return Err(invalid(String::new()));
        };

        let old_name = std::mem::replace(&mut self.teams[offset], team.clone());
        log::debug!("Renamed team at position {position}: \"{old_name}\" -> \"{team}\"");

        Ok(TeamRenamed {
            position,
            old_name,
            new_name: team,
        })
    }

    /// Remove the team at a one-based position.
    ///
    /// # Errors
    ///
    /// `InvalidIndex` if the position is out of range.
    pub fn delete_team(&mut self, position: usize) -> RosterResult<TeamName> {
        let offset = self
            .offset(position)
            .ok_or(RosterError::InvalidIndex(position))?;

        let removed = self.teams.remove(offset);
        log::debug!("Removed team \"{removed}\" from position {position}");
        Ok(removed)
    }

    /// Current teams in roster order
    pub fn list_teams(&self) -> &[TeamName] {
        &self.teams
    }

    /// Owned copy of the current teams, detached from the roster
    pub fn snapshot(&self) -> Vec<TeamName> {
        self.teams.clone()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.teams.iter().any(|team| team == name)
    }

    /// One-based position of a team, if present
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.teams
            .iter()
            .position(|team| team == name)
            .map(|offset| offset + 1)
    }

    /// Translate a one-based position into a checked zero-based offset
    fn offset(&self, position: usize) -> Option<usize> {
        position
            .checked_sub(1)
            .filter(|&offset| offset < self.teams.len())
    }
}
