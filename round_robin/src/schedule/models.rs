//! Schedule data models.

use super::errors::{ScheduleError, ScheduleResult};
use crate::roster::TeamName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default minimum number of teams for a schedule
pub const DEFAULT_MIN_TEAMS: usize = 3;

/// Default maximum number of teams for a schedule
pub const DEFAULT_MAX_TEAMS: usize = 10;

/// Team-count policy for schedule generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Minimum number of teams required (default: 3)
    pub min_teams: usize,
    /// Maximum number of teams allowed (default: 10)
    pub max_teams: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            min_teams: DEFAULT_MIN_TEAMS,
            max_teams: DEFAULT_MAX_TEAMS,
        }
    }
}

impl ScheduleConfig {
    pub fn new(min_teams: usize, max_teams: usize) -> Self {
        Self {
            min_teams,
            max_teams,
        }
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// `MinimumTooLow` if fewer than two teams would be allowed, and
    /// `MaximumBelowMinimum` if no team count satisfies both bounds.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.min_teams < 2 {
            return Err(ScheduleError::MinimumTooLow {
                min: self.min_teams,
            });
        }

        if self.max_teams < self.min_teams {
            return Err(ScheduleError::MaximumBelowMinimum {
                min: self.min_teams,
                max: self.max_teams,
            });
        }

        Ok(())
    }
}

/// A single pairing within a round.
///
/// The two sides are unordered for scheduling purposes, but `team_a` is
/// always the side drawn from the lower working position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub team_a: TeamName,
    pub team_b: TeamName,
}

impl Match {
    pub fn new(team_a: TeamName, team_b: TeamName) -> Self {
        Self { team_a, team_b }
    }

    /// Whether the given team plays in this match
    pub fn involves(&self, team: &str) -> bool {
        self.team_a == team || self.team_b == team
    }

    /// Whether this match pairs the two teams, in either order
    pub fn is_between(&self, first: &str, second: &str) -> bool {
        (self.team_a == first && self.team_b == second)
            || (self.team_a == second && self.team_b == first)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.team_a, self.team_b)
    }
}

/// One scheduling slot of non-overlapping matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Round number (1-indexed)
    pub round_number: usize,
    /// Matches in pairing order
    pub matches: Vec<Match>,
    /// Team sitting out this round (odd team counts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bye: Option<TeamName>,
}

impl Round {
    /// Whether the given team plays a match in this round
    pub fn plays(&self, team: &str) -> bool {
        self.matches.iter().any(|m| m.involves(team))
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Round {}:", self.round_number)?;
        for m in &self.matches {
            writeln!(f, "{m}")?;
        }
        Ok(())
    }
}

/// A complete round-robin schedule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    rounds: Vec<Round>,
}

impl Schedule {
    pub fn new(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Get a round by its 1-indexed number
    pub fn round(&self, round_number: usize) -> Option<&Round> {
        round_number
            .checked_sub(1)
            .and_then(|idx| self.rounds.get(idx))
    }

    /// All matches in round order
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.rounds.iter().flat_map(|round| round.matches.iter())
    }

    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|round| round.matches.len()).sum()
    }

    /// Matches played by a team, paired with their round number
    pub fn fixtures_for(&self, team: &str) -> Vec<(usize, &Match)> {
        self.rounds
            .iter()
            .flat_map(|round| {
                round
                    .matches
                    .iter()
                    .filter(move |m| m.involves(team))
                    .map(move |m| (round.round_number, m))
            })
            .collect()
    }

    /// Round in which two teams meet, if they do
    pub fn meeting_round(&self, first: &str, second: &str) -> Option<usize> {
        self.rounds
            .iter()
            .find(|round| round.matches.iter().any(|m| m.is_between(first, second)))
            .map(|round| round.round_number)
    }

    /// Serialize the schedule as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, round) in self.rounds.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{round}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str) -> TeamName {
        TeamName::new(name).unwrap()
    }

    fn sample() -> Schedule {
        Schedule::new(vec![
            Round {
                round_number: 1,
                matches: vec![Match::new(team("B"), team("C"))],
                bye: Some(team("A")),
            },
            Round {
                round_number: 2,
                matches: vec![Match::new(team("A"), team("C"))],
                bye: Some(team("B")),
            },
        ])
    }

    #[test]
    fn test_default_config() {
        let config = ScheduleConfig::default();
        assert_eq!(config.min_teams, 3);
        assert_eq!(config.max_teams, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            ScheduleConfig::new(1, 10).validate(),
            Err(ScheduleError::MinimumTooLow { min: 1 })
        );
        assert_eq!(
            ScheduleConfig::new(5, 4).validate(),
            Err(ScheduleError::MaximumBelowMinimum { min: 5, max: 4 })
        );
        assert!(ScheduleConfig::new(2, 2).validate().is_ok());
    }

    #[test]
    fn test_match_queries() {
        let m = Match::new(team("A"), team("B"));
        assert!(m.involves("A"));
        assert!(!m.involves("C"));
        assert!(m.is_between("B", "A"));
        assert_eq!(m.to_string(), "A vs B");
    }

    #[test]
    fn test_round_lookup_is_one_based() {
        let schedule = sample();
        assert_eq!(schedule.round(1).unwrap().round_number, 1);
        assert_eq!(schedule.round(2).unwrap().round_number, 2);
        assert!(schedule.round(0).is_none());
        assert!(schedule.round(3).is_none());
    }

    #[test]
    fn test_fixtures_and_meetings() {
        let schedule = sample();
        let fixtures = schedule.fixtures_for("C");
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[0].0, 1);
        assert_eq!(fixtures[1].0, 2);

        assert_eq!(schedule.meeting_round("C", "A"), Some(2));
        assert_eq!(schedule.meeting_round("A", "B"), None);
        assert_eq!(schedule.match_count(), 2);
    }

    #[test]
    fn test_display_format() {
        let text = sample().to_string();
        assert_eq!(text, "Round 1:\nB vs C\n\nRound 2:\nA vs C\n");
    }

    #[test]
    fn test_json_field_names() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.is_array());
        assert_eq!(value[0]["roundNumber"], 1);
        assert_eq!(value[0]["matches"][0]["teamA"], "B");
        assert_eq!(value[0]["matches"][0]["teamB"], "C");
        assert_eq!(value[0]["bye"], "A");
    }

    #[test]
    fn test_json_omits_absent_bye() {
        let schedule = Schedule::new(vec![Round {
            round_number: 1,
            matches: vec![Match::new(team("A"), team("B"))],
            bye: None,
        }]);
        let json = schedule.to_json().unwrap();
        assert!(!json.contains("bye"));

        let parsed: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, schedule);
    }
}
