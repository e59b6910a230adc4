/// Property-based tests for schedule generation using proptest
///
/// These tests verify the round-robin guarantees across randomly generated
/// rosters of every valid size.
use proptest::prelude::*;
use round_robin::{Roster, RosterError, ScheduleError, TeamName, generate_schedule};
use std::collections::{BTreeSet, HashSet};

// Strategy to generate a roster of unique, non-empty team names
fn team_names_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<TeamName>> {
    prop::collection::btree_set("[A-Za-z][A-Za-z0-9 ]{0,11}", min..=max).prop_map(|names| {
        names
            .into_iter()
            .filter_map(TeamName::new)
            .collect::<Vec<_>>()
    })
}

// Same names, shuffled into an arbitrary roster order
fn shuffled_names_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<TeamName>> {
    team_names_strategy(min, max).prop_shuffle()
}

proptest! {
    #[test]
    fn test_every_pair_meets_exactly_once(teams in shuffled_names_strategy(3, 10)) {
        let schedule = generate_schedule(&teams).unwrap();
        let n = teams.len();

        let mut pairs = BTreeSet::new();
        for m in schedule.matches() {
            let key = if m.team_a <= m.team_b {
                (m.team_a.clone(), m.team_b.clone())
            } else {
                (m.team_b.clone(), m.team_a.clone())
            };
            prop_assert!(pairs.insert(key), "pair scheduled twice");
        }
        prop_assert_eq!(pairs.len(), n * (n - 1) / 2);
    }

    #[test]
    fn test_round_count_matches_working_size(teams in shuffled_names_strategy(3, 10)) {
        let schedule = generate_schedule(&teams).unwrap();
        let working = teams.len() + teams.len() % 2;

        prop_assert_eq!(schedule.round_count(), working - 1);
        for (idx, round) in schedule.rounds().iter().enumerate() {
            prop_assert_eq!(round.round_number, idx + 1);
            prop_assert_eq!(round.bye.is_some(), teams.len() % 2 == 1);
        }
    }

    #[test]
    fn test_no_team_plays_twice_in_a_round(teams in shuffled_names_strategy(3, 10)) {
        let schedule = generate_schedule(&teams).unwrap();

        for round in schedule.rounds() {
            let mut seen = HashSet::new();
            for m in &round.matches {
                prop_assert!(seen.insert(&m.team_a));
                prop_assert!(seen.insert(&m.team_b));
            }
            // Everyone not idle plays
            let expected = teams.len() - usize::from(round.bye.is_some());
            prop_assert_eq!(seen.len(), expected);
        }
    }

    #[test]
    fn test_generation_deterministic(teams in shuffled_names_strategy(3, 10)) {
        let first = generate_schedule(&teams).unwrap();
        let second = generate_schedule(&teams).unwrap();
        prop_assert_eq!(first.to_string(), second.to_string());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_bounds_rejected(teams in team_names_strategy(11, 16)) {
        let err = generate_schedule(&teams).unwrap_err();
        let is_too_many = matches!(err, ScheduleError::TooManyTeams { max: 10, .. });
        prop_assert!(is_too_many);

        let err = generate_schedule(&teams[..2]).unwrap_err();
        let is_too_few = matches!(err, ScheduleError::TooFewTeams { min: 3, actual: 2 });
        prop_assert!(is_too_few);
    }

    #[test]
    fn test_roster_rejects_out_of_range_positions(
        teams in team_names_strategy(0, 10),
        extra in 1usize..20,
    ) {
        let mut roster = Roster::new();
        for team in &teams {
            roster.add_team(team.as_str()).unwrap();
        }
        let before = roster.snapshot();
        let position = teams.len() + extra;

        prop_assert_eq!(roster.delete_team(position), Err(RosterError::InvalidIndex(position)));
        prop_assert_eq!(roster.delete_team(0), Err(RosterError::InvalidIndex(0)));
        let update_failed = matches!(
            roster.update_team(position, "New"),
            Err(RosterError::InvalidIndexOrName { .. })
        );
        prop_assert!(update_failed);
        prop_assert_eq!(roster.snapshot(), before);
    }

    #[test]
    fn test_roster_rejects_duplicates(teams in team_names_strategy(1, 10), pick in any::<prop::sample::Index>()) {
        let mut roster = Roster::new();
        for team in &teams {
            roster.add_team(team.as_str()).unwrap();
        }
        let existing = pick.get(&teams).clone();

        let err = roster.add_team(existing.as_str()).unwrap_err();
        prop_assert_eq!(err, RosterError::DuplicateOrInvalidName(existing.to_string()));
        prop_assert_eq!(roster.len(), teams.len());
    }
}
