//! Roster data models.

use serde::{Deserialize, Deserializer, Serialize};
use std::{borrow::Borrow, fmt};

/// A competitor's name.
///
/// Always non-empty. Equality is exact and case-sensitive; no trimming is
/// applied, callers normalize input before it reaches the roster.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct TeamName(String);

impl TeamName {
    /// Create a team name, returning `None` for the empty string.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for TeamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TeamName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TeamName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TeamName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl<'de> Deserialize<'de> for TeamName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).ok_or_else(|| serde::de::Error::custom("team name must not be empty"))
    }
}

/// Validation policy applied by the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPolicy {
    /// Reject renames that would duplicate another entry (default: false)
    pub enforce_uniqueness_on_update: bool,
}

impl RosterPolicy {
    /// Policy that re-checks uniqueness when a team is renamed
    pub fn strict() -> Self {
        Self {
            enforce_uniqueness_on_update: true,
        }
    }
}

/// Outcome of a successful rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRenamed {
    /// One-based position of the renamed entry
    pub position: usize,
    /// Name before the update
    pub old_name: TeamName,
    /// Name after the update
    pub new_name: TeamName,
}
