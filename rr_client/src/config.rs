//! Client configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use round_robin::{League, RosterPolicy, ScheduleConfig, ScheduleError, schedule};

/// How schedules are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnknownOutputFormat(s.to_string())),
        }
    }
}

/// Complete client configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Minimum teams needed to generate a schedule
    pub min_teams: usize,
    /// Maximum teams allowed in a schedule
    pub max_teams: usize,
    /// Re-check uniqueness when a team is renamed
    pub strict_rename: bool,
    /// Schedule output format
    pub output: OutputFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            min_teams: schedule::DEFAULT_MIN_TEAMS,
            max_teams: schedule::DEFAULT_MAX_TEAMS,
            strict_rename: false,
            output: OutputFormat::Text,
        }
    }
}

/// Values given on the command line, which take priority over the environment
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub min_teams: Option<usize>,
    pub max_teams: Option<usize>,
    pub strict_rename: bool,
    pub json: bool,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if the resulting team bounds are invalid
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), overrides)
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F, overrides: Overrides) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let min_teams = overrides
            .min_teams
            .unwrap_or_else(|| parse_var_or(&lookup, "LEAGUE_MIN_TEAMS", defaults.min_teams));
        let max_teams = overrides
            .max_teams
            .unwrap_or_else(|| parse_var_or(&lookup, "LEAGUE_MAX_TEAMS", defaults.max_teams));
        let strict_rename = overrides.strict_rename
            || parse_var_or(&lookup, "LEAGUE_STRICT_RENAME", defaults.strict_rename);
        let output = if overrides.json {
            OutputFormat::Json
        } else {
            parse_var_or(&lookup, "LEAGUE_OUTPUT", defaults.output)
        };

        let config = ClientConfig {
            min_teams,
            max_teams,
            strict_rename,
            output,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    ///
    /// The team bounds are checked by [`ScheduleConfig::validate`]; failures
    /// are reported against the variable that carries the offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.schedule_config().validate().map_err(|err| {
            let var = match &err {
                ScheduleError::MinimumTooLow { .. } => "LEAGUE_MIN_TEAMS",
                _ => "LEAGUE_MAX_TEAMS",
            };
            ConfigError::Invalid {
                var: var.to_string(),
                reason: err.to_string(),
            }
        })
    }

    pub fn schedule_config(&self) -> ScheduleConfig {
        ScheduleConfig::new(self.min_teams, self.max_teams)
    }

    pub fn roster_policy(&self) -> RosterPolicy {
        RosterPolicy {
            enforce_uniqueness_on_update: self.strict_rename,
        }
    }

    /// Build an empty league using this configuration
    pub fn league(&self) -> League {
        League::with_config(self.roster_policy(), self.schedule_config())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error("Unknown output format {0:?}, expected \"text\" or \"json\"")]
    UnknownOutputFormat(String),
}

/// Helper to parse a variable with default fallback
fn parse_var_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|err| {
            log::warn!("Ignoring {key}={raw:?} ({err}), using default");
            default
        }),
        None => default,
    }
}
