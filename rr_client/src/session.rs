//! Interactive league session.
//!
//! A [`Session`] owns one league and turns parsed commands into
//! [`Response`]s. It never prints; the binary decides where each response
//! goes.

use crate::{
    commands::{Command, ParseError, parse_command},
    config::{ClientConfig, OutputFormat},
};
use round_robin::{League, RosterError, Schedule, ScheduleError};

pub const HELP: &str = "\
Commands:
  add NAME              Add a team
  update N NAME         Rename the team at position N
  delete N              Delete the team at position N
  list                  Show the numbered team list
  schedule              Generate the round-robin schedule
  json                  Generate the schedule as JSON
  help                  Show this help
  quit                  Leave the session";

/// Result of handling one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Informational output
    Info(String),
    /// Something the user has to correct
    Error(String),
    /// End of session requested
    Quit,
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }
}

impl From<RosterError> for Response {
    fn from(err: RosterError) -> Self {
        Response::Error(err.to_string())
    }
}

impl From<ScheduleError> for Response {
    fn from(err: ScheduleError) -> Self {
        Response::Error(err.to_string())
    }
}

impl From<ParseError> for Response {
    fn from(err: ParseError) -> Self {
        Response::Error(err.to_string())
    }
}

/// Interactive session over a single league
#[derive(Debug, Clone, Default)]
pub struct Session {
    league: League,
    output: OutputFormat,
}

impl Session {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            league: config.league(),
            output: config.output,
        }
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    /// Parse and execute one line of user input
    pub fn handle_line(&mut self, line: &str) -> Response {
        match parse_command(line) {
            Ok(command) => self.execute(command),
            Err(err) => err.into(),
        }
    }

    /// Execute a parsed command
    pub fn execute(&mut self, command: Command) -> Response {
        log::debug!("Executing {command:?}");
        match command {
            Command::Add(name) => match self.league.add_team(name) {
                Ok(team) => self.with_listing(format!("Team \"{team}\" added successfully!")),
                Err(err) => err.into(),
            },
            Command::Update { position, name } => match self.league.update_team(position, name) {
                Ok(renamed) => self.with_listing(format!(
                    "Team \"{}\" updated to \"{}\".",
                    renamed.old_name, renamed.new_name
                )),
                Err(err) => err.into(),
            },
            Command::Delete(position) => match self.league.delete_team(position) {
                Ok(team) => self.with_listing(format!("Team \"{team}\" deleted successfully!")),
                Err(err) => err.into(),
            },
            Command::List => Response::Info(self.listing()),
            Command::Schedule => self.schedule(self.output),
            Command::Json => self.schedule(OutputFormat::Json),
            Command::Help => Response::Info(HELP.to_string()),
            Command::Quit => Response::Quit,
        }
    }

    fn schedule(&self, format: OutputFormat) -> Response {
        match self.league.generate_schedule() {
            Ok(schedule) => render(&schedule, format),
            Err(err) => err.into(),
        }
    }

    fn listing(&self) -> String {
        if self.league.list_teams().is_empty() {
            "No teams yet.".to_string()
        } else {
            self.league.listing().trim_end().to_string()
        }
    }

    fn with_listing(&self, message: String) -> Response {
        Response::Info(format!("{message}\n{}", self.listing()))
    }
}

fn render(schedule: &Schedule, format: OutputFormat) -> Response {
    match format {
        OutputFormat::Text => Response::Info(schedule.to_string().trim_end().to_string()),
        OutputFormat::Json => match schedule.to_json() {
            Ok(json) => Response::Info(json),
            Err(err) => Response::Error(format!("Failed to render schedule: {err}")),
        },
    }
}
