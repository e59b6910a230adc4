use std::fmt;

/// A parsed session command.
///
/// Positions are the one-based numbers shown in the roster listing. Negative
/// input parses to position 0, which the roster always rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Update { position: usize, name: String },
    Delete(usize),
    List,
    Schedule,
    Json,
    Help,
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Missing or non-numeric team position.
    InvalidIndex(String),
    /// Blank input line.
    Empty,
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex(_) => write!(f, "Invalid index. Please enter a valid number."),
            Self::Empty => write!(f, "No command entered. Type 'help' to see available commands"),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Type 'help' to see available commands",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a line of user input into a [`Command`].
///
/// The command word is case-insensitive. Team names are the remainder of
/// the line with surrounding whitespace removed.
///
/// # Examples
///
/// ```
/// use rr_client::commands::{Command, parse_command};
///
/// assert_eq!(parse_command("list"), Ok(Command::List));
/// assert_eq!(parse_command("add Red Dragons"), Ok(Command::Add("Red Dragons".to_string())));
/// assert_eq!(
///     parse_command("update 2 Blue Whales"),
///     Ok(Command::Update { position: 2, name: "Blue Whales".to_string() })
/// );
/// assert_eq!(parse_command("delete 3"), Ok(Command::Delete(3)));
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (word, rest) = split_word(trimmed);
    match word.to_ascii_lowercase().as_str() {
        "add" => Ok(Command::Add(rest.to_string())),
        "update" | "rename" => parse_update_command(rest),
        "delete" | "remove" => parse_position(rest).map(Command::Delete),
        "list" | "ls" => Ok(Command::List),
        "schedule" | "generate" => Ok(Command::Schedule),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(ParseError::UnrecognizedCommand(word.to_string())),
    }
}

/// Parse an update command body: "<position> <name>"
fn parse_update_command(rest: &str) -> Result<Command, ParseError> {
    let (position, name) = split_word(rest);
    Ok(Command::Update {
        position: parse_position(position)?,
        name: name.to_string(),
    })
}

/// Parse a one-based position, mapping negatives to the always-invalid 0
fn parse_position(value: &str) -> Result<usize, ParseError> {
    let number = value
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidIndex(value.to_string()))?;
    Ok(usize::try_from(number).unwrap_or(0))
}

/// Split off the first whitespace-delimited word, trimming the remainder
fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}
