//! Interactive terminal front-end for the round-robin league scheduler.
//!
//! Teams are managed with line commands and schedules are printed as plain
//! text or JSON.

use anyhow::{Context, Result};
use log::{info, warn};
use pico_args::Arguments;
use rr_client::{
    commands::Command,
    config::{ClientConfig, Overrides},
    session::{Response, Session},
};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Manage a league roster and generate round-robin schedules

USAGE:
  rr_client [OPTIONS]

OPTIONS:
  --team NAME           Add a team before the session starts (repeatable)
  --min-teams N         Minimum teams for a schedule  [default: env LEAGUE_MIN_TEAMS or 3]
  --max-teams N         Maximum teams for a schedule  [default: env LEAGUE_MAX_TEAMS or 10]

FLAGS:
  --strict-rename       Reject renames that duplicate another team
  --json                Print schedules as JSON
  -h, --help            Print help information

ENVIRONMENT:
  LEAGUE_MIN_TEAMS      Minimum teams for a schedule
  LEAGUE_MAX_TEAMS      Maximum teams for a schedule
  LEAGUE_STRICT_RENAME  Reject duplicate renames (true/false)
  LEAGUE_OUTPUT         Schedule output format (text/json)
  RUST_LOG              Log filter (e.g. debug)
";

struct Args {
    teams: Vec<String>,
    overrides: Overrides,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        teams: pargs.values_from_str("--team")?,
        overrides: Overrides {
            min_teams: pargs.opt_value_from_str("--min-teams")?,
            max_teams: pargs.opt_value_from_str("--max-teams")?,
            strict_rename: pargs.contains("--strict-rename"),
            json: pargs.contains("--json"),
        },
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unexpected arguments: {remaining:?}");
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let config = ClientConfig::from_env(args.overrides).context("Failed to load configuration")?;
    info!("Starting league session with {config:?}");

    run(Session::new(&config), args.teams)
}

fn run(mut session: Session, preload: Vec<String>) -> Result<()> {
    for team in preload {
        let response = session.execute(Command::Add(team));
        if response.is_error() {
            warn!("Skipping preloaded team: {response:?}");
            report(&response)?;
        }
    }

    println!("Round-robin league manager. Type 'help' for commands.");
    if !session.league().list_teams().is_empty() {
        report(&session.handle_line("list"))?;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = session.handle_line(&line);
        if response == Response::Quit {
            break;
        }
        report(&response)?;
    }

    println!();
    Ok(())
}

/// Print a response, errors to stderr
fn report(response: &Response) -> Result<()> {
    match response {
        Response::Info(message) => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{message}\n")?;
        }
        Response::Error(message) => {
            let mut stderr = io::stderr().lock();
            writeln!(stderr, "Error: {message}\n")?;
        }
        Response::Quit => {}
    }
    Ok(())
}
