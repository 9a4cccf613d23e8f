//! Line commands accepted by the command-line front end.

use crate::workouts::types::{Coords, WorkoutError, WorkoutInput};
use thiserror::Error;

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  click <lat> <lng>                     choose the location of the next workout
  submit running <km> <min> <cadence>   log a run, or commit the edit in progress
  submit cycling <km> <min> <elev>      log a ride, or commit the edit in progress
  edit <id>                             start editing a workout
  cancel                                abandon the edit in progress
  delete <id>                           delete a workout
  clear                                 delete every workout
  sort                                  sort by distance, toggling direction
  overview                              fit the map to every workout
  focus <id>                            move the map to a workout
  list                                  show every workout
  reset                                 remove saved data
  help                                  show this text
  quit                                  exit";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Click(Coords),
    Submit(WorkoutInput),
    Edit(String),
    Cancel,
    Delete(String),
    Clear,
    Sort,
    Overview,
    Focus(String),
    List,
    Reset,
    Help,
    Quit,
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        let command = match name.to_lowercase().as_str() {
            "click" => {
                let [lat, lng] = expect_args::<2>(name, &args)?;
                Command::Click(Coords::new(coordinate(lat)?, coordinate(lng)?))
            }
            "submit" => {
                let [kind, distance, duration, extra] = expect_args::<4>(name, &args)?;
                Command::Submit(WorkoutInput::from_form(kind, distance, duration, extra)?)
            }
            "edit" => Command::Edit(single_arg(name, &args)?),
            "delete" => Command::Delete(single_arg(name, &args)?),
            "focus" => Command::Focus(single_arg(name, &args)?),
            "cancel" => Command::Cancel,
            "clear" => Command::Clear,
            "sort" => Command::Sort,
            "overview" => Command::Overview,
            "list" => Command::List,
            "reset" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn expect_args<'a, const N: usize>(
    name: &str,
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::WrongArgs {
        command: name.to_string(),
        expected: N,
        got: args.len(),
    })
}

fn single_arg(name: &str, args: &[&str]) -> Result<String, CommandError> {
    let [arg] = expect_args::<1>(name, args)?;
    Ok(arg.to_string())
}

fn coordinate(text: &str) -> Result<f64, CommandError> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::BadNumber(text.to_string()))
}

/// Errors from parsing a command line.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0} (try 'help')")]
    Unknown(String),

    #[error("'{command}' takes {expected} arguments, got {got}")]
    WrongArgs {
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("Not a number: {0}")]
    BadNumber(String),

    #[error(transparent)]
    Workout(#[from] WorkoutError),
}
