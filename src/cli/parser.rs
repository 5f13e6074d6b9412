//! Keyword dispatch from raw input text to a [`Command`]

use crate::application::goal::CALORIE_GOAL_USAGE;
use crate::application::{
    AddMealCommand, AddMeasurementCommand, AddMilkCommand, AddWeightCommand, AddWorkoutCommand,
    Command, DeleteCommand, GoalCommand, ListCommand,
};
use crate::domain::GoalKind;
use crate::error::{MamaError, Result};

/// Parse one line of user input.
///
/// Only the keyword is case-insensitive; arguments keep their case so meal and
/// workout names are stored as typed.
pub fn parse(input: &str) -> Result<Command> {
    let trimmed = input.trim();

    // `|` is the storage field separator and is never escaped
    if trimmed.contains('|') {
        return Err(MamaError::Usage(
            "Invalid command arguments! No | allowed!".to_string(),
        ));
    }

    let (keyword, args) = split_keyword(trimmed);

    match keyword.to_lowercase().as_str() {
        "bye" => Ok(Command::Bye),
        "help" => Ok(Command::Help),
        "list" => ListCommand::from_input(args).map(Command::List),
        "delete" => DeleteCommand::from_input(args).map(Command::Delete),
        "milk" => AddMilkCommand::from_input(args).map(Command::AddMilk),
        "weight" => AddWeightCommand::from_input(args).map(Command::AddWeight),
        "workout" => match goal_args(args) {
            Some(rest) => GoalCommand::from_input(GoalKind::WeeklyWorkoutMinutes, rest)
                .map(Command::Goal),
            None => AddWorkoutCommand::from_input(args).map(Command::AddWorkout),
        },
        "calorie" => match goal_args(args) {
            Some(rest) => GoalCommand::from_input(GoalKind::DailyCalories, rest).map(Command::Goal),
            None => Err(MamaError::Usage(format!("Usage: {}", CALORIE_GOAL_USAGE))),
        },
        "dashboard" if args.is_empty() => Ok(Command::Dashboard),
        "meal" => AddMealCommand::from_input(args).map(Command::AddMeal),
        "measure" => AddMeasurementCommand::from_input(args).map(Command::AddMeasurement),
        "" => Err(MamaError::Usage(
            "Please enter a command. Type 'help' to see available commands.".to_string(),
        )),
        _ => Err(MamaError::Usage(
            "Unknown command. Type 'help' to see available commands.".to_string(),
        )),
    }
}

fn split_keyword(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((keyword, args)) => (keyword, args.trim()),
        None => (input, ""),
    }
}

/// Text after a leading `goal` word, or `None` when the arguments are not a
/// goal command
fn goal_args(args: &str) -> Option<&str> {
    let (first, rest) = split_keyword(args);
    first.eq_ignore_ascii_case("goal").then_some(rest)
}
